/// Number of taps (and digits) in every PIN.
pub const PIN_LENGTH: usize = 4;

/// Digits 0..=9.
pub const DIGIT_COUNT: usize = 10;

/// Every 4-digit string "0000".."9999".
pub const PIN_SPACE: usize = 10_000;

/// Gaussian kernel spread in normalized keypad units.
pub const DEFAULT_SIGMA: f64 = 0.35;

/// Digits kept per position during candidate enumeration (4^4 = 256 candidates).
pub const DEFAULT_TOP_K: usize = 4;

/// Share of the spatial ranking that survives into the frequency-filtered list.
pub const DEFAULT_FILTER_PCT: f64 = 0.25;

/// Default length of every ranked list.
pub const DEFAULT_LIMIT: usize = 10;

/// Default weight of the spatial term in the composite ranking.
pub const DEFAULT_SPATIAL_WEIGHT: f64 = 0.5;

/// Width / height of a standard 3x4 keypad.
pub const KEYPAD_ASPECT_RATIO: f64 = 0.75;

/// A bounding box side is never allowed below this fraction of the other side.
pub const MIN_DIMENSION_RATIO: f64 = 0.1;
