pub mod normalize;

pub use self::normalize::normalize_taps;

use crate::consts::{DIGIT_COUNT, KEYPAD_ASPECT_RATIO};
use serde::{Deserialize, Serialize};

/// A raw tap in screen pixels, as recorded by the capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawTap {
    pub x: f64,
    pub y: f64,
}

impl RawTap {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Extent of the capture surface when the first tap of a session landed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureBounds {
    pub width: f64,
    pub height: f64,
}

impl CaptureBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Only strictly positive extents can be used for grid-relative mapping.
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A tap mapped into keypad space. Not clamped: off-surface taps leave [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn dist_sq(&self, other: &NormalizedPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyCenter {
    pub digit: u8,
    pub x: f64,
    pub y: f64,
}

impl KeyCenter {
    pub fn point(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x, self.y)
    }
}

/// The reference keypad: digit keys laid out in the unit square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypadLayout {
    /// Indexed by digit, so `centers[d].digit == d`.
    pub centers: [KeyCenter; DIGIT_COUNT],
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeypadLayout {
    /// The standard phone/ATM keypad.
    ///
    /// ```text
    ///   1 2 3      columns at x = 1/6, 3/6, 5/6
    ///   4 5 6      rows at    y = 1/8, 3/8, 5/8, 7/8
    ///   7 8 9
    ///     0
    /// ```
    pub fn standard() -> Self {
        const COL: [f64; 3] = [1.0 / 6.0, 3.0 / 6.0, 5.0 / 6.0];
        const ROW: [f64; 4] = [1.0 / 8.0, 3.0 / 8.0, 5.0 / 8.0, 7.0 / 8.0];

        let key = |digit: u8, col: usize, row: usize| KeyCenter {
            digit,
            x: COL[col],
            y: ROW[row],
        };

        KeypadLayout {
            centers: [
                key(0, 1, 3),
                key(1, 0, 0),
                key(2, 1, 0),
                key(3, 2, 0),
                key(4, 0, 1),
                key(5, 1, 1),
                key(6, 2, 1),
                key(7, 0, 2),
                key(8, 1, 2),
                key(9, 2, 2),
            ],
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        KEYPAD_ASPECT_RATIO
    }

    pub fn center(&self, digit: u8) -> Option<&KeyCenter> {
        self.centers.get(digit as usize)
    }

    /// Closest key to `point`. Equidistant keys resolve to the lower digit.
    pub fn nearest_digit(&self, point: &NormalizedPoint) -> u8 {
        let mut best = 0u8;
        let mut best_dist = f64::INFINITY;
        for c in &self.centers {
            let d = point.dist_sq(&c.point());
            if d < best_dist {
                best_dist = d;
                best = c.digit;
            }
        }
        best
    }
}
