pub mod likelihood;
pub mod types;

pub use self::likelihood::digit_probabilities;
pub use self::types::{DigitLikelihood, DigitProbability, PositionAnalysis};

use crate::consts::DEFAULT_SIGMA;
use crate::geometry::{KeypadLayout, NormalizedPoint};
use tracing::warn;

/// The spatial half of the analysis: keypad geometry plus kernel spread.
#[derive(Debug, Clone)]
pub struct SpatialModel {
    pub layout: KeypadLayout,
    sigma: f64,
}

impl Default for SpatialModel {
    fn default() -> Self {
        Self::new(KeypadLayout::standard(), DEFAULT_SIGMA)
    }
}

impl SpatialModel {
    pub fn new(layout: KeypadLayout, sigma: f64) -> Self {
        Self {
            layout,
            sigma: sanitize_sigma(sigma),
        }
    }

    pub fn with_sigma(sigma: f64) -> Self {
        Self::new(KeypadLayout::standard(), sigma)
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn likelihood(&self, point: &NormalizedPoint) -> DigitLikelihood {
        digit_probabilities(&self.layout, point, self.sigma)
    }

    /// One analysis per point, positions numbered in tap order.
    pub fn analyze(&self, points: &[NormalizedPoint]) -> Vec<PositionAnalysis> {
        points
            .iter()
            .enumerate()
            .map(|(position, p)| PositionAnalysis {
                position,
                likelihood: self.likelihood(p),
            })
            .collect()
    }
}

/// Scores `points` against the standard keypad.
pub fn analyze_taps(points: &[NormalizedPoint], sigma: f64) -> Vec<PositionAnalysis> {
    SpatialModel::with_sigma(sigma).analyze(points)
}

fn sanitize_sigma(sigma: f64) -> f64 {
    if sigma.is_finite() && sigma > 0.0 {
        sigma
    } else {
        warn!(
            "Invalid sigma {}, using default {}",
            sigma, DEFAULT_SIGMA
        );
        DEFAULT_SIGMA
    }
}
