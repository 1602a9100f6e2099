use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitProbability {
    pub digit: u8,
    pub p: f64,
}

/// Distribution over the 10 digits for one tap, sorted by descending `p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitLikelihood {
    pub probabilities: Vec<DigitProbability>,
}

impl DigitLikelihood {
    pub fn top(&self, k: usize) -> &[DigitProbability] {
        &self.probabilities[..k.min(self.probabilities.len())]
    }

    pub fn best(&self) -> Option<DigitProbability> {
        self.probabilities.first().copied()
    }

    pub fn probability_of(&self, digit: u8) -> f64 {
        self.probabilities
            .iter()
            .find(|dp| dp.digit == digit)
            .map(|dp| dp.p)
            .unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().map(|dp| dp.p).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAnalysis {
    pub position: usize,
    pub likelihood: DigitLikelihood,
}
