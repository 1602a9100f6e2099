use super::types::{DigitLikelihood, DigitProbability};
use crate::consts::DIGIT_COUNT;
use crate::geometry::{KeypadLayout, NormalizedPoint};
use std::cmp::Ordering;

/// Gaussian kernel weight for a squared distance.
#[inline(always)]
pub fn gaussian_weight(dist_sq: f64, sigma: f64) -> f64 {
    (-dist_sq / (2.0 * sigma * sigma)).exp()
}

/// Orders by descending probability, equal probabilities by ascending digit.
#[inline(always)]
pub fn by_probability_desc(a: &DigitProbability, b: &DigitProbability) -> Ordering {
    b.p.total_cmp(&a.p).then(a.digit.cmp(&b.digit))
}

/// Probability of each digit for a tap at `point`.
///
/// Raw weights are `exp(-d^2 / 2 sigma^2)` against every key center,
/// normalized to sum to 1. If every weight underflows to zero the result
/// is uniform.
pub fn digit_probabilities(
    layout: &KeypadLayout,
    point: &NormalizedPoint,
    sigma: f64,
) -> DigitLikelihood {
    let mut probabilities: Vec<DigitProbability> = layout
        .centers
        .iter()
        .map(|c| DigitProbability {
            digit: c.digit,
            p: gaussian_weight(point.dist_sq(&c.point()), sigma),
        })
        .collect();

    let sum: f64 = probabilities.iter().map(|dp| dp.p).sum();

    if sum > 0.0 && sum.is_finite() {
        for dp in probabilities.iter_mut() {
            dp.p /= sum;
        }
    } else {
        let uniform = 1.0 / DIGIT_COUNT as f64;
        for dp in probabilities.iter_mut() {
            dp.p = uniform;
        }
    }

    probabilities.sort_by(by_probability_desc);
    DigitLikelihood { probabilities }
}
