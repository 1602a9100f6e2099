use crate::candidates::{score_desc, Candidate};
use crate::consts::DEFAULT_SPATIAL_WEIGHT;
use crate::frequency::{normalize_frequency, FrequencyTable};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Joint tap likelihood alone.
    Spatial,
    /// Most popular PINs among the spatially plausible ones.
    FrequencyFiltered,
    /// Weighted blend of normalized likelihood and popularity.
    Composite,
}

impl RankingStrategy {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Spatial => "Spatial",
            Self::FrequencyFiltered => "Frequency-Filtered",
            Self::Composite => "Composite",
        }
    }

    /// Unit of the candidate score under this strategy.
    pub fn score_label(&self) -> &'static str {
        match self {
            Self::Spatial => "Likelihood",
            Self::FrequencyFiltered => "Count",
            Self::Composite => "Blend",
        }
    }
}

/// The spatial ranking is the generator's own order, truncated.
pub fn rank_by_spatial(candidates: &[Candidate], limit: usize) -> Vec<Candidate> {
    candidates.iter().take(limit).copied().collect()
}

/// Top `ceil(N * filter_pct)` candidates by spatial score, re-sorted by raw
/// count. The returned scores are counts, not probabilities.
///
/// Expects `candidates` in spatial order. Equal counts keep that order.
pub fn rank_by_filtered_frequency(
    candidates: &[Candidate],
    table: &FrequencyTable,
    filter_pct: f64,
    limit: usize,
) -> Vec<Candidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let cutoff = ((candidates.len() as f64 * filter_pct).ceil().max(0.0) as usize)
        .min(candidates.len());

    let mut ranked: Vec<Candidate> = candidates[..cutoff]
        .iter()
        .map(|c| Candidate::new(c.pin, table.get(&c.pin) as f64))
        .collect();
    ranked.sort_by(score_desc);
    ranked.truncate(limit);
    ranked
}

/// Blends normalized spatial score and normalized count over the whole
/// candidate set.
///
/// Both terms are scaled by their maximum within `candidates` (not the whole
/// table). `spatial_weight = 1.0` reproduces the spatial order; `0.0` ranks
/// purely by count. Equal blends keep the input (spatial) order.
pub fn rank_by_composite(
    candidates: &[Candidate],
    table: &FrequencyTable,
    spatial_weight: f64,
    limit: usize,
) -> Vec<Candidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let w = sanitize_weight(spatial_weight);
    let wf = 1.0 - w;

    let max_spatial = candidates
        .iter()
        .map(|c| c.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let counts: Vec<u64> = candidates.iter().map(|c| table.get(&c.pin)).collect();
    let max_count = counts.iter().copied().max().unwrap_or(0);

    let mut ranked: Vec<Candidate> = candidates
        .iter()
        .zip(&counts)
        .map(|(c, &count)| {
            let norm_spatial = if max_spatial > 0.0 {
                c.score / max_spatial
            } else {
                0.0
            };
            let norm_freq = normalize_frequency(count, max_count);
            Candidate::new(c.pin, w * norm_spatial + wf * norm_freq)
        })
        .collect();

    ranked.sort_by(score_desc);
    ranked.truncate(limit);
    ranked
}

/// Clamps into [0, 1]; NaN becomes the default weight.
pub fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        warn!(
            "Spatial weight is NaN, using default {}",
            DEFAULT_SPATIAL_WEIGHT
        );
        return DEFAULT_SPATIAL_WEIGHT;
    }
    weight.clamp(0.0, 1.0)
}
