use crate::consts::{
    DEFAULT_FILTER_PCT, DEFAULT_LIMIT, DEFAULT_SIGMA, DEFAULT_SPATIAL_WEIGHT, DEFAULT_TOP_K,
    DIGIT_COUNT,
};
use crate::error::{PinsightError, PsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisParams {
    #[command(flatten)]
    pub model: ModelParams,
    #[command(flatten)]
    pub ranking: RankingParams,
}

/// Spatial model and candidate search.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelParams {
    /// Gaussian kernel spread, in keypad units
    #[arg(long, default_value_t = DEFAULT_SIGMA)]
    pub sigma: f64,
    /// Digits kept per tap position (candidates = top_k^4)
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankingParams {
    /// Share of spatial candidates eligible for the frequency-filtered list
    #[arg(long, default_value_t = DEFAULT_FILTER_PCT)]
    pub filter_pct: f64,
    /// Length of every ranked list
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
    /// Weight of the spatial term in the composite list (frequency gets 1 - w)
    #[arg(long, default_value_t = DEFAULT_SPATIAL_WEIGHT)]
    pub spatial_weight: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            filter_pct: DEFAULT_FILTER_PCT,
            limit: DEFAULT_LIMIT,
            spatial_weight: DEFAULT_SPATIAL_WEIGHT,
        }
    }
}

impl AnalysisParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PsResult<Self> {
        let path = path.as_ref();
        info!("⚖️  Loading analysis params from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    /// Overwrites fields with values the user typed on the command line,
    /// leaving file-provided values alone where the CLI only had defaults.
    pub fn merge_from_cli(&mut self, cli: &AnalysisParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(model.sigma, "sigma");
        update_if_present!(model.top_k, "top_k");
        update_if_present!(ranking.filter_pct, "filter_pct");
        update_if_present!(ranking.limit, "limit");
        update_if_present!(ranking.spatial_weight, "spatial_weight");
    }

    pub fn validate(&self) -> PsResult<()> {
        let m = &self.model;
        let r = &self.ranking;

        if !(m.sigma.is_finite() && m.sigma > 0.0) {
            return Err(PinsightError::Config(format!(
                "sigma must be a positive number, got {}",
                m.sigma
            )));
        }
        if m.top_k == 0 || m.top_k > DIGIT_COUNT {
            return Err(PinsightError::Config(format!(
                "top_k must be within 1..={}, got {}",
                DIGIT_COUNT, m.top_k
            )));
        }
        if !(0.0..=1.0).contains(&r.filter_pct) {
            return Err(PinsightError::Config(format!(
                "filter_pct must be within [0, 1], got {}",
                r.filter_pct
            )));
        }
        if !(0.0..=1.0).contains(&r.spatial_weight) {
            return Err(PinsightError::Config(format!(
                "spatial_weight must be within [0, 1], got {}",
                r.spatial_weight
            )));
        }
        if r.limit == 0 {
            return Err(PinsightError::Config("limit must be at least 1".to_string()));
        }
        Ok(())
    }
}
