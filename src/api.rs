use crate::candidates::{generate_candidates, Candidate};
use crate::capture::TapCapture;
use crate::config::{AnalysisParams, ModelParams, RankingParams};
use crate::consts::DEFAULT_SPATIAL_WEIGHT;
use crate::frequency::{FrequencyCache, FrequencyTable};
use crate::geometry::{normalize_taps, CaptureBounds, NormalizedPoint, RawTap};
use crate::model::{analyze_taps, PositionAnalysis};
use crate::ranking::{
    rank_by_composite, rank_by_filtered_frequency, rank_by_spatial, sanitize_weight,
    RankingStrategy,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};
use typed_builder::TypedBuilder;

/// The three rankings for one tap set at one blend weight.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub spatial: Vec<Candidate>,
    pub frequency_filtered: Vec<Candidate>,
    pub composite: Vec<Candidate>,
    pub spatial_weight: f64,
    pub normalized: Vec<NormalizedPoint>,
    pub positions: Vec<PositionAnalysis>,
}

impl AnalysisResult {
    pub fn ranking(&self, strategy: RankingStrategy) -> &[Candidate] {
        match strategy {
            RankingStrategy::Spatial => &self.spatial,
            RankingStrategy::FrequencyFiltered => &self.frequency_filtered,
            RankingStrategy::Composite => &self.composite,
        }
    }

    pub fn top(&self, strategy: RankingStrategy) -> Option<&Candidate> {
        self.ranking(strategy).first()
    }
}

/// Everything upstream of ranking for one tap set: the expensive part,
/// kept so a new blend weight only re-runs the rankings.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    taps: Vec<RawTap>,
    bounds: Option<CaptureBounds>,
    model: ModelParams,
    normalized: Vec<NormalizedPoint>,
    positions: Vec<PositionAnalysis>,
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn build(taps: &[RawTap], bounds: Option<CaptureBounds>, model: &ModelParams) -> Self {
        let normalized = normalize_taps(taps, bounds);
        let positions = analyze_taps(&normalized, model.sigma);
        let candidates = generate_candidates(&positions, model.top_k);
        debug!(
            "Built candidate set: {} taps -> {} candidates",
            taps.len(),
            candidates.len()
        );

        Self {
            taps: taps.to_vec(),
            bounds,
            model: model.clone(),
            normalized,
            positions,
            candidates,
        }
    }

    fn matches(&self, taps: &[RawTap], bounds: Option<CaptureBounds>, model: &ModelParams) -> bool {
        self.taps == taps && self.bounds == bounds && &self.model == model
    }

    /// Spatially ordered, untruncated.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn normalized(&self) -> &[NormalizedPoint] {
        &self.normalized
    }

    pub fn positions(&self) -> &[PositionAnalysis] {
        &self.positions
    }

    pub fn rank(
        &self,
        table: &FrequencyTable,
        ranking: &RankingParams,
        spatial_weight: f64,
    ) -> AnalysisResult {
        let w = sanitize_weight(spatial_weight);
        AnalysisResult {
            spatial: rank_by_spatial(&self.candidates, ranking.limit),
            frequency_filtered: rank_by_filtered_frequency(
                &self.candidates,
                table,
                ranking.filter_pct,
                ranking.limit,
            ),
            composite: rank_by_composite(&self.candidates, table, w, ranking.limit),
            spatial_weight: w,
            normalized: self.normalized.clone(),
            positions: self.positions.clone(),
        }
    }
}

/// Taps to normalize, the surface they were captured on, and the blend.
#[derive(TypedBuilder, Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub taps: Vec<RawTap>,
    #[builder(default)]
    pub bounds: Option<CaptureBounds>,
    #[builder(default = DEFAULT_SPATIAL_WEIGHT)]
    pub spatial_weight: f64,
}

impl AnalysisRequest {
    pub fn from_capture(capture: &TapCapture, spatial_weight: f64) -> Self {
        Self {
            taps: capture.taps().to_vec(),
            bounds: capture.bounds(),
            spatial_weight,
        }
    }
}

/// Normalize, score, enumerate and rank in one pass. No caching.
pub fn run_pipeline(
    taps: &[RawTap],
    bounds: Option<CaptureBounds>,
    table: &FrequencyTable,
    params: &AnalysisParams,
) -> AnalysisResult {
    CandidateSet::build(taps, bounds, &params.model).rank(
        table,
        &params.ranking,
        params.ranking.spatial_weight,
    )
}

/// State required to serve analyses to a front end.
pub struct PinsightState {
    pub frequencies: FrequencyCache,
    pub frequency_path: PathBuf,
    pub params: AnalysisParams,
    session: Mutex<Option<CandidateSet>>,
}

impl PinsightState {
    pub fn new<P: Into<PathBuf>>(frequency_path: P, params: AnalysisParams) -> Self {
        Self {
            frequencies: FrequencyCache::new(),
            frequency_path: frequency_path.into(),
            params,
            session: Mutex::new(None),
        }
    }

    /// State backed by an already validated table; nothing is read from disk.
    pub fn with_table(table: FrequencyTable, params: AnalysisParams) -> Self {
        Self {
            frequencies: FrequencyCache::preloaded(table),
            frequency_path: PathBuf::new(),
            params,
            session: Mutex::new(None),
        }
    }

    fn table(&self) -> Result<Arc<FrequencyTable>, String> {
        self.frequencies
            .get_or_load(&self.frequency_path)
            .map_err(|e| format!("Failed to load frequency data: {}", e))
    }
}

/// Service: analyze a tap set.
///
/// Candidate generation is reused when the taps, bounds and model params
/// match the previous call, so changing only the weight is cheap.
pub fn analyze(state: &PinsightState, request: &AnalysisRequest) -> Result<AnalysisResult, String> {
    let table = state.table()?;
    let mut guard = state.session.lock().map_err(|e| e.to_string())?;

    let reuse = guard
        .as_ref()
        .is_some_and(|s| s.matches(&request.taps, request.bounds, &state.params.model));

    if reuse {
        debug!("Reusing cached candidates");
    } else {
        info!("🔎 Analyzing {} taps", request.taps.len());
        *guard = Some(CandidateSet::build(
            &request.taps,
            request.bounds,
            &state.params.model,
        ));
    }

    let set = guard
        .as_ref()
        .ok_or("Candidate cache unexpectedly empty")?;
    Ok(set.rank(&table, &state.params.ranking, request.spatial_weight))
}

/// Service: re-rank the last analyzed tap set with a new weight.
pub fn reweight(state: &PinsightState, spatial_weight: f64) -> Result<AnalysisResult, String> {
    let table = state.table()?;
    let guard = state.session.lock().map_err(|e| e.to_string())?;
    let set = guard
        .as_ref()
        .ok_or("No analysis to re-rank. Analyze a tap set first.")?;
    Ok(set.rank(&table, &state.params.ranking, spatial_weight))
}

/// Service: forget the cached tap set (e.g. when a new capture starts).
pub fn clear_session(state: &PinsightState) {
    let mut guard = state
        .session
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
