mod common;

use common::*;
use pinsight::api::{self, run_pipeline, AnalysisRequest, PinsightState};
use pinsight::capture::TapCapture;
use pinsight::config::AnalysisParams;
use pinsight::ranking::RankingStrategy;

fn corner_request(weight: f64) -> AnalysisRequest {
    AnalysisRequest::builder()
        .taps(corner_taps())
        .bounds(portrait_bounds())
        .spatial_weight(weight)
        .build()
}

#[test]
fn test_service_matches_direct_pipeline() {
    let params = AnalysisParams::default();
    let state = PinsightState::with_table(descending_table(), params.clone());

    let served = api::analyze(&state, &corner_request(0.5)).unwrap();
    let direct = run_pipeline(&corner_taps(), portrait_bounds(), &descending_table(), &params);

    assert_eq!(served, direct);
}

#[test]
fn test_reweight_reuses_last_tap_set() {
    let state = PinsightState::with_table(
        popular_table(&[("2580", 9000)]),
        AnalysisParams::default(),
    );

    let spatial_only = api::analyze(&state, &corner_request(1.0)).unwrap();
    let freq_only = api::reweight(&state, 0.0).unwrap();

    assert_eq!(spatial_only.spatial, freq_only.spatial);
    assert_eq!(spatial_only.top(RankingStrategy::Composite).unwrap().pin, "1379");
    assert_eq!(freq_only.top(RankingStrategy::Composite).unwrap().pin, "2580");
    assert_eq!(freq_only.spatial_weight, 0.0);
}

#[test]
fn test_reweight_without_analysis_fails() {
    let state = PinsightState::with_table(descending_table(), AnalysisParams::default());
    let err = api::reweight(&state, 0.3).unwrap_err();
    assert!(err.contains("Analyze a tap set first"));

    api::analyze(&state, &corner_request(0.5)).unwrap();
    assert!(api::reweight(&state, 0.3).is_ok());

    api::clear_session(&state);
    assert!(api::reweight(&state, 0.3).is_err());
}

#[test]
fn test_out_of_range_weights_are_clamped() {
    let state = PinsightState::with_table(descending_table(), AnalysisParams::default());

    let high = api::analyze(&state, &corner_request(7.5)).unwrap();
    assert_eq!(high.spatial_weight, 1.0);

    let low = api::reweight(&state, -2.0).unwrap();
    assert_eq!(low.spatial_weight, 0.0);

    let nan = api::reweight(&state, f64::NAN).unwrap();
    assert_eq!(nan.spatial_weight, 0.5);
}

#[test]
fn test_new_taps_replace_cached_candidates() {
    let state = PinsightState::with_table(descending_table(), AnalysisParams::default());
    api::analyze(&state, &corner_request(0.5)).unwrap();

    let column = AnalysisRequest::builder()
        .taps(center_column_taps())
        .bounds(portrait_bounds())
        .build();
    let result = api::analyze(&state, &column).unwrap();
    assert_eq!(result.spatial[0].pin, "2580");

    let again = api::reweight(&state, 1.0).unwrap();
    assert_eq!(again.spatial[0].pin, "2580");
}

#[test]
fn test_missing_table_surfaces_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = PinsightState::new(dir.path().join("absent.csv"), AnalysisParams::default());

    let err = api::analyze(&state, &corner_request(0.5)).unwrap_err();
    assert!(err.starts_with("Failed to load frequency data"), "{}", err);
    assert!(!state.frequencies.is_loaded());
}

#[test]
fn test_table_is_loaded_lazily_from_disk() {
    let file = write_table_csv(|p| if p == "1379" { 50 } else { 2 });
    let state = PinsightState::new(file.path(), AnalysisParams::default());
    assert!(!state.frequencies.is_loaded());

    let result = api::analyze(&state, &corner_request(0.5)).unwrap();
    assert!(state.frequencies.is_loaded());
    assert_eq!(result.top(RankingStrategy::FrequencyFiltered).unwrap().pin, "1379");
}

#[test]
fn test_capture_feeds_request() {
    let mut capture = TapCapture::new();
    for tap in corner_taps() {
        assert!(capture.add_tap(tap, portrait_bounds()));
    }
    assert!(capture.is_complete());
    assert!(!capture.add_tap(pinsight::geometry::RawTap::new(1.0, 1.0), None));

    let request = AnalysisRequest::from_capture(&capture, 0.5);
    assert_eq!(request, corner_request(0.5));
}
