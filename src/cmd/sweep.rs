use super::TapArgs;
use crate::reports;
use clap::Args;
use pinsight::api::{self, AnalysisRequest, PinsightState};
use pinsight::config::AnalysisParams;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub taps: TapArgs,

    #[command(flatten)]
    pub params: AnalysisParams,

    /// Number of intervals between weight 0.0 and 1.0
    #[arg(long, default_value_t = 10)]
    pub steps: usize,
}

pub fn run(args: &SweepArgs, params: AnalysisParams, frequency_path: &str) -> Result<(), String> {
    let steps = args.steps.max(1);
    let state = PinsightState::new(frequency_path, params);

    let request = AnalysisRequest::builder()
        .taps(args.taps.taps.clone())
        .bounds(args.taps.bounds())
        .spatial_weight(0.0)
        .build();
    let first = api::analyze(&state, &request)?;

    let mut rows = vec![first];
    for i in 1..=steps {
        let w = i as f64 / steps as f64;
        rows.push(api::reweight(&state, w)?);
    }

    reports::print_sweep(&rows);
    Ok(())
}
