use super::TapArgs;
use crate::reports;
use clap::Args;
use pinsight::api::{self, AnalysisRequest, PinsightState};
use pinsight::config::AnalysisParams;
use pinsight::consts::PIN_LENGTH;
use pinsight::ranking::RankingStrategy;
use strum::IntoEnumIterator;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub taps: TapArgs,

    #[command(flatten)]
    pub params: AnalysisParams,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &AnalyzeArgs, params: AnalysisParams, frequency_path: &str) -> Result<(), String> {
    if args.taps.taps.len() != PIN_LENGTH {
        warn!(
            "⚠️  Got {} taps, need exactly {}; rankings will be empty",
            args.taps.taps.len(),
            PIN_LENGTH
        );
    }

    let weight = params.ranking.spatial_weight;
    let state = PinsightState::new(frequency_path, params);
    let request = AnalysisRequest::builder()
        .taps(args.taps.taps.clone())
        .bounds(args.taps.bounds())
        .spatial_weight(weight)
        .build();

    let result = api::analyze(&state, &request)?;

    if args.json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    reports::print_position_report(&result.positions, &result.normalized);
    for strategy in RankingStrategy::iter() {
        reports::print_ranking(strategy, result.ranking(strategy));
    }
    reports::print_weight_note(result.spatial_weight);
    Ok(())
}
