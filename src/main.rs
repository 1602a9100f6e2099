use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use pinsight::config::AnalysisParams;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// PIN frequency table (PIN,COUNT per line, all 10,000 PINs)
    #[arg(global = true, short, long, default_value = "data/pin-frequency.csv")]
    frequency: String,

    /// JSON file with analysis params; explicit flags override it
    #[arg(global = true, long)]
    params: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank likely PINs for four taps
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Show how the composite winner moves with the spatial weight
    Sweep(cmd::sweep::SweepArgs),
    /// Load and check a frequency table
    Validate(cmd::validate::ValidateArgs),
}

fn resolve_params(
    cli_params: &AnalysisParams,
    file: Option<&str>,
    sub_matches: &ArgMatches,
) -> AnalysisParams {
    let params = match file {
        Some(path) => {
            let mut from_file = AnalysisParams::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Could not load params from '{}': {}", path, e);
                process::exit(1);
            });
            from_file.merge_from_cli(cli_params, sub_matches);
            from_file
        }
        None => cli_params.clone(),
    };

    if let Err(e) = params.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }
    params
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing Pinsight...");

    match &cli.command {
        Commands::Analyze(args) => {
            let sub = matches
                .subcommand_matches("analyze")
                .unwrap_or_else(|| process::exit(2));
            let params = resolve_params(&args.params, cli.params.as_deref(), sub);
            if let Err(e) = cmd::analyze::run(args, params, &cli.frequency) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        Commands::Sweep(args) => {
            let sub = matches
                .subcommand_matches("sweep")
                .unwrap_or_else(|| process::exit(2));
            let params = resolve_params(&args.params, cli.params.as_deref(), sub);
            if let Err(e) = cmd::sweep::run(args, params, &cli.frequency) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        Commands::Validate(args) => {
            if cli.params.is_some() {
                warn!("⚠️  --params has no effect on validate");
            }
            if let Err(e) = cmd::validate::run(args, &cli.frequency) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
    }
}
