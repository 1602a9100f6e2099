use crate::reports;
use clap::Args;
use pinsight::frequency::load_frequency_table;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// How many of the most common PINs to list
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,
}

pub fn run(args: &ValidateArgs, frequency_path: &str) -> Result<(), String> {
    let table = load_frequency_table(frequency_path)
        .map_err(|e| format!("Frequency table '{}' is invalid: {}", frequency_path, e))?;

    println!("\n🔎 === FREQUENCY TABLE AUDIT === 🔎");
    reports::print_frequency_summary(frequency_path, &table, args.top);
    Ok(())
}
