use std::process::ExitCode;

use tracing::debug;

use crate::cli::StatsArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_wordlist, to_json_pretty};

pub fn run_stats(args: StatsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let list = load_wordlist(&args.input)?;
    let stats = list.statistics()?;
    debug!(?stats, "Computed statistics");

    match output_format {
        OutputFormat::Json => println!("{}", to_json_pretty(&stats)?),
        OutputFormat::Text => println!("{}", stats),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
