use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod count_cmd;
mod error;
mod shared;
mod stats_cmd;
mod words_cmd;

use cli::{Cli, Commands};
use count_cmd::run_count;
use error::{
    CliResult, EXIT_RUNTIME_ERROR, OutputFormat, output_format_hint, parse_output_format,
    render_error,
};
use stats_cmd::run_stats;
use words_cmd::run_words;

/// Logs go to stderr so stdout carries only the report. `RUST_LOG`
/// overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}

fn dispatch<A>(
    args: A,
    output_format: &str,
    run: fn(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::from(EXIT_RUNTIME_ERROR);
    }

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Stats(args) => {
            let output_format = args.output_format.clone();
            dispatch(args, &output_format, run_stats)
        }
        Commands::Words(args) => {
            let output_format = args.output_format.clone();
            dispatch(args, &output_format, run_words)
        }
        Commands::Count(args) => {
            let output_format = args.output_format.clone();
            dispatch(args, &output_format, run_count)
        }
    }
}
