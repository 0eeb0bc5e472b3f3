use std::process::ExitCode;

use wordlist_core::WordEntry;

use crate::cli::WordsArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_wordlist, to_json_pretty};

pub fn run_words(args: WordsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let list = load_wordlist(&args.input)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    match output_format {
        OutputFormat::Json => {
            let entries: Vec<WordEntry> = list.entries().into_iter().take(limit).collect();
            println!("{}", to_json_pretty(&entries)?);
        }
        OutputFormat::Text => {
            for (rank, word, count) in list.iter().take(limit) {
                println!("{}. {} {}", rank, word, count);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
