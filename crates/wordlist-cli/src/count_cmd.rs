use std::process::ExitCode;

use serde::Serialize;
use wordlist_core::Wordlist;

use crate::cli::CountArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_wordlist, to_json_pretty};

pub fn run_count(args: CountArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let list = load_wordlist(&args.input)?;
    let lookups = lookup_words(&list, &args.words);

    match output_format {
        OutputFormat::Json => println!("{}", to_json_pretty(&lookups)?),
        OutputFormat::Text => {
            for lookup in &lookups {
                println!("{}: {}", lookup.word, lookup.count);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct WordLookup {
    word: String,
    present: bool,
    count: u64,
}

fn lookup_words(list: &Wordlist, words: &[String]) -> Vec<WordLookup> {
    words
        .iter()
        .map(|word| WordLookup {
            word: word.clone(),
            present: list.contains(word),
            count: list.get_count(word),
        })
        .collect()
}
