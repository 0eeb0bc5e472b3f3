use std::fs::File;
use std::io::{self, BufRead, BufReader};

use serde::Serialize;
use tracing::debug;
use wordlist_core::Wordlist;

use crate::cli::InputArgs;
use crate::error::{CliError, CliResult};

/// Reads the selected input into an index, then applies `--exclude`.
pub fn load_wordlist(args: &InputArgs) -> CliResult<Wordlist> {
    let reader: Box<dyn BufRead> = if args.stdin || args.input == "-" {
        debug!("Reading words from stdin");
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input).map_err(|e| {
            CliError::runtime(format!("Failed to open file '{}': {}", args.input, e))
        })?;
        debug!(path = %args.input, "Reading words from file");
        Box::new(BufReader::new(file))
    };

    let mut list = Wordlist::from_reader(reader)?;
    apply_exclusions(&mut list, &args.exclude);
    Ok(list)
}

pub fn apply_exclusions(list: &mut Wordlist, words: &[String]) {
    for word in words {
        if list.remove(word) {
            debug!(word = %word, "Excluded word");
        } else {
            debug!(word = %word, "Excluded word was not present");
        }
    }
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))
}
