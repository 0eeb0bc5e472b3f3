use clap::{Parser, Subcommand};

/// Word frequency statistics tool
#[derive(Parser, Debug)]
#[command(name = "wordlist", version)]
#[command(about = "Word frequency statistics tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print summary statistics for the input text
    Stats(StatsArgs),
    /// List every word in sorted order with its count
    Words(WordsArgs),
    /// Look up the count of specific words
    Count(CountArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Drop a word from the index after reading (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "WORD")]
    pub exclude: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct WordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only print the first N words
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct CountArgs {
    /// Words to look up
    #[arg(required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
