//! Report types produced by the index.
//!
//! - [`WordEntry`] - One ranked line of the sorted listing
//! - [`MostFrequent`] - The most frequent word and its count
//! - [`Statistics`] - Summary of a whole index

use std::fmt;

use serde::Serialize;

/// One line of the sorted word listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    /// Position in ascending word order, starting at 1.
    pub rank: usize,
    /// The word itself.
    pub word: String,
    /// Number of occurrences.
    pub count: u64,
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.rank, self.word, self.count)
    }
}

/// The word with the highest count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostFrequent {
    pub word: String,
    pub count: u64,
}

impl fmt::Display for MostFrequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.count)
    }
}

/// Summary statistics of a non-empty index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of unique words.
    pub different_words: usize,
    /// Sum of all occurrence counts.
    pub total_words: u64,
    /// Highest count, ties resolved to the smallest word.
    pub most_frequent: MostFrequent,
    /// Number of words seen exactly once.
    pub singletons: usize,
    /// `singletons` as a percentage of `different_words`.
    pub singleton_percent: f64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of different words: {}", self.different_words)?;
        writeln!(f, "    Total number of words: {}", self.total_words)?;
        writeln!(f, "       Most frequent word: {}", self.most_frequent)?;
        write!(
            f,
            "     Number of singletons: {} ({:.0}%)",
            self.singletons, self.singleton_percent
        )
    }
}
