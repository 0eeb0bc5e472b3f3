//! # wordlist-core
//!
//! A word-frequency index backed by a height-balanced binary search tree.
//!
//! Words are kept in byte-lexicographic order in an AVL tree, with one
//! node per unique word and an occurrence counter on each node.
//!
//! ## Features
//!
//! - **Balanced**: inserts and removals rebalance with AVL rotations, so
//!   lookups stay logarithmic even for sorted input.
//! - **Counting**: repeated words bump a counter instead of adding nodes.
//! - **Aggregates**: unique/total counts, singletons, most frequent word
//!   and a ranked, sorted listing.
//! - **Ingestion**: build an index from any `BufRead`, a file, or a string.
//!
//! ## Example
//!
//! ```rust
//! use wordlist_core::prelude::*;
//!
//! let list = Wordlist::from("the quick brown fox\nthe lazy the");
//!
//! assert_eq!(list.different_words(), 5);
//! assert_eq!(list.total_words(), 7);
//! assert_eq!(list.most_frequent().unwrap(), ("the", 3));
//!
//! for (rank, word, count) in &list {
//!     println!("{rank}. {word} {count}");
//! }
//!
//! println!("{}", list.statistics().unwrap());
//! ```

pub mod error;
pub mod ingest;
pub mod models;
pub mod tree;

// Re-export commonly used types at the crate root
pub use error::{Result, WordlistError};
pub use ingest::tokenize;
pub use models::{MostFrequent, Statistics, WordEntry};
pub use tree::{Iter, Wordlist};

/// Prelude module for convenient imports.
///
/// ```
/// use wordlist_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, WordlistError};
    pub use crate::ingest::tokenize;
    pub use crate::models::*;
    pub use crate::tree::{Iter, Wordlist};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn full_workflow_from_reader() {
        let input = "the quick brown fox\njumps over the lazy dog\n";
        let mut list = Wordlist::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(list.different_words(), 8);
        assert_eq!(list.total_words(), 9);
        assert_eq!(list.singletons(), 7);

        assert!(list.remove("the"));
        let stats = list.statistics().unwrap();
        assert_eq!(stats.different_words, 7);
        assert_eq!(stats.total_words, 7);
        // All ties at 1: smallest word wins.
        assert_eq!(stats.most_frequent.word, "brown");
    }

    #[test]
    fn full_workflow_listing() {
        let list = Wordlist::from("b a c a");
        let lines: Vec<String> = list.entries().iter().map(|e| e.to_string()).collect();
        assert_eq!(lines, ["1. a 2", "2. b 1", "3. c 1"]);
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let list: Wordlist = tokenize("x y").collect();
        let _entries: Vec<WordEntry> = list.entries();
        let _err = WordlistError::EmptyCollection;
    }
}
