//! Error types for wordlist-core.
//!
//! Lookups that miss are not errors: `remove` reports `false`,
//! `get_count` returns 0 and `contains` returns `false`. Only aggregate
//! queries over an empty index and ingestion I/O can fail.

use thiserror::Error;

/// The main error type for wordlist operations.
#[derive(Debug, Error)]
pub enum WordlistError {
    /// A query that needs at least one word ran against an empty index.
    #[error("word list is empty")]
    EmptyCollection,

    /// Reading input text failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for wordlist operations.
pub type Result<T> = std::result::Result<T, WordlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_message() {
        assert_eq!(
            WordlistError::EmptyCollection.to_string(),
            "word list is empty"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WordlistError = io.into();
        assert!(matches!(err, WordlistError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
