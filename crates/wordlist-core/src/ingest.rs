//! Feeding text into a [`Wordlist`].
//!
//! Text is read line by line and split on whitespace. Tokens are inserted
//! exactly as they appear: no case folding, no punctuation stripping.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::Result;
use crate::tree::Wordlist;

/// Splits one line of text into whitespace-delimited tokens.
///
/// ```
/// use wordlist_core::ingest::tokenize;
///
/// let tokens: Vec<&str> = tokenize("  the quick\tfox ").collect();
/// assert_eq!(tokens, ["the", "quick", "fox"]);
/// ```
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

impl Wordlist {
    /// Builds an index from every token in `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`WordlistError::Io`](crate::WordlistError::Io) if reading
    /// fails or the input is not valid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = Wordlist::new();
        list.ingest_reader(reader)?;
        Ok(list)
    }

    /// Builds an index from the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening input file");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Inserts every token in `reader`, in order. Returns the number of
    /// tokens inserted.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<u64> {
        let mut lines = 0usize;
        let mut tokens = 0u64;

        for line in reader.lines() {
            let line = line?;
            lines += 1;
            if line.is_empty() {
                continue;
            }
            for word in tokenize(&line) {
                trace!(word, "Inserting token");
                self.insert(word);
                tokens += 1;
            }
        }

        debug!(
            lines,
            tokens,
            unique = self.different_words(),
            "Finished reading input"
        );
        Ok(tokens)
    }

    /// Inserts every token of `text`. Returns the number of tokens inserted.
    pub fn ingest_str(&mut self, text: &str) -> u64 {
        let mut tokens = 0;
        for word in text.lines().flat_map(tokenize) {
            self.insert(word);
            tokens += 1;
        }
        tokens
    }
}

impl From<&str> for Wordlist {
    fn from(text: &str) -> Self {
        let mut list = Wordlist::new();
        list.ingest_str(text);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordlistError;
    use std::io::Cursor;

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        let tokens: Vec<&str> = tokenize("a  b\tc\u{a0}d").collect();
        // U+00A0 is whitespace for `char::is_whitespace`.
        assert_eq!(tokens, ["a", "b", "c", "d"]);
        assert_eq!(tokenize("   ").count(), 0);
    }

    #[test]
    fn tokens_keep_case_and_punctuation() {
        let list = Wordlist::from("The the, the.");
        assert_eq!(list.different_words(), 3);
        assert!(list.contains("The"));
        assert!(list.contains("the,"));
        assert!(list.contains("the."));
    }

    #[test]
    fn from_reader_skips_blank_lines() {
        let input = "the quick brown\n\nfox the\n   \nlazy the\n";
        let list = Wordlist::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(list.different_words(), 5);
        assert_eq!(list.total_words(), 7);
        assert_eq!(list.get_count("the"), 3);
    }

    #[test]
    fn ingest_reader_counts_tokens() {
        let mut list = Wordlist::from("one two");
        let tokens = list
            .ingest_reader(Cursor::new("two three\nthree three"))
            .unwrap();

        assert_eq!(tokens, 4);
        assert_eq!(list.total_words(), 6);
        assert_eq!(list.get_count("three"), 3);
    }

    #[test]
    fn from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'o', b'k', b'\n', 0xff, 0xfe, b'\n'];
        let err = Wordlist::from_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, WordlistError::Io(_)));
    }

    #[test]
    fn from_path_missing_file() {
        let err = Wordlist::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WordlistError::Io(_)));
    }

    #[test]
    fn ingest_str_matches_from() {
        let mut list = Wordlist::new();
        assert_eq!(list.ingest_str("a b\nb c\n"), 4);
        assert_eq!(list, Wordlist::from("a b\nb c\n"));
    }
}
