//! Error types.

use std::path::PathBuf;

/// Reasons a pattern is refused by the trie builder.
///
/// A rejected pattern never mutates the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern has no characters.
    #[error("pattern is empty")]
    Empty,

    /// Every character of the pattern is whitespace.
    #[error("pattern consists of {len} whitespace character(s) only")]
    Blank {
        /// Number of characters in the rejected pattern.
        len: usize,
    },
}

/// Errors raised while reading a vocabulary file.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The file could not be opened or read.
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        /// Path of the word list.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
