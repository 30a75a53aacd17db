//! Error type shared by the word search engine.
//!
//! Only construction can fail: building a word list, placing words and
//! loading configuration. Gameplay itself (selection and matching) has no
//! error path; invalid gestures are silently ignored.

use derive_more::{Display, Error};

/// Errors raised while configuring or generating a word search session.
#[derive(Debug, Display, Error)]
pub enum WordSearchError {
    /// The word list contains no entries.
    #[display("word list is empty")]
    EmptyWordList,

    /// A word contains something other than the letters `A`-`Z`.
    #[display("invalid word {word:?}: only the letters A-Z are allowed")]
    InvalidWord {
        /// The offending word as supplied.
        word: String,
    },

    /// A word is longer than the grid is wide, so it fits in no direction.
    #[display("word {word:?} has {len} letters but the grid is only {size}x{size}")]
    WordTooLong {
        /// The word that does not fit.
        word: String,
        /// Length of the word.
        len: usize,
        /// Grid dimension.
        size: usize,
    },

    /// The grid size is zero.
    #[display("grid size must be at least 1, got {size}")]
    GridTooSmall {
        /// The requested grid dimension.
        size: usize,
    },

    /// No free slot is left in the grid for a word, not even through the
    /// deterministic fallback scan.
    #[display("no free slot left in the grid for word {word:?}")]
    NoRoomForWord {
        /// The word that could not be placed.
        word: String,
    },

    /// A caller-supplied layout does not agree with its word list or grid.
    #[display("invalid layout: {reason}")]
    InvalidLayout {
        /// What did not agree.
        reason: String,
    },

    /// The word list file could not be read.
    #[display("failed to read word list {path}: {source}")]
    WordListIo {
        /// Path of the word list file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The word list file is not a valid JSON list of entries.
    #[display("malformed word list {path}: {source}")]
    WordListFormat {
        /// Path of the word list file.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}
