//! Error types for heading scanning

use thiserror::Error;

/// Errors that can occur while scanning the document for headings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The character after a `<h` marker is not an ASCII digit
    #[error("line {line}: expected a heading level digit after '<h', found {found:?}")]
    InvalidLevel {
        /// 1-based line number of the offending tag
        line: usize,
        /// The character at the level position, if the line extends that far
        found: Option<char>,
    },

    /// The heading level digit is outside the h1..h6 range
    #[error("line {line}: heading level {level} is outside h1..h6")]
    LevelOutOfRange {
        /// 1-based line number of the offending tag
        line: usize,
        /// The parsed level digit
        level: usize,
    },
}
