//! Error types for the fretboard core.

use thiserror::Error;

/// Result type for fretboard operations.
pub type Result<T> = std::result::Result<T, FretboardError>;

/// Errors raised while resolving notes, parsing positions or building a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    /// A tuning entry is not a recognized note name.
    #[error("unknown note name '{note}'")]
    UnknownNote { note: String },

    /// A position references a string the tuning does not have.
    #[error("string {string} does not exist (tuning has {string_count} strings)")]
    InvalidStringIndex { string: usize, string_count: usize },

    /// A line of the positions text could not be parsed as `string,fret`.
    #[error("malformed position on line {line_number}: '{line}' (expected 'string,fret')")]
    MalformedPositionLine { line_number: usize, line: String },

    /// The fret range starts after it ends.
    #[error("invalid fret range {start}..={end}: start fret must not exceed end fret")]
    InvalidFretRange { start: i32, end: i32 },
}

impl FretboardError {
    /// Returns true for errors caused by the tuning rather than the position input.
    pub fn is_tuning_error(&self) -> bool {
        matches!(self, FretboardError::UnknownNote { .. })
    }
}
