//! The crate's error taxonomy.

use thiserror::Error;

/// Why an `MMM-F` code failed to parse.
///
/// Parsing is the only fallible operation in the library. Validation and
/// ordering cannot fail on a constructed [`Syllogism`](crate::Syllogism);
/// a failure there would be a contract violation, not a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `-` separating mood from figure.
    #[error("missing '-' between mood and figure (expected MMM-F, e.g. AAA-4)")]
    MissingDelimiter,
    /// The mood part was not exactly three letters.
    #[error("mood must be exactly three letters, got \"{0}\"")]
    MoodLength(String),
    /// A mood letter outside {A, E, I, O}.
    #[error("'{0}' is not a mood letter (expected A, E, I or O)")]
    BadMoodLetter(char),
    /// The figure part was not a number.
    #[error("figure must be a number from 1 to 4, got \"{0}\"")]
    FigureNotNumeric(String),
    /// The figure was a number outside 1..=4.
    #[error("figure {0} is out of range (expected 1 to 4)")]
    FigureOutOfRange(u32),
}
