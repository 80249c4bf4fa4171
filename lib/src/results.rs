use crate::clues::ClueKind;
use crate::clues::WORD_LENGTH;
use std::error::Error;
use std::fmt;
use std::io;

/// Describes why a clue string was rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClueFormatProblem {
    /// The clue did not have exactly [`WORD_LENGTH`] characters. Holds the length that was given.
    Length(usize),
    /// The clue contained a character that is neither a lowercase ASCII letter nor the
    /// placeholder.
    UnsupportedCharacter(char),
}

/// Indicates that an error occurred while loading words or accepting clues.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// A required word list could not be loaded.
    WordSourceUnavailable {
        /// Where the words were being read from.
        path: String,
        /// The underlying failure, as reported by the reader.
        reason: String,
    },
    /// A clue failed length or alphabet validation. The clue was not recorded.
    InvalidClueFormat {
        kind: ClueKind,
        clue: String,
        problem: ClueFormatProblem,
    },
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::WordSourceUnavailable { path, reason } => {
                write!(f, "can't read word list {}: {}", path, reason)
            }
            WordleError::InvalidClueFormat {
                kind,
                clue,
                problem: ClueFormatProblem::Length(length),
            } => write!(
                f,
                "{} clue {:?} must be exactly {} characters, got {}",
                kind, clue, WORD_LENGTH, length
            ),
            WordleError::InvalidClueFormat {
                kind,
                clue,
                problem: ClueFormatProblem::UnsupportedCharacter(letter),
            } => write!(
                f,
                "{} clue {:?} must contain only lowercase letters or underscores, found {:?}",
                kind, clue, letter
            ),
        }
    }
}

impl Error for WordleError {}

impl From<io::Error> for WordleError {
    fn from(e: io::Error) -> Self {
        WordleError::WordSourceUnavailable {
            path: String::from("<reader>"),
            reason: e.to_string(),
        }
    }
}
