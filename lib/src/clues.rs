use crate::results::ClueFormatProblem;
use crate::results::WordleError;
use std::fmt;
use std::slice;

/// The number of letters in every word and clue.
pub const WORD_LENGTH: usize = 5;

/// Marks a position in a clue that carries no information.
pub const PLACEHOLDER: char = '_';

/// The colour of the feedback a clue reports.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClueKind {
    /// The letter is in the word at exactly this position.
    Green,
    /// The letter is in the word, but not at this position.
    Yellow,
    /// The letter is not in the word at this position, and not anywhere else unless it was
    /// reported green or yellow by some clue.
    Gray,
}

impl fmt::Display for ClueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClueKind::Green => "green",
            ClueKind::Yellow => "yellow",
            ClueKind::Gray => "gray",
        })
    }
}

/// A validated clue, e.g. `"s__e_"`.
///
/// Each clue has exactly [`WORD_LENGTH`] characters, each either a lowercase ASCII letter or
/// [`PLACEHOLDER`].
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedClue"))]
pub struct Clue {
    kind: ClueKind,
    pattern: Box<str>,
}

impl Clue {
    /// Validates the given pattern and constructs a clue of the given kind.
    pub fn new(kind: ClueKind, pattern: &str) -> Result<Clue, WordleError> {
        let invalid = |problem| WordleError::InvalidClueFormat {
            kind,
            clue: pattern.to_string(),
            problem,
        };
        let length = pattern.chars().count();
        if length != WORD_LENGTH {
            return Err(invalid(ClueFormatProblem::Length(length)));
        }
        if let Some(letter) = pattern
            .chars()
            .find(|letter| *letter != PLACEHOLDER && !letter.is_ascii_lowercase())
        {
            return Err(invalid(ClueFormatProblem::UnsupportedCharacter(letter)));
        }
        Ok(Clue {
            kind,
            pattern: Box::from(pattern),
        })
    }

    pub fn kind(&self) -> ClueKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Iterates over the `(index, letter)` pairs of this clue, skipping placeholders.
    pub fn letters(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.pattern
            .chars()
            .enumerate()
            .filter(|(_, letter)| *letter != PLACEHOLDER)
    }

    /// Returns `true` iff the letter appears anywhere in this clue.
    pub fn contains(&self, letter: char) -> bool {
        letter != PLACEHOLDER && self.pattern.contains(letter)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.pattern)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedClue {
    kind: ClueKind,
    pattern: String,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedClue> for Clue {
    type Error = WordleError;

    fn try_from(unchecked: UncheckedClue) -> Result<Self, Self::Error> {
        Clue::new(unchecked.kind, &unchecked.pattern)
    }
}

/// The ordered list of clues accepted so far.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClueHistory {
    clues: Vec<Clue>,
}

impl ClueHistory {
    pub fn new() -> ClueHistory {
        ClueHistory { clues: Vec::new() }
    }

    pub fn push(&mut self, clue: Clue) {
        self.clues.push(clue);
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    pub fn clear(&mut self) {
        self.clues.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Clue> {
        self.clues.iter()
    }

    /// Iterates over the clues of the given kind, in the order they were added.
    pub fn of_kind(&self, kind: ClueKind) -> impl Iterator<Item = &Clue> + '_ {
        self.clues.iter().filter(move |clue| clue.kind == kind)
    }

    /// Returns `true` iff some green or yellow clue reports the letter as present.
    pub fn reports_present(&self, letter: char) -> bool {
        self.clues
            .iter()
            .any(|clue| clue.kind != ClueKind::Gray && clue.contains(letter))
    }
}

impl<'a> IntoIterator for &'a ClueHistory {
    type Item = &'a Clue;
    type IntoIter = slice::Iter<'a, Clue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Clue> for ClueHistory {
    fn from_iter<I: IntoIterator<Item = Clue>>(iter: I) -> Self {
        ClueHistory {
            clues: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn clue_new_accepts_letters_and_placeholders() -> Result<(), WordleError> {
        let clue = Clue::new(ClueKind::Yellow, "a_b__")?;

        assert_eq!(clue.kind(), ClueKind::Yellow);
        assert_eq!(clue.pattern(), "a_b__");
        assert_eq!(clue.letters().collect::<Vec<_>>(), vec![(0, 'a'), (2, 'b')]);
        Ok(())
    }

    #[test]
    fn clue_new_all_placeholders() -> Result<(), WordleError> {
        let clue = Clue::new(ClueKind::Gray, "_____")?;

        assert_eq!(clue.letters().count(), 0);
        assert!(!clue.contains(PLACEHOLDER));
        Ok(())
    }

    #[test]
    fn clue_new_wrong_length() {
        assert_matches!(
            Clue::new(ClueKind::Green, "ab"),
            Err(WordleError::InvalidClueFormat {
                kind: ClueKind::Green,
                problem: ClueFormatProblem::Length(2),
                ..
            })
        );
        assert_matches!(
            Clue::new(ClueKind::Gray, "abcdef"),
            Err(WordleError::InvalidClueFormat {
                problem: ClueFormatProblem::Length(6),
                ..
            })
        );
        assert_matches!(
            Clue::new(ClueKind::Yellow, ""),
            Err(WordleError::InvalidClueFormat {
                problem: ClueFormatProblem::Length(0),
                ..
            })
        );
    }

    #[test]
    fn clue_new_counts_characters_not_bytes() {
        assert_matches!(
            Clue::new(ClueKind::Green, "ab_é"),
            Err(WordleError::InvalidClueFormat {
                problem: ClueFormatProblem::Length(4),
                ..
            })
        );
        assert_matches!(
            Clue::new(ClueKind::Green, "ab_é_"),
            Err(WordleError::InvalidClueFormat {
                problem: ClueFormatProblem::UnsupportedCharacter('é'),
                ..
            })
        );
    }

    #[test]
    fn clue_new_unsupported_characters() {
        for pattern in ["Abcde", "ab cd", "ab-cd", "ab1cd", "ab.cd"] {
            assert_matches!(
                Clue::new(ClueKind::Gray, pattern),
                Err(WordleError::InvalidClueFormat {
                    kind: ClueKind::Gray,
                    problem: ClueFormatProblem::UnsupportedCharacter(_),
                    ..
                }),
                "{} should be rejected",
                pattern
            );
        }
    }

    #[test]
    fn history_reports_present_ignores_gray() -> Result<(), WordleError> {
        let history: ClueHistory = vec![
            Clue::new(ClueKind::Green, "s____")?,
            Clue::new(ClueKind::Yellow, "__n__")?,
            Clue::new(ClueKind::Gray, "___ex")?,
        ]
        .into_iter()
        .collect();

        assert!(history.reports_present('s'));
        assert!(history.reports_present('n'));
        assert!(!history.reports_present('e'));
        assert!(!history.reports_present('x'));
        assert!(!history.reports_present(PLACEHOLDER));
        Ok(())
    }

    #[test]
    fn history_of_kind_keeps_insertion_order() -> Result<(), WordleError> {
        let mut history = ClueHistory::new();
        history.push(Clue::new(ClueKind::Green, "a____")?);
        history.push(Clue::new(ClueKind::Gray, "_b___")?);
        history.push(Clue::new(ClueKind::Green, "____c")?);

        let greens: Vec<&str> = history
            .of_kind(ClueKind::Green)
            .map(Clue::pattern)
            .collect();

        assert_eq!(greens, vec!["a____", "____c"]);
        assert_eq!(history.len(), 3);
        history.clear();
        assert!(history.is_empty());
        Ok(())
    }
}
