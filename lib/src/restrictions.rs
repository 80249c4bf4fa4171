use crate::clues::ClueHistory;
use crate::clues::ClueKind;
use crate::clues::WORD_LENGTH;
use crate::data::LocatedLetter;
use log::debug;
use std::collections::HashSet;

/// Defines letter restrictions that a word must adhere to.
///
/// These are always derived from a full [`ClueHistory`], so the order in which clues were given
/// has no effect on them.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct WordRestrictions {
    /// Letters that must occur in specific locations in the word.
    must_contain_here: HashSet<LocatedLetter>,
    /// Letters that must not occur in specific locations in the word.
    must_not_contain_here: HashSet<LocatedLetter>,
    /// Letters that must be somewhere in the word.
    must_contain: HashSet<char>,
    /// Letters that must not be anywhere in the word.
    must_not_contain: HashSet<char>,
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object that every word satisfies.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns the restrictions imposed by all the clues in the given history.
    pub fn from_history(history: &ClueHistory) -> WordRestrictions {
        let mut restrictions = WordRestrictions::new();
        for clue in history {
            for (index, letter) in clue.letters() {
                let located = LocatedLetter::new(letter, index as u8);
                match clue.kind() {
                    ClueKind::Green => {
                        restrictions.must_contain_here.insert(located);
                    }
                    ClueKind::Yellow => {
                        restrictions.must_not_contain_here.insert(located);
                        restrictions.must_contain.insert(letter);
                    }
                    // A gray letter is only absent everywhere if no clue, earlier or later,
                    // reports it as present. Otherwise the word has fewer copies of it than the
                    // guess did, and only this location is ruled out.
                    ClueKind::Gray => {
                        if history.reports_present(letter) {
                            restrictions.must_not_contain_here.insert(located);
                        } else {
                            restrictions.must_not_contain.insert(letter);
                        }
                    }
                }
            }
        }
        debug!(
            "Built restrictions from {} clues: {} located, {} excluded here, {} required, {} absent",
            history.len(),
            restrictions.must_contain_here.len(),
            restrictions.must_not_contain_here.len(),
            restrictions.must_contain.len(),
            restrictions.must_not_contain.len()
        );
        restrictions
    }

    /// Returns `true` iff there are no restrictions at all.
    pub fn is_empty(&self) -> bool {
        self.must_contain_here.is_empty()
            && self.must_not_contain_here.is_empty()
            && self.must_contain.is_empty()
            && self.must_not_contain.is_empty()
    }

    /// Returns the letters that green clues require at the given location.
    ///
    /// More than one letter means the clues conflict, and no word can satisfy them.
    pub fn required_letters_at(&self, index: usize) -> Vec<char> {
        let mut letters: Vec<char> = self
            .must_contain_here
            .iter()
            .filter(|ll| ll.location as usize == index)
            .map(|ll| ll.letter)
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Returns `true` iff the letter is ruled out at the given location.
    pub fn is_excluded_at(&self, letter: char, index: usize) -> bool {
        self.must_not_contain_here
            .contains(&LocatedLetter::new(letter, index as u8))
    }

    /// Returns `true` iff the letter must appear somewhere in the word.
    pub fn must_contain(&self, letter: char) -> bool {
        self.must_contain.contains(&letter)
    }

    /// Returns `true` iff the letter must not appear anywhere in the word.
    pub fn is_forbidden(&self, letter: char) -> bool {
        self.must_not_contain.contains(&letter)
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    ///
    /// Only the first [`WORD_LENGTH`] letters are checked against located restrictions. A word
    /// that is too short simply has no letter at the missing locations.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let mut located = [None; WORD_LENGTH];
        for (slot, letter) in located.iter_mut().zip(word.chars()) {
            *slot = Some(letter);
        }
        self.must_contain_here
            .iter()
            .all(|ll| located[ll.location as usize] == Some(ll.letter))
            && !self
                .must_not_contain_here
                .iter()
                .any(|ll| located[ll.location as usize] == Some(ll.letter))
            && self.must_contain.iter().all(|letter| word.contains(*letter))
            && !word
                .chars()
                .any(|letter| self.must_not_contain.contains(&letter))
    }
}
