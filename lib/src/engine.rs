use crate::clues::*;
use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use log::debug;
use log::warn;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Narrows a list of words down to those that are consistent with the clues given so far.
///
/// ```
/// use std::sync::Arc;
/// use wordle_clue_filter::*;
///
/// let answers = WordBank::from_iterator(["apple", "angle", "ankle"])?;
/// let mut filter = ClueFilter::new(answers, WordBank::default());
///
/// filter.add_green("a____")?;
/// filter.add_yellow("__n__")?;
/// filter.add_gray("_pg__")?;
///
/// assert_eq!(filter.possible_solutions(), vec![Arc::<str>::from("ankle")]);
/// # Ok::<(), WordleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ClueFilter {
    answers: WordBank,
    allowed: WordBank,
    clues: ClueHistory,
}

impl ClueFilter {
    /// Constructs a filter over the given answer pool and extended allowed-guess pool, with no
    /// clues.
    pub fn new(answers: WordBank, allowed: WordBank) -> ClueFilter {
        ClueFilter {
            answers,
            allowed,
            clues: ClueHistory::new(),
        }
    }

    /// Loads both word lists from the given files.
    ///
    /// Fails with [`WordleError::WordSourceUnavailable`] if either file can't be read.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        answers_path: P,
        allowed_path: Q,
    ) -> Result<ClueFilter, WordleError> {
        let answers = WordBank::from_path(answers_path)?;
        let allowed = WordBank::from_path(allowed_path)?;
        Ok(ClueFilter::new(answers, allowed))
    }

    /// Records a green clue, e.g. `"s___e"` if the first and last letters were green.
    pub fn add_green(&mut self, clue: &str) -> Result<(), WordleError> {
        self.add_clue(ClueKind::Green, clue)
    }

    /// Records a yellow clue, e.g. `"_n___"` if the second letter was yellow.
    pub fn add_yellow(&mut self, clue: &str) -> Result<(), WordleError> {
        self.add_clue(ClueKind::Yellow, clue)
    }

    /// Records a gray clue, e.g. `"cr__s"` if those letters were gray.
    pub fn add_gray(&mut self, clue: &str) -> Result<(), WordleError> {
        self.add_clue(ClueKind::Gray, clue)
    }

    /// Validates and records a clue of the given kind.
    ///
    /// An invalid clue is rejected with [`WordleError::InvalidClueFormat`] and leaves the history
    /// unchanged.
    pub fn add_clue(&mut self, kind: ClueKind, clue: &str) -> Result<(), WordleError> {
        let clue = Clue::new(kind, clue).map_err(|e| {
            warn!("Rejected clue: {}", e);
            e
        })?;
        debug!("Accepted {} clue {}", kind, clue.pattern());
        self.clues.push(clue);
        Ok(())
    }

    /// Forgets all clues, so that every word is possible again.
    pub fn clear_clues(&mut self) {
        self.clues.clear();
    }

    /// The clues accepted so far, in the order they were given.
    pub fn clues(&self) -> &ClueHistory {
        &self.clues
    }

    /// The restrictions implied by every clue accepted so far.
    pub fn restrictions(&self) -> WordRestrictions {
        WordRestrictions::from_history(&self.clues)
    }

    /// The answer pool this filter was built with.
    pub fn answers(&self) -> &WordBank {
        &self.answers
    }

    /// The extended allowed-guess pool this filter was built with.
    pub fn allowed(&self) -> &WordBank {
        &self.allowed
    }

    /// Returns the answers that are consistent with every clue, in their original order.
    pub fn possible_solutions(&self) -> Vec<Arc<str>> {
        let restrictions = self.restrictions();
        let possible = get_possible_words(&restrictions, self.answers.iter());
        debug!(
            "{} of {} answers remain",
            possible.len(),
            self.answers.len()
        );
        possible
    }

    /// Returns every word, answers first and then the rest of the allowed pool, that is consistent
    /// with every clue.
    ///
    /// Words in both pools are only returned once.
    pub fn possible_guesses(&self) -> Vec<Arc<str>> {
        let restrictions = self.restrictions();
        let answer_set: HashSet<&str> = self.answers.iter().map(|word| &**word).collect();
        let extra_allowed = self
            .allowed
            .iter()
            .filter(|word| !answer_set.contains(&***word));
        let possible = get_possible_words(&restrictions, self.answers.iter().chain(extra_allowed));
        debug!("{} words remain across both pools", possible.len());
        possible
    }
}

/// Gets the words that meet the given restrictions, preserving their order.
pub fn get_possible_words<'a, I>(restrictions: &WordRestrictions, words: I) -> Vec<Arc<str>>
where
    I: IntoIterator<Item = &'a Arc<str>>,
{
    if restrictions.is_empty() {
        return words.into_iter().map(Arc::clone).collect();
    }
    words
        .into_iter()
        .filter(|word| restrictions.is_satisfied_by(word))
        .map(Arc::clone)
        .collect()
}
