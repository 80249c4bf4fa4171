use crate::results::WordleError;
use log::info;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// An ordered, immutable list of words.
///
/// Words are kept in the order they were given. They are trimmed, and blank entries are skipped,
/// but they are otherwise passed through as-is: no length or case checks are made.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let all_words = word_reader
            .lines()
            .filter_map(|maybe_word| match maybe_word {
                Ok(word) => to_entry(&word).map(Ok),
                Err(e) => Some(Err(e)),
            })
            .collect::<Result<Vec<Arc<str>>, _>>()?;
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` struct by reading the file at the given path.
    ///
    /// Any failure to open or read the file is reported as
    /// [`WordleError::WordSourceUnavailable`] naming the path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordleError> {
        let path = path.as_ref();
        let unavailable = |reason: String| WordleError::WordSourceUnavailable {
            path: path.display().to_string(),
            reason,
        };
        let file = File::open(path).map_err(|e| unavailable(e.to_string()))?;
        let bank = WordBank::from_reader(BufReader::new(file)).map_err(|e| match e {
            WordleError::WordSourceUnavailable { reason, .. } => unavailable(reason),
            other => other,
        })?;
        info!("Loaded {} words from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        Ok(WordBank {
            all_words: words
                .into_iter()
                .filter_map(|word| to_entry(word.as_ref()))
                .collect(),
        })
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff the bank has no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

fn to_entry(line: &str) -> Option<Arc<str>> {
    let word = line.trim();
    if word.is_empty() {
        return None;
    }
    Some(Arc::from(word))
}
