//! The set of words still consistent with the feedback seen so far

use super::filter::filter_candidates;
use crate::core::{FeedbackCode, SolverError, Word};

/// Candidate words for one session, deduplicated and in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build the initial set from raw dictionary entries
    ///
    /// Entries are uppercased; entries that are not purely alphabetic or whose
    /// length differs from `word_length` are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::solver::CandidateSet;
    ///
    /// let set = CandidateSet::from_dictionary(["crane", "Slate", "gold", "it's", "CRANE"], 5);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_dictionary<I, S>(entries: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let words = entries.into_iter().filter_map(|entry| {
            match Word::new(entry.as_ref()) {
                Ok(word) if word.len() == word_length => Some(word),
                _ => {
                    skipped += 1;
                    None
                }
            }
        });
        let set = Self::from_words(words.collect::<Vec<_>>());
        log::debug!(
            "loaded {} candidates of length {word_length} ({skipped} entries skipped)",
            set.len()
        );
        set
    }

    /// Build a set from already validated words
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Remove every candidate that could not have produced `feedback` for `guess`
    ///
    /// Returns a new set; `self` is left untouched.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the guess and feedback lengths differ.
    pub fn filter(&self, guess: &Word, feedback: &FeedbackCode) -> Result<Self, SolverError> {
        Ok(Self {
            words: filter_candidates(&self.words, guess, feedback)?,
        })
    }

    /// Keep only words of the given length
    #[must_use]
    pub fn with_length(mut self, word_length: usize) -> Self {
        self.words.retain(|w| w.len() == word_length);
        self
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
