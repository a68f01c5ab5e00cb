//! Candidate filtering from a single guess and its feedback
//!
//! Constraints are derived from one `(guess, feedback)` pair at a time and applied to the
//! current candidate set. Nothing is carried across rounds: the narrowed set itself is the
//! memory of earlier rounds, so a letter reported absent in one guess can never wrongly
//! exclude it after a later guess shows it present.

use crate::core::{FeedbackCode, Outcome, SolverError, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-position and per-letter constraints implied by one guess
#[derive(Debug, Clone)]
pub struct FeedbackConstraints {
    correct_by_index: Vec<Option<u8>>,
    misplaced_by_index: Vec<Option<u8>>,
    absent_by_index: Vec<Option<u8>>,
    absent_letters: FxHashSet<u8>,
    /// Letters with at least one correct or misplaced outcome
    confirmed_letters: FxHashSet<u8>,
    /// Multiset of misplaced letters a candidate must place elsewhere
    required_misplaced: FxHashMap<u8, usize>,
}

impl FeedbackConstraints {
    /// Derive the constraints for `guess` scored as `feedback`
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the guess and feedback lengths differ.
    pub fn derive(guess: &Word, feedback: &FeedbackCode) -> Result<Self, SolverError> {
        if guess.len() != feedback.len() {
            return Err(SolverError::LengthMismatch {
                expected: guess.len(),
                actual: feedback.len(),
            });
        }

        let len = guess.len();
        let mut constraints = Self {
            correct_by_index: vec![None; len],
            misplaced_by_index: vec![None; len],
            absent_by_index: vec![None; len],
            absent_letters: FxHashSet::default(),
            confirmed_letters: FxHashSet::default(),
            required_misplaced: FxHashMap::default(),
        };

        let pairs = guess.letters().iter().zip(feedback.outcomes());
        for (i, (&letter, &outcome)) in pairs.enumerate() {
            match outcome {
                Outcome::Correct => {
                    constraints.correct_by_index[i] = Some(letter);
                    constraints.confirmed_letters.insert(letter);
                }
                Outcome::Misplaced => {
                    constraints.misplaced_by_index[i] = Some(letter);
                    constraints.confirmed_letters.insert(letter);
                    *constraints.required_misplaced.entry(letter).or_insert(0) += 1;
                }
                Outcome::Absent => {
                    constraints.absent_by_index[i] = Some(letter);
                    constraints.absent_letters.insert(letter);
                }
            }
        }

        Ok(constraints)
    }

    /// Check whether `word` could have produced the feedback
    ///
    /// Scans left to right. Correct positions must match and are consumed. Every other
    /// position must differ from the guess letter there; it may fulfil one outstanding
    /// misplaced letter, and otherwise must not hold a letter that is absent and not
    /// confirmed elsewhere in the same guess. Any misplaced letter still outstanding
    /// at the end rejects the word.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if word.len() != self.correct_by_index.len() {
            return false;
        }

        let mut outstanding = self.required_misplaced.clone();

        for (i, &letter) in word.letters().iter().enumerate() {
            if let Some(expected) = self.correct_by_index[i] {
                if letter != expected {
                    return false;
                }
                continue;
            }

            // Known wrong at this exact position
            if self.misplaced_by_index[i] == Some(letter) || self.absent_by_index[i] == Some(letter)
            {
                return false;
            }

            if let Some(count) = outstanding.get_mut(&letter)
                && *count > 0
            {
                *count -= 1;
            } else if self.absent_letters.contains(&letter)
                && !self.confirmed_letters.contains(&letter)
            {
                return false;
            }
        }

        outstanding.values().all(|&count| count == 0)
    }
}

/// Keep the candidates consistent with `guess` scored as `feedback`
///
/// Returns a new vector in the input order; the input is not modified.
/// Malformed feedback symbols are rejected earlier, when the text is parsed into a
/// `FeedbackCode`.
///
/// # Errors
/// Returns `LengthMismatch` if the guess and feedback lengths differ.
///
/// # Examples
/// ```
/// use wordle_frequency::core::{FeedbackCode, Word};
/// use wordle_frequency::solver::filter_candidates;
///
/// let words: Vec<Word> = ["light", "night", "digit", "crane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("digit").unwrap();
/// let feedback = FeedbackCode::parse("XOOXO", 5).unwrap();
///
/// let remaining = filter_candidates(&words, &guess, &feedback).unwrap();
/// assert_eq!(remaining.len(), 2);
/// ```
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    feedback: &FeedbackCode,
) -> Result<Vec<Word>, SolverError> {
    let constraints = FeedbackConstraints::derive(guess, feedback)?;

    Ok(candidates
        .iter()
        .filter(|&candidate| constraints.admits(candidate))
        .cloned()
        .collect())
}
