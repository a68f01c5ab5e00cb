//! Per-letter feedback and its evaluation
//!
//! A feedback code holds one `Outcome` per letter position. Its text form uses
//! the symbols `X` (absent), `?` (misplaced) and `O` (correct).

use super::{SolverError, Word};
use std::fmt;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Letter not in the answer, accounting for multiplicity
    Absent,
    /// Letter in the answer at another position
    Misplaced,
    /// Letter in the answer at this position
    Correct,
}

impl Outcome {
    /// Parse a feedback symbol (case-insensitive)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Self::Absent),
            '?' => Some(Self::Misplaced),
            'O' | 'o' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Canonical feedback symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'X',
            Self::Misplaced => '?',
            Self::Correct => 'O',
        }
    }
}

/// Feedback for one guess, one outcome per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackCode(Vec<Outcome>);

impl FeedbackCode {
    /// Wrap a sequence of outcomes
    #[must_use]
    pub const fn new(outcomes: Vec<Outcome>) -> Self {
        Self(outcomes)
    }

    /// The winning code for a word of `word_length` letters
    #[must_use]
    pub fn all_correct(word_length: usize) -> Self {
        Self(vec![Outcome::Correct; word_length])
    }

    /// Parse a feedback string and check it has `word_length` symbols
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `InvalidFeedbackSymbol` for characters outside `{X, ?, O}` and
    /// `LengthMismatch` if the symbol count differs from `word_length`.
    ///
    /// # Examples
    /// ```
    /// use wordle_frequency::core::{FeedbackCode, Outcome};
    ///
    /// let code = FeedbackCode::parse("xO?XO", 5).unwrap();
    /// assert_eq!(code.outcomes()[2], Outcome::Misplaced);
    /// assert_eq!(code.to_string(), "XO?XO");
    /// ```
    pub fn parse(input: &str, word_length: usize) -> Result<Self, SolverError> {
        let code: Self = input.parse()?;
        if code.len() != word_length {
            return Err(SolverError::LengthMismatch {
                expected: word_length,
                actual: code.len(),
            });
        }
        Ok(code)
    }

    /// Outcomes in position order
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a code with no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&o| o == Outcome::Correct)
    }
}

impl std::str::FromStr for FeedbackCode {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Outcome::from_symbol(symbol)
                    .ok_or(SolverError::InvalidFeedbackSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            write!(f, "{}", outcome.symbol())?;
        }
        Ok(())
    }
}

/// Compute the feedback for `guess` when `answer` is the hidden word
///
/// Duplicate letters are scored against the answer's letter multiset, so a
/// letter is never reported misplaced more often than the answer has spare copies.
///
/// # Algorithm
/// 1. First pass: mark exact matches correct and remove them from the answer's letter pool
/// 2. Second pass: mark remaining positions misplaced while the pool still holds the letter
///
/// # Errors
/// Returns `LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_frequency::core::{evaluate, Word};
///
/// let guess = Word::new("hilly").unwrap();
/// let answer = Word::new("light").unwrap();
/// assert_eq!(evaluate(&guess, &answer).unwrap().to_string(), "?O?XX");
/// ```
pub fn evaluate(guess: &Word, answer: &Word) -> Result<FeedbackCode, SolverError> {
    if guess.len() != answer.len() {
        return Err(SolverError::LengthMismatch {
            expected: answer.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![Outcome::Absent; guess.len()];
    let mut answer_available = answer.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
        if g == a {
            result[i] = Outcome::Correct;
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, letter still available
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Outcome::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&g)
            && *count > 0
        {
            result[i] = Outcome::Misplaced;
            *count -= 1;
        }
    }

    Ok(FeedbackCode(result))
}
