//! Error taxonomy shared by the solver and the game loop

use super::{Word, WordError};
use thiserror::Error;

/// Errors raised by evaluation, filtering and game sessions
///
/// All variants are raised synchronously at the offending call; none are retried.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid feedback symbol {symbol:?} at position {position} (use X, ? or O)")]
    InvalidFeedbackSymbol { symbol: char, position: usize },

    #[error("automated mode requires an answer")]
    MissingAnswer,

    #[error("interactive mode requires a feedback source")]
    MissingFeedbackSource,

    #[error("a session takes either an answer or a feedback source, not both")]
    ModeConflict,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("answer {0} is not in the dictionary")]
    AnswerNotInDictionary(Word),

    #[error("no candidates remain; the feedback is inconsistent with the dictionary")]
    NoCandidates,

    #[error("the session was ended by the feedback source")]
    Aborted,

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
