//! Self-play against a known answer
//!
//! Solves a specific answer word and returns the solution path.

use crate::core::{FeedbackCode, SolverError, Word};
use crate::solver::{CandidateSet, GameBuilder, GameState, SolverConfig};
use rand::prelude::IndexedRandom;

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub answer: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub feedback: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Draw a random answer from the candidate set
#[must_use]
pub fn random_answer(candidates: &CandidateSet) -> Option<&Word> {
    candidates.words().choose(&mut rand::rng())
}

/// Solve `answer` with the frequency solver, recording candidate counts per round
///
/// # Errors
///
/// Returns an error if:
/// - The answer is malformed or has the wrong length
/// - The answer is not in the candidate set
pub fn solve_word(
    answer: &str,
    config: &SolverConfig,
    candidates: &CandidateSet,
) -> Result<SolveResult, SolverError> {
    let mut game = GameBuilder::new(config.clone())
        .candidates(candidates.clone())
        .answer(answer)
        .build()?;

    let mut steps = Vec::new();

    while !game.state().is_terminal() && game.history().len() < config.num_attempts {
        let candidates_before = game.candidates().len();
        game.play_round()?;

        if let Some((word, feedback)) = game.history().last() {
            steps.push(GuessStep {
                word: word.clone(),
                feedback: feedback.clone(),
                candidates_before,
                candidates_after: game.candidates().len(),
            });
        }
    }

    Ok(SolveResult {
        success: game.state() == GameState::Solved,
        steps,
        answer: Word::with_length(answer, config.word_length)?,
    })
}
