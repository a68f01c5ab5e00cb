//! Candidate ranking command
//!
//! Scores the whole candidate set and lists the best guesses.

use crate::core::Word;
use crate::solver::{CandidateSet, FrequencyModel, SolverConfig, rank};

/// A scored candidate
pub struct RankedWord {
    pub word: Word,
    pub score: f64,
}

/// The `top` best candidates, best first
#[must_use]
pub fn rank_candidates(
    config: &SolverConfig,
    candidates: &CandidateSet,
    top: usize,
) -> Vec<RankedWord> {
    let model = FrequencyModel::build(candidates.words());
    rank(candidates.words(), &model, config.anywhere_factor, top)
        .into_iter()
        .map(|(word, score)| RankedWord {
            word: word.clone(),
            score,
        })
        .collect()
}
