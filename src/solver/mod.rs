//! Frequency-based solver
//!
//! Candidate filtering, letter-frequency scoring and the game loop that ties them together.

mod candidates;
pub mod config;
pub mod filter;
mod game;
pub mod scoring;

pub use candidates::CandidateSet;
pub use config::SolverConfig;
pub use filter::{FeedbackConstraints, filter_candidates};
pub use game::{
    FeedbackMode, FeedbackSource, Game, GameBuilder, GameHistory, GameOutcome, GameState, Prompt,
};
pub use scoring::{
    FrequencyModel, LetterFrequency, PositionalFrequency, build_letter_frequency,
    build_positional_frequency, rank, score, select_best,
};
