//! Command implementations

pub mod bench;
pub mod play;
pub mod rank;
pub mod solve;

pub use bench::{BenchStatistics, WordTestResult, run_bench};
pub use play::{ConsoleFeedback, run_play};
pub use rank::{RankedWord, rank_candidates};
pub use solve::{GuessStep, SolveResult, random_answer, solve_word};
