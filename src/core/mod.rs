//! Core domain types for the puzzle
//!
//! Words, per-letter feedback and the error taxonomy. Everything here is pure and
//! independent of the solving strategy.

mod error;
mod feedback;
mod word;

pub use error::SolverError;
pub use feedback::{FeedbackCode, Outcome, evaluate};
pub use word::{Word, WordError};
