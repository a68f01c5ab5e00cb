//! Wordle Frequency
//!
//! A solver for fixed-length word-guessing puzzles. Each round it filters the dictionary down
//! to the words consistent with every response so far, then guesses the candidate whose letters
//! are most common at their positions among the remaining words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_frequency::solver::{GameBuilder, SolverConfig};
//! use wordle_frequency::wordlists::DICTIONARY;
//!
//! let outcome = GameBuilder::new(SolverConfig::default())
//!     .dictionary(DICTIONARY)
//!     .answer("opera")
//!     .build()
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert!(outcome.is_solved());
//! assert_eq!(outcome.guesses(), 3);
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
