//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_bench_statistics, print_board, print_outcome, print_rank, print_solve_result,
};
