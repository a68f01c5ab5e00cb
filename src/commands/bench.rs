//! Self-play every dictionary word - comprehensive solver evaluation
//!
//! Each answer gets its own session; sessions share nothing, so they run in parallel.

use crate::core::{SolverError, Word};
use crate::solver::{CandidateSet, GameBuilder, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from solving a single answer
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub answer: Word,
    pub guesses: usize,
    pub success: bool,
}

/// Statistics from solving many answers
#[derive(Debug)]
pub struct BenchStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub num_attempts: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

/// Run the solver against every candidate (or the first `limit` of them)
///
/// # Errors
///
/// Returns the first session error, e.g. a malformed configuration.
pub fn run_bench(
    config: &SolverConfig,
    candidates: &CandidateSet,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<BenchStatistics, SolverError> {
    let answers: Vec<&Word> = candidates
        .iter()
        .take(limit.unwrap_or(candidates.len()))
        .collect();

    let pb = if show_progress {
        ProgressBar::new(answers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} sessions", answers.len()));

    let total_start = Instant::now();

    let results = answers
        .par_iter()
        .map(|&answer| {
            let outcome = GameBuilder::new(config.clone())
                .candidates(candidates.clone())
                .answer(answer.text())
                .build()?
                .run()?;
            pb.inc(1);
            Ok(WordTestResult {
                answer: answer.clone(),
                guesses: outcome.guesses(),
                success: outcome.is_solved(),
            })
        })
        .collect::<Result<Vec<_>, SolverError>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, config.num_attempts, total_start.elapsed()))
}

fn summarize(
    results: &[WordTestResult],
    num_attempts: usize,
    total_time: Duration,
) -> BenchStatistics {
    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution = BTreeMap::new();
    for result in &solved {
        *guess_distribution.entry(result.guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    // Hardest: solved with one or no guesses to spare
    let mut hardest_words: Vec<(String, usize)> = solved
        .iter()
        .filter(|r| r.guesses + 1 >= num_attempts)
        .map(|r| (r.answer.text().to_string(), r.guesses))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    BenchStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        num_attempts,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.guesses).min().unwrap_or(0),
        hardest_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.answer.text().to_string())
            .collect(),
    }
}
