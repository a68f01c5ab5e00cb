//! Display functions for command results

use super::formatters::{colorize_guess, create_progress_bar, feedback_to_emoji, render_grid};
use crate::commands::{BenchStatistics, RankedWord, SolveResult};
use crate::solver::{GameOutcome, GameState, SolverConfig};
use colored::Colorize;

/// Print the guess grid with unplayed rows
pub fn print_board(outcome: &GameOutcome, config: &SolverConfig) {
    println!();
    for row in render_grid(&outcome.history, config.word_length, config.num_attempts) {
        println!("  {row}");
    }
}

/// Print how an interactive session ended
pub fn print_outcome(outcome: &GameOutcome, config: &SolverConfig) {
    print_board(outcome, config);
    println!();
    match outcome.state {
        GameState::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.guesses())
                .green()
                .bold()
        ),
        _ => println!(
            "{}",
            format!(
                "❌ Out of attempts with {} candidates left",
                outcome.candidates_remaining
            )
            .red()
            .bold()
        ),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colorize_guess(&step.word, &step.feedback),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print a ranked candidate table
pub fn print_rank(ranked: &[RankedWord], total: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TOP CANDIDATES".bright_cyan().bold(),
        format!("(of {total})").bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    let best = ranked.first().map_or(0.0, |r| r.score);
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "  {:>3}. {}  [{}] {:.2}",
            i + 1,
            entry.word.text().bright_yellow().bold(),
            create_progress_bar(entry.score, best, 30).green(),
            entry.score
        );
    }
}

/// Print self-play statistics
pub fn print_bench_statistics(stats: &BenchStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Bench Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=stats.num_attempts {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {guesses} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
        }
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.yellow());
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n💀 {}", "Unsolved".red().bold());
        for word in &stats.failed_words {
            println!("  {}", word.red());
        }
    }
}
