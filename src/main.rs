//! Wordle Frequency - CLI
//!
//! Word-guessing puzzle solver driven by letter frequency statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use wordle_frequency::{
    commands::{ConsoleFeedback, random_answer, rank_candidates, run_bench, run_play, solve_word},
    core::SolverError,
    output::{print_bench_statistics, print_outcome, print_rank, print_solve_result},
    solver::{CandidateSet, SolverConfig, config},
    wordlists::{DICTIONARY, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_frequency",
    about = "Word-guessing puzzle solver using positional letter frequencies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Length of the words to guess
    #[arg(
        short = 'w',
        long = "word_length",
        global = true,
        default_value_t = config::DEFAULT_WORD_LENGTH
    )]
    word_length: usize,

    /// Maximum number of guesses
    #[arg(
        short = 'n',
        long = "num_attempts",
        global = true,
        default_value_t = config::DEFAULT_NUM_ATTEMPTS
    )]
    num_attempts: usize,

    /// Dictionary file, one word per line (default: embedded vocabulary)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Weight of the anywhere-in-word letter frequency
    #[arg(long, global = true, default_value_t = config::ANYWHERE_FACTOR)]
    anywhere_factor: f64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter the feedback for each suggested guess (default)
    Play,

    /// Self-play against a known answer
    Solve {
        /// The answer to solve
        answer: Option<String>,

        /// Draw the answer at random from the dictionary
        #[arg(short, long, conflicts_with = "answer")]
        random: bool,
    },

    /// Self-play every dictionary word of the configured length
    Bench {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the best-scoring candidates
    Rank {
        /// Number of words to show
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },
}

fn load_candidates(path: Option<&Path>, word_length: usize) -> Result<CandidateSet> {
    let candidates = match path {
        Some(path) => CandidateSet::from_dictionary(load_from_file(path)?, word_length),
        None => CandidateSet::from_dictionary(DICTIONARY, word_length),
    };
    info!("{} candidates of length {word_length}", candidates.len());
    Ok(candidates)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = SolverConfig::for_word_length(cli.word_length)
        .with_num_attempts(cli.num_attempts)
        .with_anywhere_factor(cli.anywhere_factor);
    let candidates = load_candidates(cli.dictionary.as_deref(), cli.word_length)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            println!("Enter the response with not contained = X, misplaced = ?, correct = O");
            println!("Type 'quit' to exit.");
            if let Some(outcome) = run_play(&config, &candidates, ConsoleFeedback::stdio())? {
                print_outcome(&outcome, &config);
            }
        }
        Commands::Solve { answer, random } => {
            let answer = match (answer, random) {
                (Some(answer), _) => answer,
                (None, true) => random_answer(&candidates)
                    .ok_or(SolverError::NoCandidates)?
                    .text()
                    .to_string(),
                (None, false) => return Err(SolverError::MissingAnswer.into()),
            };
            let result = solve_word(&answer, &config, &candidates)?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Bench { limit } => {
            println!(
                "\nTesting against {} possible answers",
                limit.map_or(candidates.len(), |l| l.min(candidates.len()))
            );
            let stats = run_bench(&config, &candidates, limit, true)?;
            print_bench_statistics(&stats);
        }
        Commands::Rank { top } => {
            let ranked = rank_candidates(&config, &candidates, top);
            print_rank(&ranked, candidates.len());
        }
    }

    Ok(())
}
