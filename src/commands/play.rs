//! Interactive console mode
//!
//! The solver suggests a guess each round and the player types the response
//! they got from the puzzle.

use crate::core::SolverError;
use crate::output::formatters::colorize_guess;
use crate::solver::{
    CandidateSet, FeedbackSource, GameBuilder, GameOutcome, Prompt, SolverConfig,
};
use std::io::{self, BufRead, Write};

/// Feedback read line by line from a console
///
/// `quit` or `q` ends the session.
pub struct ConsoleFeedback<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleFeedback<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsoleFeedback<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> FeedbackSource for ConsoleFeedback<R, W> {
    fn request_feedback(&mut self, prompt: &Prompt<'_>) -> io::Result<Option<String>> {
        writeln!(self.output)?;
        for (guess, feedback) in prompt.history {
            writeln!(self.output, "  {}  {feedback}", colorize_guess(guess, feedback))?;
        }
        writeln!(self.output, "{prompt}")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    fn invalid_feedback(&mut self, error: &SolverError) -> bool {
        // Keep asking unless the console itself is gone
        writeln!(self.output, "❌ {error}").is_ok()
    }
}

/// Run an interactive session against `source`
///
/// Returns `None` when the player quits.
///
/// # Errors
///
/// Returns an error if input cannot be read or the feedback leaves no candidates.
pub fn run_play<F: FeedbackSource + 'static>(
    config: &SolverConfig,
    candidates: &CandidateSet,
    source: F,
) -> Result<Option<GameOutcome>, SolverError> {
    let game = GameBuilder::new(config.clone())
        .candidates(candidates.clone())
        .feedback_source(source)
        .build()?;

    match game.run() {
        Ok(outcome) => Ok(Some(outcome)),
        Err(SolverError::Aborted) => Ok(None),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameState;
    use crate::wordlists::DICTIONARY;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleFeedback<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleFeedback::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn play(input: &str) -> Result<Option<GameOutcome>, SolverError> {
        let candidates = CandidateSet::from_dictionary(DICTIONARY, 5);
        run_play(&SolverConfig::default(), &candidates, console(input))
    }

    #[test]
    fn console_session_solves() {
        let outcome = play("X??X?\nx?x??\nooooo\n").unwrap().unwrap();

        assert!(outcome.is_solved());
        let guesses: Vec<&str> = outcome.history.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(guesses, ["CRANE", "LATER", "OPERA"]);
    }

    #[test]
    fn console_reprompts_on_bad_feedback() {
        let outcome = play("GYGYG\nX??X\nX??X?\nX?X??\nOOOOO\n").unwrap().unwrap();
        assert_eq!(outcome.guesses(), 3);
        assert_eq!(outcome.state, GameState::Solved);
    }

    #[test]
    fn console_quit_ends_session() {
        assert!(play("X??X?\nquit\n").unwrap().is_none());
        assert!(play("Q\n").unwrap().is_none());
    }

    #[test]
    fn console_eof_is_an_error() {
        let result = play("X??X?\n");
        assert!(matches!(
            result,
            Err(SolverError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof
        ));
    }

    struct Interrupted;

    impl FeedbackSource for Interrupted {
        fn request_feedback(&mut self, _prompt: &Prompt<'_>) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
        }
    }

    #[test]
    fn interrupted_read_is_not_a_quit() {
        let candidates = CandidateSet::from_dictionary(DICTIONARY, 5);
        let result = run_play(&SolverConfig::default(), &candidates, Interrupted);
        assert!(matches!(
            result,
            Err(SolverError::Io(e)) if e.kind() == io::ErrorKind::Interrupted
        ));
    }

    #[test]
    fn console_prints_history_and_prompt() {
        colored::control::set_override(false);
        let candidates = CandidateSet::from_dictionary(DICTIONARY, 5);
        let guess = crate::core::Word::new("later").unwrap();
        let history = vec![(
            crate::core::Word::new("crane").unwrap(),
            crate::core::FeedbackCode::parse("X??X?", 5).unwrap(),
        )];
        let prompt = Prompt {
            round: 2,
            num_attempts: 6,
            guess: &guess,
            history: &history,
            candidates_remaining: candidates.len(),
        };

        let mut source = console("X?X??\n");
        assert_eq!(source.request_feedback(&prompt).unwrap().as_deref(), Some("X?X??"));

        let printed = String::from_utf8(source.output).unwrap();
        assert!(printed.contains(" C  R  A  N  E   X??X?"));
        assert!(printed.contains("Round 2/6: try LATER (509 candidates)"));
    }
}
