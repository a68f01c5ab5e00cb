//! Game session: the round-by-round solving loop
//!
//! A session moves `Init → Guessing → Solved | Exhausted`. Each round picks a guess,
//! obtains feedback (computed against a known answer, or requested from an external
//! source), records it, and narrows the candidate set.

use super::candidates::CandidateSet;
use super::config::SolverConfig;
use super::scoring::{FrequencyModel, select_best};
use crate::core::{FeedbackCode, SolverError, Word, evaluate};
use std::fmt;
use std::io;

/// Guesses and their feedback, in play order
pub type GameHistory = Vec<(Word, FeedbackCode)>;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Init,
    Guessing,
    Solved,
    Exhausted,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// What an external feedback source is shown before it answers
pub struct Prompt<'a> {
    pub round: usize,
    pub num_attempts: usize,
    pub guess: &'a Word,
    pub history: &'a [(Word, FeedbackCode)],
    pub candidates_remaining: usize,
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let example: String = "XXOX?".chars().cycle().take(self.guess.len()).collect();
        writeln!(
            f,
            "Round {}/{}: try {} ({} candidates)",
            self.round, self.num_attempts, self.guess, self.candidates_remaining
        )?;
        write!(
            f,
            "Enter the response with not contained = X, misplaced = ?, correct = O (e.g. {example})"
        )
    }
}

/// Supplies feedback for guesses in interactive mode
///
/// Calls block until the source answers.
pub trait FeedbackSource {
    /// Return the raw feedback text for the guess in `prompt`, or `None` to end the session
    ///
    /// # Errors
    /// Returns any I/O error raised while reading the response.
    fn request_feedback(&mut self, prompt: &Prompt<'_>) -> io::Result<Option<String>>;

    /// Called when the returned text does not parse
    ///
    /// Return `true` to be asked again, `false` to abort the session with `error`.
    fn invalid_feedback(&mut self, error: &SolverError) -> bool {
        let _ = error;
        false
    }
}

/// Where a session's feedback comes from
pub enum FeedbackMode {
    /// Self-play: feedback is computed against a known answer
    Automated { answer: Word },
    /// Feedback is requested from an external source
    Interactive(Box<dyn FeedbackSource>),
}

/// Terminal state plus everything that was played
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub state: GameState,
    pub history: GameHistory,
    pub candidates_remaining: usize,
}

impl GameOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    #[must_use]
    pub fn guesses(&self) -> usize {
        self.history.len()
    }
}

/// Configures a `Game` with exactly one feedback mode
///
/// # Examples
/// ```
/// use wordle_frequency::solver::{GameBuilder, GameState, SolverConfig};
///
/// let game = GameBuilder::new(SolverConfig::default())
///     .dictionary(["crane", "light", "night", "sight"])
///     .answer("light")
///     .build()
///     .unwrap();
///
/// let outcome = game.run().unwrap();
/// assert_eq!(outcome.state, GameState::Solved);
/// ```
pub struct GameBuilder {
    config: SolverConfig,
    candidates: CandidateSet,
    answer: Option<String>,
    source: Option<Box<dyn FeedbackSource>>,
    automated: bool,
    interactive: bool,
}

impl GameBuilder {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            candidates: CandidateSet::default(),
            answer: None,
            source: None,
            automated: false,
            interactive: false,
        }
    }

    /// Initial candidates from raw dictionary entries
    #[must_use]
    pub fn dictionary<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.candidates = CandidateSet::from_dictionary(entries, self.config.word_length);
        self
    }

    /// Initial candidates from an already built set
    #[must_use]
    pub fn candidates(mut self, candidates: CandidateSet) -> Self {
        self.candidates = candidates.with_length(self.config.word_length);
        self
    }

    /// Request automated mode without giving the answer yet
    #[must_use]
    pub const fn automated(mut self) -> Self {
        self.automated = true;
        self
    }

    /// Request interactive mode without giving the source yet
    #[must_use]
    pub const fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Answer for automated mode
    #[must_use]
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Source for interactive mode
    #[must_use]
    pub fn feedback_source(mut self, source: impl FeedbackSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Validate the configuration and enter `Init`
    ///
    /// # Errors
    /// - `ModeConflict` if both automated and interactive feedback are configured
    /// - `MissingAnswer` if automated mode (the default) has no answer
    /// - `MissingFeedbackSource` if interactive mode has no source
    /// - `LengthMismatch` / `InvalidWord` if the answer is malformed
    /// - `AnswerNotInDictionary` if the answer is not an initial candidate
    pub fn build(self) -> Result<Game, SolverError> {
        let wants_automated = self.automated || self.answer.is_some();
        let wants_interactive = self.interactive || self.source.is_some();

        let mode = match (self.answer, self.source) {
            _ if wants_automated && wants_interactive => return Err(SolverError::ModeConflict),
            (Some(answer), None) => FeedbackMode::Automated {
                answer: Word::with_length(answer, self.config.word_length)?,
            },
            (None, Some(source)) => FeedbackMode::Interactive(source),
            (None, None) if wants_interactive => return Err(SolverError::MissingFeedbackSource),
            _ => return Err(SolverError::MissingAnswer),
        };

        if let FeedbackMode::Automated { answer } = &mode
            && !self.candidates.contains(answer)
        {
            return Err(SolverError::AnswerNotInDictionary(answer.clone()));
        }

        let opening = self
            .config
            .opening_guess
            .as_deref()
            .and_then(|text| Word::new(text).ok())
            .filter(|word| self.candidates.contains(word));
        if opening.is_none() {
            log::debug!("no usable opening guess; the first round will compute statistics");
        }

        Ok(Game {
            config: self.config,
            candidates: self.candidates,
            history: GameHistory::new(),
            state: GameState::Init,
            mode,
            opening,
        })
    }
}

/// One solving session
///
/// Owns its candidate set and history; sessions share nothing.
pub struct Game {
    config: SolverConfig,
    candidates: CandidateSet,
    history: GameHistory,
    state: GameState,
    mode: FeedbackMode,
    opening: Option<Word>,
}

impl Game {
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, FeedbackCode)] {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Choose the next guess
    ///
    /// The first round uses the opening guess when it is a candidate; later rounds
    /// rebuild the frequency statistics and take the best-scoring candidate.
    ///
    /// # Errors
    /// Returns `GameOver` after a terminal state and `NoCandidates` if nothing is left.
    pub fn next_guess(&mut self) -> Result<Word, SolverError> {
        if self.state.is_terminal() {
            return Err(SolverError::GameOver);
        }
        if self.candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        self.state = GameState::Guessing;

        if self.history.is_empty()
            && let Some(opening) = &self.opening
        {
            return Ok(opening.clone());
        }

        let model = FrequencyModel::build(self.candidates.words());
        select_best(self.candidates.words(), &model, self.config.anywhere_factor)
            .cloned()
            .ok_or(SolverError::NoCandidates)
    }

    /// Obtain feedback for `guess` from the configured mode
    ///
    /// # Errors
    /// In interactive mode, returns I/O errors from the source, parse errors the
    /// source chose not to retry, and `Aborted` when the source ends the session.
    pub fn obtain_feedback(&mut self, guess: &Word) -> Result<FeedbackCode, SolverError> {
        let word_length = self.config.word_length;
        match &mut self.mode {
            FeedbackMode::Automated { answer } => evaluate(guess, answer),
            FeedbackMode::Interactive(source) => {
                let prompt = Prompt {
                    round: self.history.len() + 1,
                    num_attempts: self.config.num_attempts,
                    guess,
                    history: &self.history,
                    candidates_remaining: self.candidates.len(),
                };
                loop {
                    let Some(text) = source.request_feedback(&prompt)? else {
                        return Err(SolverError::Aborted);
                    };
                    match FeedbackCode::parse(&text, word_length) {
                        Ok(code) => return Ok(code),
                        Err(error) => {
                            if !source.invalid_feedback(&error) {
                                return Err(error);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Append a round to the history and advance the state
    ///
    /// # Errors
    /// Returns `GameOver` after a terminal state and `LengthMismatch` if the guess or
    /// feedback length differs from the session word length.
    pub fn record(
        &mut self,
        guess: Word,
        feedback: FeedbackCode,
    ) -> Result<GameState, SolverError> {
        if self.state.is_terminal() {
            return Err(SolverError::GameOver);
        }
        for actual in [guess.len(), feedback.len()] {
            if actual != self.config.word_length {
                return Err(SolverError::LengthMismatch {
                    expected: self.config.word_length,
                    actual,
                });
            }
        }

        let solved = feedback.is_all_correct();
        if !solved {
            let before = self.candidates.len();
            self.candidates = self.candidates.filter(&guess, &feedback)?;
            log::debug!(
                "round {}: {guess} {feedback} narrowed {before} -> {} candidates",
                self.history.len() + 1,
                self.candidates.len()
            );
        }
        self.history.push((guess, feedback));

        self.state = if solved {
            log::info!("solved in {} guesses", self.history.len());
            GameState::Solved
        } else if self.history.len() >= self.config.num_attempts {
            log::info!("exhausted {} attempts", self.config.num_attempts);
            GameState::Exhausted
        } else {
            GameState::Guessing
        };

        Ok(self.state)
    }

    /// Play a single round
    ///
    /// # Errors
    /// Propagates errors from `next_guess`, `obtain_feedback` and `record`.
    pub fn play_round(&mut self) -> Result<GameState, SolverError> {
        let guess = self.next_guess()?;
        let feedback = self.obtain_feedback(&guess)?;
        self.record(guess, feedback)
    }

    /// Play rounds until solved or out of attempts
    ///
    /// # Errors
    /// Propagates the first error raised by a round.
    pub fn run(mut self) -> Result<GameOutcome, SolverError> {
        while !self.state.is_terminal() {
            if self.history.len() >= self.config.num_attempts {
                self.state = GameState::Exhausted;
                break;
            }
            self.play_round()?;
        }
        Ok(self.into_outcome())
    }

    /// Snapshot the session as an outcome
    #[must_use]
    pub fn into_outcome(self) -> GameOutcome {
        GameOutcome {
            state: self.state,
            candidates_remaining: self.candidates.len(),
            history: self.history,
        }
    }
}
