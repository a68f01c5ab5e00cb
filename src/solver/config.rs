//! Tunable constants and per-session configuration

/// Word length used when none is given
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Number of guesses allowed when none is given
pub const DEFAULT_NUM_ATTEMPTS: usize = 6;

/// Weight of "letter present anywhere" against "letter correct at this position"
pub const ANYWHERE_FACTOR: f64 = 0.3;

/// Precomputed first guess for the bundled five-letter vocabulary
///
/// This is what `select_best` returns on the full vocabulary with `ANYWHERE_FACTOR`,
/// so the first round can skip building statistics.
pub const OPENING_GUESS: &str = "CRANE";

/// Settings for a solving session
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub word_length: usize,
    pub num_attempts: usize,
    pub anywhere_factor: f64,
    /// Fixed first guess; ignored when it is not in the initial candidate set
    pub opening_guess: Option<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            num_attempts: DEFAULT_NUM_ATTEMPTS,
            anywhere_factor: ANYWHERE_FACTOR,
            opening_guess: Some(OPENING_GUESS.to_string()),
        }
    }
}

impl SolverConfig {
    /// Default configuration for words of `word_length` letters
    ///
    /// The precomputed opening guess is only kept when its length matches.
    #[must_use]
    pub fn for_word_length(word_length: usize) -> Self {
        let opening_guess = (OPENING_GUESS.len() == word_length).then(|| OPENING_GUESS.to_string());
        Self {
            word_length,
            opening_guess,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_num_attempts(mut self, num_attempts: usize) -> Self {
        self.num_attempts = num_attempts;
        self
    }

    #[must_use]
    pub const fn with_anywhere_factor(mut self, anywhere_factor: f64) -> Self {
        self.anywhere_factor = anywhere_factor;
        self
    }

    #[must_use]
    pub fn with_opening_guess(mut self, opening_guess: Option<String>) -> Self {
        self.opening_guess = opening_guess;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = SolverConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.num_attempts, 6);
        assert!((config.anywhere_factor - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.opening_guess.as_deref(), Some("CRANE"));
    }

    #[test]
    fn other_lengths_drop_opening_guess() {
        assert_eq!(SolverConfig::for_word_length(4).opening_guess, None);
        assert_eq!(SolverConfig::for_word_length(6).word_length, 6);
        assert_eq!(
            SolverConfig::for_word_length(5).opening_guess.as_deref(),
            Some(OPENING_GUESS)
        );
    }

    #[test]
    fn setters_chain() {
        let config = SolverConfig::default()
            .with_num_attempts(3)
            .with_anywhere_factor(0.5)
            .with_opening_guess(None);
        assert_eq!(config.num_attempts, 3);
        assert!((config.anywhere_factor - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.opening_guess, None);
    }
}
