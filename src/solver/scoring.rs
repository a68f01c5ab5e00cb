//! Letter-frequency scoring and guess selection
//!
//! Statistics are rebuilt from the live candidate set every round. A word scores the
//! positional frequency of each of its letters, plus a weighted share of how common
//! that letter is anywhere in the candidate set.
//!
//! Selection uses a total order: higher score first, then lexicographically smaller word.

use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Count of each (letter, position) pair
pub type PositionalFrequency = FxHashMap<(u8, usize), usize>;

/// Count of each letter irrespective of position
pub type LetterFrequency = FxHashMap<u8, usize>;

/// Count how often each letter occurs at each position
#[must_use]
pub fn build_positional_frequency<'a>(
    words: impl IntoIterator<Item = &'a Word>,
) -> PositionalFrequency {
    let mut counts = PositionalFrequency::default();
    for word in words {
        for (position, &letter) in word.letters().iter().enumerate() {
            *counts.entry((letter, position)).or_insert(0) += 1;
        }
    }
    counts
}

/// Count how often each letter occurs anywhere
#[must_use]
pub fn build_letter_frequency<'a>(words: impl IntoIterator<Item = &'a Word>) -> LetterFrequency {
    let mut counts = LetterFrequency::default();
    for word in words {
        for &letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

/// Frequency statistics for one round
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    pub positional: PositionalFrequency,
    pub letters: LetterFrequency,
}

impl FrequencyModel {
    /// Build both frequency maps from a candidate set
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        Self {
            positional: build_positional_frequency(words),
            letters: build_letter_frequency(words),
        }
    }

    /// True when there are no statistics at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.letters.is_empty()
    }
}

/// Score a word against the frequency statistics
///
/// `Σ positional[(word[i], i)] + anywhere_factor × letters[word[i]] / word_length`,
/// summed over every position. Missing entries count as zero.
///
/// # Examples
/// ```
/// use wordle_frequency::core::Word;
/// use wordle_frequency::solver::{build_letter_frequency, build_positional_frequency, score};
///
/// let words = vec![Word::new("crate").unwrap(), Word::new("grate").unwrap()];
/// let positional = build_positional_frequency(&words);
/// let letters = build_letter_frequency(&words);
///
/// let value = score(&words[0], &positional, &letters, 0.3, 5);
/// assert!((value - 9.54).abs() < 1e-9);
/// ```
#[must_use]
pub fn score(
    word: &Word,
    positional: &PositionalFrequency,
    letters: &LetterFrequency,
    anywhere_factor: f64,
    word_length: usize,
) -> f64 {
    let word_length = word_length.max(1) as f64;
    word.letters()
        .iter()
        .enumerate()
        .map(|(position, letter)| {
            let at_position = positional.get(&(*letter, position)).copied().unwrap_or(0) as f64;
            let anywhere = letters.get(letter).copied().unwrap_or(0) as f64;
            at_position + anywhere_factor * anywhere / word_length
        })
        .sum()
}

/// Higher score first, then lexicographically smaller word
fn selection_order(a: &(&Word, f64), b: &(&Word, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Pick the highest-scoring word
///
/// Ties go to the lexicographically smallest word, so the result does not depend on
/// input order or on how the parallel scoring pass is split. With empty statistics
/// every score is zero; the smallest word is returned and a warning is logged.
///
/// Returns `None` only when `words` is empty.
#[must_use]
pub fn select_best<'a>(
    words: &'a [Word],
    model: &FrequencyModel,
    anywhere_factor: f64,
) -> Option<&'a Word> {
    if model.is_empty() {
        if !words.is_empty() {
            log::warn!(
                "no frequency statistics available; falling back to the lexicographically \
                 smallest of {} words",
                words.len()
            );
        }
        return words.iter().min();
    }

    words
        .par_iter()
        .map(|word| {
            let value = score(word, &model.positional, &model.letters, anywhere_factor, word.len());
            (word, value)
        })
        .min_by(selection_order)
        .map(|(word, _)| word)
}

/// The `top` best words with their scores, best first
#[must_use]
pub fn rank<'a>(
    words: &'a [Word],
    model: &FrequencyModel,
    anywhere_factor: f64,
    top: usize,
) -> Vec<(&'a Word, f64)> {
    let mut scored: Vec<(&Word, f64)> = words
        .par_iter()
        .map(|word| {
            let value = score(word, &model.positional, &model.letters, anywhere_factor, word.len());
            (word, value)
        })
        .collect();

    scored.par_sort_unstable_by(selection_order);
    scored.truncate(top);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::config::{ANYWHERE_FACTOR, OPENING_GUESS};
    use crate::solver::CandidateSet;
    use crate::wordlists::DICTIONARY;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn positional_frequency_counts() {
        let set = words(&["crane", "crate", "grate"]);
        let positional = build_positional_frequency(&set);

        assert_eq!(positional.get(&(b'C', 0)), Some(&2));
        assert_eq!(positional.get(&(b'G', 0)), Some(&1));
        assert_eq!(positional.get(&(b'R', 1)), Some(&3));
        assert_eq!(positional.get(&(b'T', 3)), Some(&2));
        assert_eq!(positional.get(&(b'C', 1)), None);
        assert_eq!(positional.values().sum::<usize>(), 15);
    }

    #[test]
    fn letter_frequency_counts_duplicates() {
        let set = words(&["speed", "erase"]);
        let letters = build_letter_frequency(&set);

        assert_eq!(letters.get(&b'E'), Some(&4));
        assert_eq!(letters.get(&b'S'), Some(&2));
        assert_eq!(letters.get(&b'Z'), None);
        assert_eq!(letters.values().sum::<usize>(), 10);
    }

    #[test]
    fn dictionary_frequency_fixtures() {
        let set = CandidateSet::from_dictionary(DICTIONARY, 5);
        let model = FrequencyModel::build(set.words());

        assert_eq!(model.positional.get(&(b'S', 0)), Some(&74));
        assert_eq!(model.positional.get(&(b'E', 4)), Some(&116));
        assert_eq!(model.letters.get(&b'E'), Some(&305));
        assert_eq!(model.positional.len(), 114);
        assert_eq!(model.letters.len(), 26);
    }

    #[test]
    fn score_matches_formula() {
        let set = words(&["crane", "crate", "grate", "irate", "trace"]);
        let model = FrequencyModel::build(&set);

        let expected = [19.14, 21.32, 20.2, 20.2, 18.32];
        for (word, expected) in set.iter().zip(expected) {
            let value = score(word, &model.positional, &model.letters, 0.3, 5);
            assert!((value - expected).abs() < 1e-9, "{word}: {value}");
        }
    }

    #[test]
    fn score_with_zero_factor_is_positional_only() {
        let set = words(&["crane", "crate"]);
        let model = FrequencyModel::build(&set);
        let value = score(&set[0], &model.positional, &model.letters, 0.0, 5);
        assert!((value - 9.0).abs() < 1e-9);
    }

    #[test]
    fn score_missing_keys_count_as_zero() {
        let word = Word::new("zzzzz").unwrap();
        let positional = PositionalFrequency::default();
        let letters = LetterFrequency::default();
        let value = score(&word, &positional, &letters, 0.3, 5);
        assert!(value.abs() < f64::EPSILON);
    }

    #[test]
    fn select_best_picks_highest_score() {
        let set = words(&["crane", "crate", "grate", "irate", "trace"]);
        let model = FrequencyModel::build(&set);
        let best = select_best(&set, &model, ANYWHERE_FACTOR).unwrap();
        assert_eq!(best.text(), "CRATE");
    }

    #[test]
    fn select_best_breaks_ties_lexicographically() {
        // CRATE and GRATE score the same against each other
        let forward = words(&["crate", "grate"]);
        let backward = words(&["grate", "crate"]);

        let model = FrequencyModel::build(&forward);
        assert_eq!(select_best(&forward, &model, ANYWHERE_FACTOR).unwrap().text(), "CRATE");
        assert_eq!(select_best(&backward, &model, ANYWHERE_FACTOR).unwrap().text(), "CRATE");
    }

    #[test]
    fn select_best_is_deterministic() {
        let set = CandidateSet::from_dictionary(DICTIONARY, 5);
        let model = FrequencyModel::build(set.words());

        let first = select_best(set.words(), &model, ANYWHERE_FACTOR).unwrap();
        for _ in 0..5 {
            assert_eq!(select_best(set.words(), &model, ANYWHERE_FACTOR).unwrap(), first);
        }
    }

    #[test]
    fn opening_guess_is_best_on_bundled_dictionary() {
        let set = CandidateSet::from_dictionary(DICTIONARY, 5);
        let model = FrequencyModel::build(set.words());
        let best = select_best(set.words(), &model, ANYWHERE_FACTOR).unwrap();
        assert_eq!(best.text(), OPENING_GUESS);
    }

    #[test]
    fn select_best_empty_statistics_fallback() {
        let set = words(&["slate", "crane", "light"]);
        let best = select_best(&set, &FrequencyModel::default(), ANYWHERE_FACTOR).unwrap();
        assert_eq!(best.text(), "CRANE");
    }

    #[test]
    fn select_best_empty_words() {
        let model = FrequencyModel::build(&words(&["crane"]));
        assert!(select_best(&[], &model, ANYWHERE_FACTOR).is_none());
        assert!(select_best(&[], &FrequencyModel::default(), ANYWHERE_FACTOR).is_none());
    }

    #[test]
    fn rank_orders_best_first() {
        let four = CandidateSet::from_dictionary(DICTIONARY, 4);
        let model = FrequencyModel::build(four.words());
        let ranked: Vec<&str> = rank(four.words(), &model, ANYWHERE_FACTOR, 3)
            .into_iter()
            .map(|(word, _)| word.text())
            .collect();
        assert_eq!(ranked, ["FALL", "CARE", "FACE"]);

        let six = CandidateSet::from_dictionary(DICTIONARY, 6);
        let model = FrequencyModel::build(six.words());
        let ranked = rank(six.words(), &model, ANYWHERE_FACTOR, 3);
        assert_eq!(ranked[0].0.text(), "CAREER");
        assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn rank_top_larger_than_set() {
        let set = words(&["crate", "grate"]);
        let model = FrequencyModel::build(&set);
        assert_eq!(rank(&set, &model, ANYWHERE_FACTOR, 10).len(), 2);
    }
}
