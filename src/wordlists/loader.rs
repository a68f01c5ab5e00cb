//! Word list loading utilities
//!
//! Raw entries only: case normalization and length filtering happen when the
//! candidate set is built.

use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary entries from a file, one per line
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_frequency::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries_from_str(&content))
}

/// Split text into dictionary entries
#[must_use]
pub fn entries_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
