//! Solve a word search puzzle: build the prefix index, scan the grid and
//! work out which words were never found.
//!
//! # Error Handling
//!
//! Scanning itself cannot fail. The only error comes from turning raw text
//! into a [`Grid`], surfaced through [`SolverError`]:
//!
//! - S001: `InvalidGrid` (The grid text is malformed (wraps [`GridError`]))
//!
//! # Examples
//!
//! ```
//! use wordsearch::grid::Grid;
//! use wordsearch::solver;
//!
//! let grid = Grid::from_rows(["CAT", "DOG", "XYZ"])?;
//! let result = solver::solve_puzzle(&grid, &["CAT", "TOY"]);
//!
//! for m in &result.matches {
//!     println!("{m}"); // CAT: Row 1, Col 1, LR - Left to Right
//! }
//! assert_eq!(result.missing_words, vec!["TOY"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;

use instant::Instant;
use log::{debug, info, warn};

use crate::errors::GridError;
use crate::grid::Grid;
use crate::prefix_index::PrefixIndex;
use crate::scanner::{self, MatchRecord};
use crate::word_list::WordList;

/// Result of a solver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveResult {
    /// Every occurrence found, in scan order.
    pub matches: Vec<MatchRecord>,
    /// Distinct (upper-cased) words with no occurrence, in word-list order.
    pub missing_words: Vec<String>,
}

impl SolveResult {
    /// Distinct words that were found, in the order they were first found.
    #[must_use]
    pub fn words_found(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.matches
            .iter()
            .map(|m| m.word.as_str())
            .filter(|w| seen.insert(*w))
            .collect()
    }
}

impl IntoIterator for SolveResult {
    type Item = MatchRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// Unified error type for solving from raw text.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The grid text could not be turned into a rectangular grid.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidGrid(_) => "S001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidGrid(_) => "The grid text is malformed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidGrid(_) => "The puzzle grid was rejected before scanning. This wraps an underlying GridError (see Grid Errors section for specific error codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidGrid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidGrid(ge) => {
                format!("{}\n  caused by: {}", self.code(), ge.display_detailed())
            }
        }
    }
}

/// Find every word from `words` in `grid`.
///
/// Words are compared case-insensitively. Empty inputs are not an error:
/// they simply produce no matches.
#[must_use]
pub fn solve_puzzle(grid: &Grid, words: &[&str]) -> SolveResult {
    if grid.is_empty() {
        warn!("grid is empty; nothing to search");
    }
    if words.is_empty() {
        warn!("word list is empty; nothing to search for");
    }

    let t_index = Instant::now();
    let index = PrefixIndex::build(words);
    debug!(
        "indexed {} words into {} prefixes in {:.3}s (longest word: {})",
        words.len(),
        index.len(),
        t_index.elapsed().as_secs_f64(),
        index.longest_word_len()
    );

    let longest_line = grid.longest_line();
    for word in words.iter().filter(|w| w.chars().count() > longest_line) {
        warn!("\"{word}\" is longer than any line in the {}x{} grid and cannot be found", grid.height(), grid.width());
    }

    let t_scan = Instant::now();
    let matches = run_scan(grid, &index);
    debug!("scan took {:.3}s", t_scan.elapsed().as_secs_f64());

    let missing_words = missing_words(words, &matches);
    info!(
        "found {} matches; {} of {} distinct words missing",
        matches.len(),
        missing_words.len(),
        distinct_normalized(words).len()
    );

    SolveResult { matches, missing_words }
}

/// Parse a grid and a word list from text, then solve.
///
/// This is the entry point for callers that have no filesystem (WASM).
///
/// # Errors
///
/// Returns [`SolverError::InvalidGrid`] if `grid_text` is not rectangular
/// or contains control characters.
pub fn solve_text(grid_text: &str, word_text: &str) -> Result<SolveResult, SolverError> {
    let grid = Grid::parse_from_str(grid_text)?;
    let word_list = WordList::parse_from_str(word_text);
    Ok(solve_puzzle(&grid, &word_list.as_strs()))
}

#[cfg(feature = "parallel")]
fn run_scan(grid: &Grid, index: &PrefixIndex) -> Vec<MatchRecord> {
    scanner::scan_parallel(grid, index)
}

#[cfg(not(feature = "parallel"))]
fn run_scan(grid: &Grid, index: &PrefixIndex) -> Vec<MatchRecord> {
    scanner::scan(grid, index)
}

/// Upper-cased, non-empty, deduplicated words in first-seen order.
fn distinct_normalized(words: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(|w| w.to_ascii_uppercase())
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}

fn missing_words(words: &[&str], matches: &[MatchRecord]) -> Vec<String> {
    let found: HashSet<&str> = matches.iter().map(|m| m.word.as_str()).collect();
    distinct_normalized(words)
        .into_iter()
        .filter(|w| !found.contains(w.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn test_solve_puzzle_basic() {
        let grid = Grid::from_rows(["CAT", "DOG", "XYZ"]).unwrap();
        let result = solve_puzzle(&grid, &["CAT", "GOD", "TOY"]);
        assert_eq!(result.words_found(), vec!["CAT", "GOD"]);
        assert_eq!(result.missing_words, vec!["TOY"]);
        assert_eq!(result.matches[1].direction, Direction::RightToLeft);
    }

    #[test]
    fn test_missing_words_are_normalized_and_deduplicated() {
        let grid = Grid::from_rows(["ABC"]).unwrap();
        let result = solve_puzzle(&grid, &["zed", "ZED", "abc", "", "Qi"]);
        assert_eq!(result.missing_words, vec!["ZED", "QI"]);
        assert_eq!(result.words_found(), vec!["ABC"]);
    }

    #[test]
    fn test_words_found_is_distinct() {
        let grid = Grid::from_rows(["NOON"]).unwrap();
        let result = solve_puzzle(&grid, &["NOON"]);
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.words_found(), vec!["NOON"]);
        assert!(result.missing_words.is_empty());
    }

    #[test]
    fn test_empty_inputs_are_not_errors() {
        let result = solve_puzzle(&Grid::default(), &["CAT"]);
        assert!(result.matches.is_empty());
        assert_eq!(result.missing_words, vec!["CAT"]);

        let grid = Grid::from_rows(["CAT"]).unwrap();
        assert_eq!(solve_puzzle(&grid, &[]), SolveResult::default());
    }

    #[test]
    fn test_solve_text() {
        let result = solve_text("c a t\nd o g\n\nx y z\n", "cat\n\ntoy\n").unwrap();
        assert_eq!(result.words_found(), vec!["CAT"]);
        assert_eq!(result.missing_words, vec!["TOY"]);
    }

    #[test]
    fn test_solve_text_ragged_grid() {
        let err = solve_text("CAT\nDOGS", "CAT").unwrap_err();
        assert_eq!(err.code(), "S001");
        assert!(matches!(err, SolverError::InvalidGrid(GridError::RaggedRow { row: 2, .. })));
        let detailed = err.display_detailed();
        assert!(detailed.contains("S001"));
        assert!(detailed.contains("G001"));
    }

    #[test]
    fn test_into_iter() {
        let grid = Grid::from_rows(["HI"]).unwrap();
        let words: Vec<String> = solve_puzzle(&grid, &["HI"]).into_iter().map(|m| m.word).collect();
        assert_eq!(words, vec!["HI"]);
    }
}
