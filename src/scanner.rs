//! Directional grid scan.
//!
//! From every cell, in every [`Direction`], the scanner walks a straight ray
//! one letter at a time, growing a candidate string and checking it against
//! the [`PrefixIndex`] after each step:
//!
//! - not in the index: nothing along this ray can become a word, so stop;
//! - a complete word: record a [`MatchRecord`] at the ray's start cell;
//! - a prefix of a longer word: take another step.
//!
//! A ray also stops when it leaves the grid, so its length never exceeds the
//! longest word in the index.
//!
//! Output order is deterministic: rows, then columns, then [`Direction::ALL`],
//! then shorter words before longer ones along the same ray.

use std::fmt;

use log::debug;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::prefix_index::PrefixIndex;

/// One occurrence of a word in the grid.
///
/// `row` and `col` are 1-indexed and always refer to the first letter
/// of the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct MatchRecord {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl fmt::Display for MatchRecord {
    /// The report line, e.g. `CAT: Row 1, Col 1, LR - Left to Right`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Row {}, Col {}, {}", self.word, self.row, self.col, self.direction)
    }
}

/// Scan the whole grid and return every match, in canonical order.
#[must_use]
pub fn scan(grid: &Grid, index: &PrefixIndex) -> Vec<MatchRecord> {
    let mut matches = Vec::new();
    if index.is_empty() {
        return matches;
    }

    for row in 0..grid.height() {
        scan_row(grid, index, row, &mut matches);
    }

    debug!(
        "scanned {}x{} grid against {} prefixes: {} matches",
        grid.height(),
        grid.width(),
        index.len(),
        matches.len()
    );
    matches
}

/// Same result as [`scan`], with start rows spread across the rayon pool.
///
/// Each row fills its own buffer; buffers are concatenated in row order.
#[cfg(feature = "parallel")]
#[must_use]
pub fn scan_parallel(grid: &Grid, index: &PrefixIndex) -> Vec<MatchRecord> {
    use rayon::prelude::*;

    if index.is_empty() {
        return Vec::new();
    }

    let per_row: Vec<Vec<MatchRecord>> = (0..grid.height())
        .into_par_iter()
        .map(|row| {
            let mut buf = Vec::new();
            scan_row(grid, index, row, &mut buf);
            buf
        })
        .collect();

    let matches: Vec<MatchRecord> = per_row.into_iter().flatten().collect();
    debug!(
        "scanned {}x{} grid in parallel: {} matches",
        grid.height(),
        grid.width(),
        matches.len()
    );
    matches
}

/// Scan every ray that starts in `row` (0-indexed), appending matches to `out`.
fn scan_row(grid: &Grid, index: &PrefixIndex, row: usize, out: &mut Vec<MatchRecord>) {
    for col in 0..grid.width() {
        for direction in Direction::ALL {
            scan_ray(grid, index, row, col, direction, out);
        }
    }
}

/// Walk a single ray from `(start_row, start_col)` (0-indexed) and append
/// each word it spells to `out`.
pub fn scan_ray(
    grid: &Grid,
    index: &PrefixIndex,
    start_row: usize,
    start_col: usize,
    direction: Direction,
    out: &mut Vec<MatchRecord>,
) {
    let mut built = String::with_capacity(index.longest_word_len());
    // grid dimensions come from a Vec allocation, so they always fit in isize
    let (mut row, mut col) = (start_row as isize, start_col as isize);

    while let Some(letter) = grid.get_signed(row, col) {
        built.push(letter);

        let Some(kind) = index.lookup(&built) else {
            break;
        };

        if kind.is_word() {
            out.push(MatchRecord {
                word: built.clone(),
                row: start_row + 1,
                col: start_col + 1,
                direction,
            });
        }

        if !kind.can_extend() {
            break;
        }
        (row, col) = direction.step(row, col);
    }
}
