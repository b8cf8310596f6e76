//! `grid` — load and validate the letter grid of a word search puzzle.
//!
//! The grid is read from text with one row per line. Parsing is forgiving
//! about layout but strict about shape:
//! - Blank lines are skipped, and both `\n` and `\r\n` line endings work.
//! - Whitespace inside a row is dropped, so `C A T` and `CAT` are the same row.
//! - Letters are upper-cased (ASCII only).
//! - Every remaining row must have the same length as the first one;
//!   otherwise parsing fails with [`GridError::RaggedRow`].
//!
//! Like the word list loader, the parsing entry points never touch the
//! filesystem, so they work in WASM builds. `load_from_path` is native-only.

use std::fmt;

use crate::errors::GridError;

/// An immutable, rectangular grid of upper-case letters.
///
/// Cells are stored row-major in a single `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<char>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Parse a grid from an in-memory string (one row per line).
    ///
    /// An input with no non-blank lines produces an empty 0×0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if rows differ in length, or
    /// [`GridError::InvalidCell`] if a row contains a control character.
    pub fn parse_from_str(contents: &str) -> Result<Grid, GridError> {
        Self::from_rows(contents.split(['\n', '\r']))
    }

    /// Build a grid from already-split rows, applying the same normalization
    /// as [`Grid::parse_from_str`] (blank rows skipped, whitespace removed,
    /// letters upper-cased).
    ///
    /// # Errors
    ///
    /// Same as [`Grid::parse_from_str`].
    pub fn from_rows<I, S>(rows: I) -> Result<Grid, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut height = 0;
        let mut width = 0;

        for raw_row in rows {
            let row: Vec<char> = raw_row
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_uppercase())
                .collect();

            if row.is_empty() {
                continue;
            }

            // row numbers in errors are 1-indexed and count only non-blank rows
            let row_num = height + 1;
            if height == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: row_num,
                    expected: width,
                    found: row.len(),
                });
            }

            if let Some(col) = row.iter().position(|c| c.is_control()) {
                return Err(GridError::InvalidCell {
                    row: row_num,
                    col: col + 1,
                    found: row[col],
                });
            }

            cells.extend(row);
            height += 1;
        }

        Ok(Grid { cells, height, width })
    }

    /// Native-only convenience method: read a grid file and parse it.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the file cannot be read, or an `InvalidInput`
    /// error wrapping a [`GridError`] if the grid is malformed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Grid> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read grid from '{}': {}", path_ref.display(), e),
            )
        })?;

        Self::parse_from_str(&data).map_err(|ge| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid grid in '{}': {}", path_ref.display(), ge.display_detailed()),
            )
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The letter at `(row, col)` (0-indexed), or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Like [`Grid::get`], but accepts signed positions so a scan can step
    /// past the top or left edge and simply get `None` back.
    #[must_use]
    pub fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(row, col)
    }

    /// Iterate over the rows as slices of letters.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // `chunks(0)` panics, and an empty grid has no rows anyway
        self.cells.chunks(self.width.max(1))
    }

    /// The longest straight run that fits in the grid in any direction.
    #[must_use]
    pub fn longest_line(&self) -> usize {
        self.height.max(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let grid = Grid::parse_from_str("CAT\nDOG\nXYZ").unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 0), Some('C'));
        assert_eq!(grid.get(1, 2), Some('G'));
        assert_eq!(grid.get(2, 1), Some('Y'));
    }

    #[test]
    fn test_parse_rectangular() {
        let grid = Grid::parse_from_str("ABCD\nEFGH").unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 4));
        assert_eq!(grid.get(1, 3), Some('H'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_parse_uppercases() {
        let grid = Grid::parse_from_str("cat\nDoG").unwrap();
        assert_eq!(grid.to_string(), "CAT\nDOG\n");
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let grid = Grid::parse_from_str("\r\nCAT\r\n\r\n\r\nDOG\r\n\n").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_string(), "CAT\nDOG\n");
    }

    #[test]
    fn test_parse_removes_interior_whitespace() {
        let grid = Grid::parse_from_str("C A T\n D\tO G ").unwrap();
        assert_eq!(grid.to_string(), "CAT\nDOG\n");
    }

    #[test]
    fn test_parse_ragged_rows_rejected() {
        let err = Grid::parse_from_str("CAT\nDOGS\nXYZ").unwrap_err();
        assert_eq!(err, GridError::RaggedRow { row: 2, expected: 3, found: 4 });
    }

    #[test]
    fn test_ragged_row_number_ignores_blank_lines() {
        let err = Grid::parse_from_str("CAT\n\n\nDO").unwrap_err();
        assert_eq!(err, GridError::RaggedRow { row: 2, expected: 3, found: 2 });
    }

    #[test]
    fn test_control_character_rejected() {
        let err = Grid::parse_from_str("CAT\nD\u{1b}G").unwrap_err();
        assert_eq!(err, GridError::InvalidCell { row: 2, col: 2, found: '\u{1b}' });
    }

    #[test]
    fn test_empty_input_is_empty_grid() {
        for input in ["", "\n\n", "  \r\n  "] {
            let grid = Grid::parse_from_str(input).unwrap();
            assert!(grid.is_empty());
            assert_eq!((grid.height(), grid.width()), (0, 0));
            assert_eq!(grid.rows().count(), 0);
            assert_eq!(grid.get(0, 0), None);
        }
    }

    #[test]
    fn test_get_signed_out_of_bounds() {
        let grid = Grid::from_rows(["AB", "CD"]).unwrap();
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.get_signed(0, -1), None);
        assert_eq!(grid.get_signed(2, 0), None);
        assert_eq!(grid.get_signed(1, 1), Some('D'));
    }

    #[test]
    fn test_rows_iterator() {
        let grid = Grid::from_rows(["AB", "CD", "EF"]).unwrap();
        let rows: Vec<String> = grid.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["AB", "CD", "EF"]);
    }

    #[test]
    fn test_longest_line() {
        let grid = Grid::from_rows(["ABCDE", "FGHIJ"]).unwrap();
        assert_eq!(grid.longest_line(), 5);
    }
}
