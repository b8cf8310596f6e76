//! Error types for loading a puzzle grid, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - G001: `RaggedRow` (Grid rows have different lengths)
//! - G002: `InvalidCell` (Control character inside a grid row)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::GridError;
//! use wordsearch::grid::Grid;
//!
//! match Grid::from_rows(&["CAT", "DO"]) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "G001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

/// Problems found while validating a grid before it is scanned.
///
/// Row and column numbers are 1-indexed, matching the report format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Row {row} has {found} letters, expected {expected} (grid must be rectangular)")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid character {found:?} at row {row}, col {col}")]
    InvalidCell { row: usize, col: usize, found: char },
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ge.to_string())
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::RaggedRow { .. } => "G001",
            GridError::InvalidCell { .. } => "G002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::RaggedRow { .. } => "Grid rows have different lengths",
            GridError::InvalidCell { .. } => "Control character inside a grid row",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::RaggedRow { .. } => "Every row of a word search grid must contain the same number of letters. The first row sets the width; a later row that is shorter or longer would leave the column bounds undefined, so the grid is rejected before any scanning happens.",
            GridError::InvalidCell { .. } => "Grid rows may contain letters (and other printable characters), but not control characters such as NUL bytes or terminal escape codes. These usually indicate a binary or mis-encoded input file.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::RaggedRow { .. } => Some("Check the reported row for a missing or extra letter; blank lines are ignored"),
            GridError::InvalidCell { .. } => Some("Save the grid as plain text with one row of letters per line"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
