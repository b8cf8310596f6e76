//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text all come from the `code()`,
//! `description()`, `details()` and `help()` methods on `SolverError` and
//! `GridError`, so the document cannot drift from the code.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::errors::GridError;
use wordsearch::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One example of each `GridError` variant
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::RaggedRow { row: 4, expected: 15, found: 14 },
        GridError::InvalidCell { row: 2, col: 7, found: '\u{0}' },
    ]
}

/// One example of each `SolverError` variant
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![SolverError::InvalidGrid(GridError::RaggedRow { row: 4, expected: 15, found: 14 })]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001)](#solver-errors)");
    println!("- [Grid Errors (G001–G002)](#grid-errors)\n");

    println!("## Solver Errors\n");
    println!("Top-level errors from solving a puzzle given as text. These wrap grid errors.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Grid Errors\n");
    println!("Errors found while validating the puzzle grid, before any scanning.\n");
    generate_error_docs!(all_grid_error_variants());
}
