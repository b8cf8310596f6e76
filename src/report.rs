//! Plain-text match report: one `WORD: Row r, Col c, CODE - Name` line per match.

use std::io::{self, Write};

use crate::scanner::MatchRecord;

/// Render all matches as report text, each line newline-terminated.
///
/// No matches gives an empty string.
#[must_use]
pub fn render_report(matches: &[MatchRecord]) -> String {
    use std::fmt::Write as _;

    let mut report = String::new();
    for m in matches {
        // NB: writing to a String never fails
        let _ = writeln!(&mut report, "{m}");
    }
    report
}

/// Stream the report to any writer (a file, stdout, a buffer).
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_report<W: Write>(out: &mut W, matches: &[MatchRecord]) -> io::Result<()> {
    for m in matches {
        writeln!(out, "{m}")?;
    }
    out.flush()
}
