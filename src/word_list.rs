//! `word_list` — load and normalize the list of words to find in the puzzle.
//!
//! The input format is one word per line. Entries are cleaned up so they can
//! be compared directly against grid letters:
//! - Blank lines are skipped (`\n` and `\r\n` both work).
//! - Spaces inside an entry are removed, so a phrase like `ICE CREAM` is
//!   searched for as `ICECREAM` (that is how it appears in a grid).
//! - Entries are upper-cased (ASCII only).
//!
//! We do NOT deduplicate or sort: duplicates are harmless to the prefix index,
//! and keeping the original order makes the "missing words" summary follow the
//! order of the puzzle's printed word list.
//!
//! `parse_from_str` works everywhere, including WASM; `load_from_path` is
//! native-only.

/// Struct representing a processed, ready-to-use word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Upper-case words, in input order.
    /// Example: `["CAT", "DOG", "ICECREAM"]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines.
    /// 2. Removes all whitespace inside each line.
    /// 3. Skips entries that end up empty.
    /// 4. Converts the entry to uppercase.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .split(['\n', '\r'])
            .filter_map(|raw_line| {
                let word: String = raw_line
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| c.to_ascii_uppercase())
                    .collect();

                if word.is_empty() {
                    None
                } else {
                    Some(word)
                }
            })
            .collect();

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Borrow the words as `&str`, the form the solver takes.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
