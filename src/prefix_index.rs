//! Prefix index over the word list.
//!
//! Every non-empty prefix of every word is stored with a [`PrefixKind`] that
//! says whether the string is only a prefix of a longer word, a complete word,
//! or both. The scanner uses a single lookup per step to decide two things:
//! whether to report a match, and whether extending the ray can still lead
//! to a word.
//!
//! For the words `CAT` and `CATS` the index holds:
//!
//! | key    | kind       |
//! |--------|------------|
//! | `C`    | `Partial`  |
//! | `CA`   | `Partial`  |
//! | `CAT`  | `Both`     |
//! | `CATS` | `Complete` |

use std::collections::HashMap;

/// Classification of a string in the [`PrefixIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixKind {
    /// A strict prefix of some word, but not itself a word.
    Partial,
    /// A complete word that is not a prefix of any longer word.
    Complete,
    /// A complete word that is also a strict prefix of a longer word.
    Both,
}

impl PrefixKind {
    /// Combine two classifications of the same string.
    ///
    /// `Partial` and `Complete` together (in either order) give `Both`;
    /// anything merged with itself is unchanged, and `Both` absorbs everything.
    #[must_use]
    pub const fn merge(self, other: PrefixKind) -> PrefixKind {
        match (self, other) {
            (PrefixKind::Partial, PrefixKind::Partial) => PrefixKind::Partial,
            (PrefixKind::Complete, PrefixKind::Complete) => PrefixKind::Complete,
            _ => PrefixKind::Both,
        }
    }

    /// Does this string spell a complete word?
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, PrefixKind::Complete | PrefixKind::Both)
    }

    /// Can this string be extended into a longer word?
    #[must_use]
    pub const fn can_extend(self) -> bool {
        matches!(self, PrefixKind::Partial | PrefixKind::Both)
    }
}

/// Map from every prefix of every word to its [`PrefixKind`].
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    entries: HashMap<String, PrefixKind>,
    longest_word: usize,
}

impl PrefixIndex {
    /// Build the index from a list of words.
    ///
    /// Words are upper-cased (ASCII) before indexing. Empty words are skipped,
    /// and duplicates leave the index unchanged.
    pub fn build<I, S>(words: I) -> PrefixIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = PrefixIndex::default();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Add a single word (and all of its prefixes) to the index.
    pub fn insert(&mut self, word: &str) {
        let word = word.to_ascii_uppercase();
        let num_chars = word.chars().count();
        if num_chars == 0 {
            return;
        }
        self.longest_word = self.longest_word.max(num_chars);

        // end offsets of each prefix, in bytes, so multi-byte chars are never split
        let ends = word.char_indices().skip(1).map(|(i, _)| i).chain(std::iter::once(word.len()));
        for (i, end) in ends.enumerate() {
            let kind = if i + 1 == num_chars {
                PrefixKind::Complete
            } else {
                PrefixKind::Partial
            };

            self.entries
                .entry(word[..end].to_string())
                .and_modify(|existing| *existing = existing.merge(kind))
                .or_insert(kind);
        }
    }

    /// Look up the classification of `s`, or `None` if no word starts with it.
    #[must_use]
    pub fn lookup(&self, s: &str) -> Option<PrefixKind> {
        self.entries.get(s).copied()
    }

    /// Is `s` one of the indexed words?
    #[must_use]
    pub fn contains_word(&self, s: &str) -> bool {
        self.lookup(s).is_some_and(PrefixKind::is_word)
    }

    /// Number of distinct prefixes stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length (in characters) of the longest indexed word.
    ///
    /// No scan ray ever needs to go further than this.
    #[must_use]
    pub fn longest_word_len(&self) -> usize {
        self.longest_word
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PrefixIndex::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_prefixes() {
        let index = PrefixIndex::build(["CODE"]);
        assert_eq!(index.len(), 4);
        assert_eq!(index.lookup("C"), Some(PrefixKind::Partial));
        assert_eq!(index.lookup("CO"), Some(PrefixKind::Partial));
        assert_eq!(index.lookup("COD"), Some(PrefixKind::Partial));
        assert_eq!(index.lookup("CODE"), Some(PrefixKind::Complete));
        assert_eq!(index.lookup("CODES"), None);
        assert_eq!(index.lookup("O"), None);
        assert_eq!(index.lookup(""), None);
    }

    #[test]
    fn test_word_then_longer_word_upgrades() {
        let index = PrefixIndex::build(["CAT", "CATS"]);
        assert_eq!(index.lookup("CAT"), Some(PrefixKind::Both));
        assert_eq!(index.lookup("CATS"), Some(PrefixKind::Complete));
    }

    #[test]
    fn test_longer_word_then_word_upgrades() {
        let index = PrefixIndex::build(["CATS", "CAT"]);
        assert_eq!(index.lookup("CAT"), Some(PrefixKind::Both));
        assert_eq!(index.lookup("CA"), Some(PrefixKind::Partial));
    }

    #[test]
    fn test_single_letter_word_and_longer() {
        let index = PrefixIndex::build(["A", "AB"]);
        assert_eq!(index.lookup("A"), Some(PrefixKind::Both));
        assert_eq!(index.lookup("AB"), Some(PrefixKind::Complete));
    }

    #[test]
    fn test_duplicates_are_idempotent() {
        let once = PrefixIndex::build(["DOG", "DOGMA"]);
        let twice = PrefixIndex::build(["DOG", "DOGMA", "DOG", "DOGMA", "DOG"]);
        assert_eq!(once.entries, twice.entries);
        assert_eq!(twice.lookup("DOG"), Some(PrefixKind::Both));
    }

    #[test]
    fn test_empty_words_skipped() {
        let index = PrefixIndex::build(["", "", "HI", ""]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup(""), None);

        let empty = PrefixIndex::build(Vec::<String>::new());
        assert!(empty.is_empty());
        assert_eq!(empty.longest_word_len(), 0);
    }

    #[test]
    fn test_case_insensitive_build() {
        let index = PrefixIndex::build(["cat"]);
        assert!(index.contains_word("CAT"));
        assert_eq!(index.lookup("cat"), None);
    }

    #[test]
    fn test_contains_word() {
        let index = PrefixIndex::build(["TOY", "TOYS"]);
        assert!(index.contains_word("TOY"));
        assert!(index.contains_word("TOYS"));
        assert!(!index.contains_word("TO"));
        assert!(!index.contains_word("TOYSS"));
    }

    #[test]
    fn test_longest_word_len() {
        let index: PrefixIndex = ["A", "ABCDE", "ABC"].into_iter().collect();
        assert_eq!(index.longest_word_len(), 5);
    }

    #[test]
    fn test_every_key_is_a_prefix_of_some_word() {
        let words = ["GOD", "GOOD", "GO", "DOG", "DOGE"];
        let index = PrefixIndex::build(words);
        for (key, kind) in &index.entries {
            assert!(words.iter().any(|w| w.starts_with(key.as_str())), "{key} is not a prefix");
            let is_word = words.contains(&key.as_str());
            let is_strict_prefix = words.iter().any(|w| w.len() > key.len() && w.starts_with(key.as_str()));
            let expected = match (is_word, is_strict_prefix) {
                (true, true) => PrefixKind::Both,
                (true, false) => PrefixKind::Complete,
                (false, true) => PrefixKind::Partial,
                (false, false) => unreachable!(),
            };
            assert_eq!(*kind, expected, "wrong kind for {key}");
        }
    }

    #[test]
    fn test_merge_rule() {
        use PrefixKind::{Both, Complete, Partial};
        for a in [Partial, Complete, Both] {
            assert_eq!(a.merge(a), a);
            assert_eq!(a.merge(Both), Both);
            for b in [Partial, Complete, Both] {
                assert_eq!(a.merge(b), b.merge(a));
            }
        }
        assert_eq!(Partial.merge(Complete), Both);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(!PrefixKind::Partial.is_word());
        assert!(PrefixKind::Partial.can_extend());
        assert!(PrefixKind::Complete.is_word());
        assert!(!PrefixKind::Complete.can_extend());
        assert!(PrefixKind::Both.is_word());
        assert!(PrefixKind::Both.can_extend());
    }
}
