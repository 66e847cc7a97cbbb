//! Word tables
//!
//! A [`Wordlist`] is an immutable table of exactly 2048 words. It is validated
//! once at construction and carries a reverse index so that decoding does a
//! hash lookup per word instead of a scan.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Number of entries in every word table
pub const WORDLIST_SIZE: usize = 2048;

const ENGLISH: &str = include_str!("../../wordlists/english.txt");

#[derive(Debug)]
struct Inner {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

/// A validated 2048-entry word table.
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone)]
pub struct Wordlist {
    inner: Arc<Inner>,
}

impl Wordlist {
    /// Build a table from an ordered sequence of words.
    ///
    /// Entries are stored in NFKD form, so [`Wordlist::word`] returns the
    /// same bytes that normalized mnemonic text contains. Fails with
    /// [`Error::InvalidWordlist`] unless there are exactly 2048 entries and,
    /// after normalization, none is empty, none contains whitespace and no
    /// two are equal.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = words.into_iter().map(Into::into).collect();
        if raw.len() != WORDLIST_SIZE {
            return Err(Error::InvalidWordlist(format!(
                "expected {} entries, got {}",
                WORDLIST_SIZE,
                raw.len()
            )));
        }

        let mut words = Vec::with_capacity(WORDLIST_SIZE);
        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in raw.iter().enumerate() {
            let key: String = word.nfkd().collect();
            if key.trim().is_empty() {
                return Err(Error::InvalidWordlist(format!("entry {} is empty", i)));
            }
            if key.chars().any(char::is_whitespace) {
                return Err(Error::InvalidWordlist(format!("entry {} contains whitespace", i)));
            }
            if index.insert(key.clone(), i as u16).is_some() {
                return Err(Error::InvalidWordlist(format!("entry {} is a duplicate: {}", i, word)));
            }
            words.push(key);
        }

        debug!("Built wordlist index with {} entries", index.len());

        Ok(Self {
            inner: Arc::new(Inner { words, index }),
        })
    }

    /// Build a table from newline-separated text, one word per line.
    ///
    /// Surrounding whitespace on each line is ignored, as is a trailing
    /// newline. Blank lines inside the table are kept and rejected as empty
    /// entries.
    pub fn from_lines(text: &str) -> Result<Self> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        Self::new(text.split('\n').map(str::trim))
    }

    /// The bundled English table
    pub fn english() -> Result<Self> {
        Self::from_lines(ENGLISH)
    }

    /// Get the NFKD form of the word at `index`, if `index` is below 2048
    pub fn word(&self, index: u16) -> Option<&str> {
        self.inner.words.get(usize::from(index)).map(String::as_str)
    }

    /// Get the index of `word`.
    ///
    /// The lookup is done on the NFKD form of `word`.
    pub fn index_of(&self, word: &str) -> Result<u16> {
        let key: String = word.nfkd().collect();
        self.inner
            .index
            .get(&key)
            .copied()
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    /// Check whether `word` is in the table
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_ok()
    }

    /// All words in index order
    pub fn words(&self) -> &[String] {
        &self.inner.words
    }

    /// Words starting with `prefix`, in index order
    pub fn words_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inner
            .words
            .iter()
            .map(String::as_str)
            .filter(move |w| w.starts_with(prefix))
    }
}

impl PartialEq for Wordlist {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.words == other.inner.words
    }
}

impl Eq for Wordlist {}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{:04}", i)).collect()
    }

    #[test]
    fn test_english() {
        let wordlist = Wordlist::english().unwrap();
        assert_eq!(wordlist.words().len(), WORDLIST_SIZE);
        assert_eq!(wordlist.word(0), Some("abandon"));
        assert_eq!(wordlist.word(2047), Some("zoo"));
        assert_eq!(wordlist.word(2048), None);
        assert_eq!(wordlist.index_of("legal").unwrap(), 1019);
        assert_eq!(wordlist.index_of("winner").unwrap(), 2015);
    }

    #[test]
    fn test_wrong_size() {
        assert!(matches!(Wordlist::new(numbered(2047)), Err(Error::InvalidWordlist(_))));
        assert!(matches!(Wordlist::new(numbered(2049)), Err(Error::InvalidWordlist(_))));
        assert!(Wordlist::new(numbered(2048)).is_ok());
    }

    #[test]
    fn test_empty_entry() {
        let mut words = numbered(2048);
        words[100] = String::new();
        assert!(matches!(Wordlist::new(words), Err(Error::InvalidWordlist(_))));
    }

    #[test]
    fn test_duplicate_entry() {
        let mut words = numbered(2048);
        words[7] = words[8].clone();
        assert!(matches!(Wordlist::new(words), Err(Error::InvalidWordlist(_))));
    }

    #[test]
    fn test_entry_with_space() {
        let mut words = numbered(2048);
        words[3] = "two words".to_string();
        assert!(matches!(Wordlist::new(words), Err(Error::InvalidWordlist(_))));
    }

    #[test]
    fn test_unknown_word() {
        let wordlist = Wordlist::english().unwrap();
        assert_eq!(wordlist.index_of("qwerty"), Err(Error::UnknownWord("qwerty".to_string())));
        assert!(!wordlist.contains("qwerty"));
    }

    #[test]
    fn test_unordered_table() {
        let mut words = numbered(2048);
        words.reverse();
        let wordlist = Wordlist::new(words).unwrap();
        assert_eq!(wordlist.index_of("w2047").unwrap(), 0);
        assert_eq!(wordlist.word(2047), Some("w0000"));
    }

    #[test]
    fn test_lookup_is_normalized() {
        let mut words = numbered(2048);
        // precomposed e-acute
        words[5] = "caf\u{e9}".to_string();
        let wordlist = Wordlist::new(words).unwrap();
        // decomposed e + combining acute
        assert_eq!(wordlist.index_of("cafe\u{301}").unwrap(), 5);
        assert_eq!(wordlist.word(5), Some("cafe\u{301}"));
        assert_eq!(wordlist.index_of("caf\u{e9}").unwrap(), 5);
    }

    #[test]
    fn test_entry_with_compat_space() {
        // no-break and ideographic spaces decompose to U+0020
        for entry in ["a\u{a0}b", "a\u{3000}b"] {
            let mut words = numbered(2048);
            words[9] = entry.to_string();
            assert!(matches!(Wordlist::new(words), Err(Error::InvalidWordlist(_))));
        }
    }

    #[test]
    fn test_prefix() {
        let wordlist = Wordlist::english().unwrap();
        let words: Vec<&str> = wordlist.words_with_prefix("zo").collect();
        assert_eq!(words, vec!["zone", "zoo"]);
    }
}
