//! Word pool - the immutable set of three letter words passwords are built from
//!
//! The built-in pool is compiled in. A custom pool can be loaded from a plain
//! text file with one word per line.

mod words;

pub use words::THREE_LETTER_WORDS;

use std::path::Path;

use crate::error::{PassgenError, Result};

/// Length every pool word must have
pub const WORD_LENGTH: usize = 3;

/// Ordered, read-only collection of three letter lowercase words.
///
/// Duplicates are allowed and kept. Indexing is zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Create with the built-in word table
    pub fn builtin() -> Self {
        Self {
            words: THREE_LETTER_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create with a custom word list
    ///
    /// Entries are trimmed and lowercased; anything that is not exactly three
    /// ASCII letters is dropped.
    pub fn with_words(words: Vec<String>) -> Self {
        let mut kept = Vec::with_capacity(words.len());
        for raw in words {
            let word = raw.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if is_pool_word(&word) {
                kept.push(word);
            } else {
                tracing::warn!(word = %raw.trim(), "Skipping word list entry that is not three lowercase letters");
            }
        }
        Self { words: kept }
    }

    /// Load words from file (one word per line)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PassgenError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let pool = Self::with_words(content.lines().map(str::to_string).collect());
        tracing::info!(
            path = %path.display(),
            words = pool.size(),
            "Loaded word list"
        );
        Ok(pool)
    }

    /// Number of words in the pool
    pub fn size(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a zero-based index
    pub fn word_at(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| PassgenError::index_out_of_range(index, self.words.len()))
    }

    /// Iterate over the words in pool order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_pool_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase())
}
