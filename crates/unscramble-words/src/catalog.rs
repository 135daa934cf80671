//! The word catalog: a validated, read-only list of candidate words.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::CatalogError;
use crate::shuffle::distinct_chars;

/// The static list of words a game draws its rounds from.
///
/// A `WordCatalog` can only be built through validation, so any catalog
/// you hold is guaranteed to be non-empty and made of scramblable words.
/// Duplicate entries are accepted but only count once towards
/// [`distinct_len`](Self::distinct_len), the number of rounds the catalog
/// can actually supply without repeating a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordCatalog {
    words: Vec<String>,
    distinct: usize,
}

impl WordCatalog {
    /// Builds a catalog from any list of words.
    ///
    /// # Errors
    /// - [`CatalogError::Empty`] if `words` yields nothing.
    /// - [`CatalogError::DegenerateWord`] for the first word with fewer
    ///   than two distinct characters (this includes empty and
    ///   single-character words).
    pub fn new<I, S>(words: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(bad) = words.iter().find(|w| distinct_chars(w) < 2) {
            return Err(CatalogError::DegenerateWord { word: bad.clone() });
        }

        let distinct = words.iter().collect::<HashSet<_>>().len();
        tracing::debug!(words = words.len(), distinct, "word catalog built");

        Ok(Self { words, distinct })
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words.
    pub fn distinct_len(&self) -> usize {
        self.distinct
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl TryFrom<Vec<String>> for WordCatalog {
    type Error = CatalogError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<WordCatalog> for Vec<String> {
    fn from(catalog: WordCatalog) -> Self {
        catalog.words
    }
}
