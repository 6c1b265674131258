//! Vocabulary table.
use std::collections::HashMap;

use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

/// Words of this many characters or more are tokenizer noise.
pub const MAX_WORD_LEN: usize = 37;

/// Returns `true` if the word must never enter the vocabulary.
#[inline]
pub fn is_degenerate(word: &str) -> bool {
    word.is_empty() || word.chars().count() >= MAX_WORD_LEN
}

/// A known word.
///
/// `unique_frequency` is the number of distinct documents the word appeared in.
/// It is unset (`None`) on freshly tagged rows, until the merge fills it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRow {
    #[serde(rename = "WORD")]
    pub word: String,
    #[serde(rename = "PART OF SPEECH", default)]
    pub pos: String,
    #[serde(rename = "LANG", default)]
    pub lang: String,
    #[serde(rename = "UNQ FREQ", default, deserialize_with = "super::counter::deserialize")]
    pub unique_frequency: Option<u64>,
}

impl VocabularyRow {
    pub fn new(word: String, pos: String, lang: String) -> Self {
        Self {
            word,
            pos,
            lang,
            unique_frequency: None,
        }
    }

    pub fn with_frequency(mut self, frequency: u64) -> Self {
        self.unique_frequency = Some(frequency);
        self
    }
}

/// Rows keyed by word.
///
/// Uniqueness of words is guaranteed by construction:
/// there is no way to insert a row for a word that is already known.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VocabularyTable {
    rows: HashMap<String, VocabularyRow>,
}

impl VocabularyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from possibly dirty rows.
    ///
    /// - degenerate words are dropped,
    /// - duplicated words are collapsed, keeping the highest counter,
    /// - unset counters are filled.
    pub fn from_rows(rows: impl IntoIterator<Item = VocabularyRow>) -> Self {
        let mut table = Self::new();
        let mut nb_degenerate = 0;
        let mut nb_duplicates = 0;

        for row in rows {
            if is_degenerate(&row.word) {
                nb_degenerate += 1;
                continue;
            }
            match table.rows.get_mut(&row.word) {
                Some(existing) => {
                    nb_duplicates += 1;
                    if row.unique_frequency > existing.unique_frequency {
                        *existing = row;
                    }
                }
                None => {
                    table.rows.insert(row.word.clone(), row);
                }
            }
        }

        if nb_degenerate > 0 || nb_duplicates > 0 {
            warn!(
                "vocabulary: dropped {} degenerate words, collapsed {} duplicates",
                nb_degenerate, nb_duplicates
            );
        }

        table.fill_missing_frequency();
        table
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.rows.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<&VocabularyRow> {
        self.rows.get(word)
    }

    pub fn rows(&self) -> impl Iterator<Item = &VocabularyRow> {
        self.rows.values()
    }

    /// Insert a row for an unknown word.
    ///
    /// Returns `false` (and leaves the table untouched) if the word is already known or degenerate.
    pub fn insert(&mut self, row: VocabularyRow) -> bool {
        if is_degenerate(&row.word) || self.rows.contains_key(&row.word) {
            return false;
        }
        self.rows.insert(row.word.clone(), row);
        true
    }

    /// Add one document to the word's frequency.
    ///
    /// An unset counter counts as one document already.
    /// Returns `false` if the word is unknown.
    pub fn increment(&mut self, word: &str) -> bool {
        match self.rows.get_mut(word) {
            Some(row) => {
                row.unique_frequency = Some(row.unique_frequency.unwrap_or(1) + 1);
                true
            }
            None => false,
        }
    }

    /// Set unset counters to 1, returning the number of filled rows.
    ///
    /// Rows that already hold a counter are left untouched.
    pub fn fill_missing_frequency(&mut self) -> usize {
        let mut filled = 0;
        for row in self.rows.values_mut() {
            if row.unique_frequency.is_none() {
                row.unique_frequency = Some(1);
                filled += 1;
            }
        }
        filled
    }

    /// Rows by descending frequency, then by word.
    pub fn sorted_by_frequency(&self) -> Vec<&VocabularyRow> {
        self.rows
            .values()
            .sorted_by(|a, b| {
                b.unique_frequency
                    .cmp(&a.unique_frequency)
                    .then_with(|| a.word.cmp(&b.word))
            })
            .collect()
    }
}
