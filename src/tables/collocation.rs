//! Collocation table.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Archive name, excluded from collocations.
pub const SENTINEL: &str = "gutenberg";

/// Titles are truncated to this many characters.
pub const TITLE_MAX_CHARS: usize = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollocationRow {
    #[serde(rename = "TOKEN 1")]
    pub token1: String,
    #[serde(rename = "TOKEN 2")]
    pub token2: String,
    #[serde(rename = "CONCAT")]
    pub concat: String,
    #[serde(rename = "LANG")]
    pub lang: String,
    #[serde(rename = "TITLE")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl CollocationRow {
    /// `title` is truncated to [TITLE_MAX_CHARS] and stripped of carriage returns.
    pub fn new(token1: String, token2: String, lang: String, title: &str, url: String) -> Self {
        let concat = format!("{}{}", token1, token2);
        let title = title
            .chars()
            .take(TITLE_MAX_CHARS)
            .filter(|c| *c != '\r')
            .collect();
        Self {
            token1,
            token2,
            concat,
            lang,
            title,
            url,
        }
    }

    /// `true` if either token is the [SENTINEL].
    pub fn has_sentinel(&self) -> bool {
        self.token1 == SENTINEL || self.token2 == SENTINEL
    }

    /// Deduplication key. The source URL is not part of it.
    fn key(&self) -> (&str, &str, &str, &str, &str) {
        (
            &self.token1,
            &self.token2,
            &self.concat,
            &self.lang,
            &self.title,
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CollocationTable {
    rows: Vec<CollocationRow>,
}

impl CollocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deduplicated table, keeping first occurrences.
    pub fn from_rows(rows: impl IntoIterator<Item = CollocationRow>) -> Self {
        let mut table = Self {
            rows: rows.into_iter().collect(),
        };
        table.dedup();
        table
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &CollocationRow> {
        self.rows.iter()
    }

    /// Insert rows ahead of the existing ones. Does not deduplicate.
    pub fn prepend(&mut self, rows: impl IntoIterator<Item = CollocationRow>) {
        let mut rows: Vec<CollocationRow> = rows.into_iter().collect();
        rows.append(&mut self.rows);
        self.rows = rows;
    }

    /// Full table deduplication pass, keeping first occurrences.
    /// Returns the number of removed rows.
    pub fn dedup(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen = HashSet::with_capacity(before);
        let mut kept = Vec::with_capacity(before);
        for row in self.rows.drain(..) {
            let key = row.key();
            let key = (
                key.0.to_string(),
                key.1.to_string(),
                key.2.to_string(),
                key.3.to_string(),
                key.4.to_string(),
            );
            if seen.insert(key) {
                kept.push(row);
            }
        }
        self.rows = kept;
        before - self.rows.len()
    }

    /// Number of distinct source URLs.
    pub fn source_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.url.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
