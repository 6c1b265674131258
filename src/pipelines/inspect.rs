//! Checkpoint summary.
use serde::Serialize;

use crate::tables::{Tables, VocabularyRow};

/// Sizes and most frequent words of a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub words: usize,
    pub collocations: usize,
    pub sources: usize,
    pub top_words: Vec<VocabularyRow>,
}

impl Summary {
    pub fn new(tables: &Tables, top: usize) -> Self {
        Self {
            words: tables.vocabulary.len(),
            collocations: tables.collocations.len(),
            sources: tables.collocations.source_count(),
            top_words: tables
                .vocabulary
                .sorted_by_frequency()
                .into_iter()
                .take(top)
                .cloned()
                .collect(),
        }
    }
}
