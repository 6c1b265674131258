/*! Persistent tables

The crawl accumulates two tables:
- [VocabularyTable], one row per word, with a cross-document frequency,
- [CollocationTable], deduplicated adjacent word pairs.

Both are owned by the crawl for the whole process, and mutated in place by [crate::processing::Aggregator].
!*/
mod collocation;
mod counter;
mod vocabulary;

pub use collocation::{CollocationRow, CollocationTable, SENTINEL, TITLE_MAX_CHARS};
pub use vocabulary::{is_degenerate, VocabularyRow, VocabularyTable, MAX_WORD_LEN};

/// Both tables, as loaded from and saved to a checkpoint.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tables {
    pub vocabulary: VocabularyTable,
    pub collocations: CollocationTable,
}

impl Tables {
    pub fn new(vocabulary: VocabularyTable, collocations: CollocationTable) -> Self {
        Self {
            vocabulary,
            collocations,
        }
    }
}
