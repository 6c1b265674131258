/*! Vocabulary and collocation merging

# Words
Document words are classified against the vocabulary:
- *recurring* words (known by both) get their frequency incremented, once per document,
- *new* words (document only) are tagged and inserted.

Frequencies left unset (fresh rows) are then filled with 1.

# Collocations
Document collocations are turned into rows, rows holding the [SENTINEL] are dropped,
the rows are put ahead of the table and the whole table is deduplicated.
A pair already known under the same title thus ends up attached to the latest url.

Merging an empty document leaves both tables untouched.
!*/
use std::collections::BTreeSet;

use log::{debug, error};

use super::DocumentResult;
use crate::lang::StopwordLang;
use crate::tables::{CollocationRow, CollocationTable, Tables, VocabularyTable, SENTINEL};
use crate::tagging::Tagger;

/// Document words split by whether the vocabulary knows them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    /// in the document only.
    pub new: Vec<&'a str>,
    /// in both the document and the vocabulary.
    pub recurring: Vec<&'a str>,
}

/// Classify document words by set difference/intersection over the vocabulary keys.
pub fn classify<'a>(vocabulary: &VocabularyTable, words: &'a BTreeSet<String>) -> Classification<'a> {
    let (recurring, new) = words
        .iter()
        .map(String::as_str)
        .partition(|word| vocabulary.contains(word));
    Classification { new, recurring }
}

/// What a merge did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub words_in_source: usize,
    pub new_words: usize,
    pub recurring_words: usize,
    pub collocations_in_source: usize,
    pub collocations_added: usize,
}

pub struct Aggregator {
    tagger: Tagger,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Tagger::default())
    }
}

impl Aggregator {
    pub fn new(tagger: Tagger) -> Self {
        Self { tagger }
    }

    /// Merge a document into both tables.
    pub fn merge(&self, tables: &mut Tables, doc: &DocumentResult) -> MergeReport {
        let (new_words, recurring_words) =
            self.merge_words(&mut tables.vocabulary, &doc.tokens.all, doc.lang);

        let collocations_added = merge_collocations(
            &mut tables.collocations,
            &doc.tokens.collocations,
            doc.lang,
            &doc.title,
            &doc.url,
        );

        MergeReport {
            words_in_source: doc.tokens.all.len(),
            new_words,
            recurring_words,
            collocations_in_source: doc.tokens.collocations.len(),
            collocations_added,
        }
    }

    /// Merge document words into the vocabulary.
    ///
    /// Returns the number of (inserted, incremented) words.
    pub fn merge_words(
        &self,
        vocabulary: &mut VocabularyTable,
        words: &BTreeSet<String>,
        lang: StopwordLang,
    ) -> (usize, usize) {
        let classification = classify(vocabulary, words);

        for word in &classification.recurring {
            vocabulary.increment(word);
        }
        verify_increments(vocabulary, &classification.recurring);

        let mut inserted = 0;
        for row in self.tagger.tag(classification.new.iter().copied(), lang) {
            if vocabulary.insert(row) {
                inserted += 1;
            }
        }

        let filled = vocabulary.fill_missing_frequency();
        if filled != inserted {
            error!(
                "{} counters filled for {} inserted words, some recurring counters were unset",
                filled, inserted
            );
        }

        debug!(
            "vocabulary merge: {} new, {} recurring",
            inserted,
            classification.recurring.len()
        );
        (inserted, classification.recurring.len())
    }
}

/// Recurring words must hold a counter of at least 2 before unset counters are filled,
/// otherwise the fill would hide a missed increment.
fn verify_increments(vocabulary: &VocabularyTable, recurring: &[&str]) {
    for word in recurring {
        match vocabulary.get(word).and_then(|row| row.unique_frequency) {
            Some(frequency) if frequency >= 2 => (),
            other => error!("increment missed for {:?} (counter: {:?})", word, other),
        }
    }
}

/// Put document collocations ahead of the table, then deduplicate the whole table.
///
/// Returns the net number of rows added.
pub fn merge_collocations(
    table: &mut CollocationTable,
    collocations: &[(String, String)],
    lang: StopwordLang,
    title: &str,
    url: &str,
) -> usize {
    let before = table.len();

    let rows = collocations
        .iter()
        .filter(|(t1, t2)| t1 != SENTINEL && t2 != SENTINEL)
        .map(|(t1, t2)| {
            CollocationRow::new(
                t1.clone(),
                t2.clone(),
                lang.to_string(),
                title,
                url.to_string(),
            )
        });
    table.prepend(rows);
    table.dedup();

    table.len().saturating_sub(before)
}
