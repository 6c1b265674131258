//! Checkpoint store.
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::tables::{CollocationRow, CollocationTable, Tables, VocabularyRow, VocabularyTable};

pub const VOCABULARY_FILE: &str = "word_table.csv";
pub const COLLOCATIONS_FILE: &str = "collocations_table.csv";

/// Loads and saves both tables.
///
/// Files are written to a temporary sibling then renamed, so that an interruption
/// during a save leaves the previous checkpoint intact.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    vocabulary: PathBuf,
    collocations: PathBuf,
}

impl CheckpointStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            vocabulary: dir.join(VOCABULARY_FILE),
            collocations: dir.join(COLLOCATIONS_FILE),
        }
    }

    /// `true` if both files are present.
    pub fn exists(&self) -> bool {
        self.vocabulary.is_file() && self.collocations.is_file()
    }

    /// Load both tables.
    ///
    /// Returns empty tables if either file is missing.
    ///
    /// # Errors
    /// Propagates I/O and csv errors, so that a corrupt checkpoint is never silently overwritten.
    pub fn load(&self) -> Result<Tables, Error> {
        if !self.exists() {
            if self.vocabulary.is_file() || self.collocations.is_file() {
                warn!("incomplete checkpoint in {:?}, starting from empty tables", self.vocabulary.parent());
            } else {
                info!("no checkpoint found, starting from empty tables");
            }
            return Ok(Tables::default());
        }

        let vocabulary = VocabularyTable::from_rows(read_rows::<VocabularyRow>(&self.vocabulary)?);
        let collocations =
            CollocationTable::from_rows(read_rows::<CollocationRow>(&self.collocations)?);

        info!("loaded {} sources", collocations.source_count());
        info!(
            "{} collocations | {} words",
            collocations.len(),
            vocabulary.len()
        );

        Ok(Tables::new(vocabulary, collocations))
    }

    /// Save both tables, the vocabulary sorted by descending frequency.
    pub fn save(&self, tables: &Tables) -> Result<(), Error> {
        write_rows(&self.collocations, tables.collocations.rows())?;
        write_rows(
            &self.vocabulary,
            tables.vocabulary.sorted_by_frequency().into_iter(),
        )?;
        info!(
            "saved checkpoint: {} collocations | {} words",
            tables.collocations.len(),
            tables.vocabulary.len()
        );
        Ok(())
    }
}

fn read_rows<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    debug!("reading {:?}", path);
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}

fn write_rows<'a, T>(path: &Path, rows: impl Iterator<Item = &'a T>) -> Result<(), Error>
where
    T: Serialize + 'a,
{
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    debug!("writing {:?}", tmp);
    let mut writer = csv::Writer::from_path(&tmp)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);

    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn tables() -> Tables {
        let vocabulary = VocabularyTable::from_rows(vec![
            VocabularyRow::new("sea".into(), "noun".into(), "english".into()).with_frequency(2),
            VocabularyRow::new("whale".into(), "noun".into(), "english".into()).with_frequency(9),
        ]);
        let collocations = CollocationTable::from_rows(vec![CollocationRow::new(
            "white".into(),
            "whale".into(),
            "english".into(),
            "Moby Dick",
            "https://archive.test/2701".into(),
        )]);
        Tables::new(vocabulary, collocations)
    }

    #[test]
    fn missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), Tables::default());
    }

    #[test]
    fn half_checkpoint_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(VOCABULARY_FILE), "WORD,UNQ FREQ\nsea,1\n").unwrap();
        let store = CheckpointStore::new(dir.path());
        assert_eq!(store.load().unwrap(), Tables::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        let tables = tables();
        store.save(&tables).unwrap();
        assert!(store.exists());
        assert!(!dir.path().join("word_table.csv.tmp").exists());
        assert_eq!(store.load().unwrap(), tables);
    }

    #[test]
    fn vocabulary_sorted_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        store.save(&tables()).unwrap();

        let content = fs::read_to_string(dir.path().join(VOCABULARY_FILE)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "WORD,PART OF SPEECH,LANG,UNQ FREQ");
        assert_eq!(lines[1], "whale,noun,english,9");
        assert_eq!(lines[2], "sea,noun,english,2");
    }

    #[test]
    fn loads_float_counters_and_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(VOCABULARY_FILE),
            "WORD,UNQ FREQ,TITLE,LANG,PART OF SPEECH,LENGTH\n\
             time,3.0,A Tale,english,noun,4\n\
             whale,,A Tale,english,noun,5\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(COLLOCATIONS_FILE),
            "TOKEN 1,TOKEN 2,CONCAT,LANG,TITLE,URL\n",
        )
        .unwrap();

        let tables = CheckpointStore::new(dir.path()).load().unwrap();
        assert_eq!(
            tables.vocabulary.get("time").unwrap().unique_frequency,
            Some(3)
        );
        assert_eq!(
            tables.vocabulary.get("whale").unwrap().unique_frequency,
            Some(1)
        );
        assert!(tables.collocations.is_empty());
    }

    #[test]
    fn corrupt_counter_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(VOCABULARY_FILE), "WORD,UNQ FREQ\ntime,lots\n").unwrap();
        fs::write(dir.path().join(COLLOCATIONS_FILE), "").unwrap();
        assert!(CheckpointStore::new(dir.path()).load().is_err());
    }
}
