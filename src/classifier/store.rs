use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading the word-list store. A failed load leaves no
/// usable classifier, so construction must stop here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word store: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse word store: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while writing the store back. The in-memory lists stay valid
/// when this happens; the caller may retry the save.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write word store: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize word store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialized image of the word-list store.
///
/// The on-disk record keeps the field names of the original lexicon files
/// (BUENAS, MALAS, NEUTRAS), each an ordered array of canonical forms. All
/// three fields are required; a store missing one fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStore {
    #[serde(rename = "BUENAS")]
    pub positive: Vec<String>,

    #[serde(rename = "MALAS")]
    pub negative: Vec<String>,

    #[serde(rename = "NEUTRAS")]
    pub neutral: Vec<String>,
}

impl WordStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<WordStore, LoadError> {
        let contents = fs::read_to_string(path)?;
        let store = serde_json::from_str(&contents)?;
        Ok(store)
    }

    /// Rewrite the whole record at `path` with the current lists. This is a
    /// full read-modify-write of the store, not an append; the last writer
    /// wins.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn test_store() -> WordStore {
        WordStore {
            positive: vec!["bueno".to_string(), "gracio".to_string()],
            negative: vec!["malo".to_string()],
            neutral: vec!["neutral_number".to_string()],
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = test_store();

        store.save(temp_file.path()).unwrap();
        let loaded = WordStore::load(temp_file.path()).unwrap();

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_parses_original_field_names() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            r#"{"BUENAS": ["bueno"], "MALAS": ["malo"], "NEUTRAS": []}"#,
        )
        .unwrap();

        let store = WordStore::load(temp_file.path()).unwrap();
        assert_eq!(store.positive, vec!["bueno"]);
        assert_eq!(store.negative, vec!["malo"]);
        assert!(store.neutral.is_empty());
    }

    #[test]
    fn test_load_fails_on_missing_field() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r#"{"BUENAS": [], "MALAS": []}"#).unwrap();

        let err = WordStore::load(temp_file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_load_fails_on_missing_file() {
        let err = WordStore::load("no_such_store.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_fails_on_malformed_json() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "not json at all").unwrap();

        let err = WordStore::load(temp_file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp_file = NamedTempFile::new().unwrap();
        test_store().save(temp_file.path()).unwrap();

        let mut updated = test_store();
        updated.positive.push("amable".to_string());
        updated.save(temp_file.path()).unwrap();

        let loaded = WordStore::load(temp_file.path()).unwrap();
        assert_eq!(loaded, updated);
    }
}
