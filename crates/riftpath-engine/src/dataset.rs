//! Champion dataset deserialization.
//!
//! Accepts Riot data-dragon style JSON: a top-level `data` object mapping
//! champion id to an entry carrying a `tags` array. Document order is
//! preserved because downstream enumeration order depends on it.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use riftpath_core::ChampionRecord;

use crate::error::{EngineError, Result};

/// Root document: `{"data": {...}}`. Sibling fields (`type`, `version`)
/// are ignored.
#[derive(Debug, Deserialize)]
struct ChampionDocument {
    data: IndexMap<String, ChampionEntry>,
}

/// A single champion entry. Only `tags` matters to the graph.
#[derive(Debug, Deserialize)]
struct ChampionEntry {
    #[serde(default)]
    tags: Vec<String>,
}

/// Read and decode a dataset file.
pub fn load_champions(path: impl AsRef<Path>) -> Result<Vec<ChampionRecord>> {
    let raw = fs::read_to_string(path.as_ref())?;
    let records = parse_champions(&raw)?;
    tracing::info!(
        path = %path.as_ref().display(),
        champions = records.len(),
        "Dataset loaded"
    );
    Ok(records)
}

/// Decode a dataset document from a JSON string.
pub fn parse_champions(raw: &str) -> Result<Vec<ChampionRecord>> {
    let document: ChampionDocument = serde_json::from_str(raw)?;
    if document.data.is_empty() {
        return Err(EngineError::EmptyDataset);
    }

    let mut records = Vec::with_capacity(document.data.len());
    for (id, entry) in document.data {
        if entry.tags.is_empty() {
            return Err(EngineError::MissingTags { id });
        }
        records.push(ChampionRecord { id, tags: entry.tags });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_document_order() {
        let raw = r#"{
            "type": "champion",
            "version": "9.3.1",
            "data": {
                "Zed": {"name": "Zed", "tags": ["Assassin"]},
                "Annie": {"name": "Annie", "tags": ["Mage"]},
                "Malphite": {"tags": ["Tank", "Fighter"]}
            }
        }"#;

        let records = parse_champions(raw).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Zed", "Annie", "Malphite"]);
        assert_eq!(records[2].tags, vec!["Tank", "Fighter"]);
    }

    #[test]
    fn test_parse_rejects_missing_tags() {
        let raw = r#"{"data": {"Annie": {"tags": []}}}"#;
        let err = parse_champions(raw).unwrap_err();
        assert!(matches!(err, EngineError::MissingTags { id } if id == "Annie"));

        let raw = r#"{"data": {"Annie": {"name": "Annie"}}}"#;
        assert!(matches!(
            parse_champions(raw).unwrap_err(),
            EngineError::MissingTags { .. }
        ));
    }

    #[test]
    fn test_parse_rejects_empty_dataset() {
        let raw = r#"{"data": {}}"#;
        assert!(matches!(
            parse_champions(raw).unwrap_err(),
            EngineError::EmptyDataset
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_champions("not json").unwrap_err(),
            EngineError::Serialization(_)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_champions("/nonexistent/champions.json").unwrap_err(),
            EngineError::Io(_)
        ));
    }
}
