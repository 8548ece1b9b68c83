// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Import, export, and the built-in starting states.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::EditorConfig;
use crate::model::{AppState, Player, Tactic};

/// Version written by [`notebook_script`] and accepted by the loader.
pub const DOCUMENT_VERSION: u64 = 1;

/// Failure while reading or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Not JSON, or not the expected shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
    /// A version this editor does not read.
    #[error("unsupported document version {0}")]
    UnsupportedVersion(u64),
    /// Well-formed, but violates an invariant of the model.
    #[error("inconsistent document: {0}")]
    Inconsistent(String),
}

/// The exported data: tactics only, no display state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Tactics, in list order.
    pub tactics: Vec<Tactic>,
}

/// Versioned envelope stored under the storage key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Format version.
    pub version: u64,
    /// Version-specific content.
    pub content: serde_json::Value,
}

/// String key-value storage, such as the browser's local storage.
pub trait Storage {
    /// Value under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: String);
    /// Removes `key`.
    fn remove(&mut self, key: &str);
}

/// In-memory [`Storage`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

fn player(id: u64, x: f64, y: f64) -> Player {
    Player {
        id: id.into(),
        x,
        y,
        color: 0,
    }
}

/// One empty-ish tactic with a single player at the center.
#[must_use]
pub fn default_state(config: &EditorConfig) -> AppState {
    let tactic = Tactic {
        description: String::new(),
        height: 2.0,
        points: vec![player(1, 0.0, 0.0)],
    };
    AppState::new(config.palette.clone(), vec![tactic])
}

/// Two sample tactics, positioned on the second.
#[must_use]
pub fn dev_state(config: &EditorConfig) -> AppState {
    let tactics = vec![
        Tactic {
            description: "tactic description here".into(),
            height: 2.0,
            points: vec![player(1, 0.0, -450.0), player(2, 0.0, -400.0)],
        },
        Tactic {
            description: "Second tactics".into(),
            height: 3.5,
            points: vec![
                player(1, 0.0, -450.0),
                player(2, 0.0, -400.0),
                player(3, 0.0, -350.0),
            ],
        },
    ];
    let mut state = AppState::new(config.palette.clone(), tactics);
    state.tactic_idx = 1;
    state
}

fn check(payload: &Payload) -> Result<(), PersistError> {
    for (index, tactic) in payload.tactics.iter().enumerate() {
        let mut seen = HashSet::with_capacity(tactic.points.len());
        if let Some(dup) = tactic.points.iter().find(|p| !seen.insert(&p.id)) {
            return Err(PersistError::Inconsistent(format!(
                "tactic {}: player id {} appears more than once",
                index + 1,
                dup.id
            )));
        }
    }
    Ok(())
}

/// Decodes a stored document into its payload.
pub fn parse_document(text: &str) -> Result<Payload, PersistError> {
    let document: StoredDocument = serde_json::from_str(text)?;
    if document.version != DOCUMENT_VERSION {
        return Err(PersistError::UnsupportedVersion(document.version));
    }
    let payload: Payload = serde_json::from_value(document.content)?;
    check(&payload)?;
    Ok(payload)
}

/// Starting state of the editor.
///
/// A document under the storage key is read and, once it parses, removed. A
/// malformed document is logged and left in storage untouched. Without a usable
/// document, `query` equal to the configured dev query selects
/// [`dev_state`], anything else [`default_state`].
pub fn load_initial_state(
    storage: &mut dyn Storage,
    query: &str,
    config: &EditorConfig,
) -> AppState {
    if let Some(text) = storage.get(&config.storage_key) {
        match parse_document(&text) {
            Ok(payload) => {
                storage.remove(&config.storage_key);
                debug!(tactics = payload.tactics.len(), "loaded stored document");
                return AppState::new(config.palette.clone(), payload.tactics);
            }
            Err(err) => error!(error = %err, "stored document ignored"),
        }
    }
    if query == config.dev_query {
        dev_state(config)
    } else {
        default_state(config)
    }
}

/// The export payload of `state`, as pretty JSON.
pub fn export_payload(state: &AppState) -> Result<String, PersistError> {
    let payload = Payload {
        tactics: state.tactics.clone(),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Inline script that stores `state` under `key` for the next load.
///
/// The output is safe to embed in a `<script>` element.
pub fn notebook_script(state: &AppState, key: &str) -> Result<String, PersistError> {
    let document = StoredDocument {
        version: DOCUMENT_VERSION,
        content: serde_json::to_value(Payload {
            tactics: state.tactics.clone(),
        })?,
    };
    let json = serde_json::to_string(&document)?;
    let script = format!(
        "localStorage.setItem({}, {});",
        serde_json::to_string(key)?,
        serde_json::to_string(&json)?
    );
    Ok(script.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_version_is_rejected() {
        let err = parse_document(r#"{"version": 2, "content": {"tactics": []}}"#).unwrap_err();
        assert!(matches!(err, PersistError::UnsupportedVersion(2)));
    }

    #[test]
    fn duplicate_player_ids_are_inconsistent() {
        let text = r#"{"version": 1, "content": {"tactics": [
            {"description": "", "height": 1, "points": [{"id": 1}, {"id": 1}]}
        ]}}"#;
        assert!(matches!(
            parse_document(text),
            Err(PersistError::Inconsistent(_))
        ));
    }

    #[test]
    fn bad_document_is_kept_in_storage() {
        let config = EditorConfig::default();
        let mut storage = MemoryStorage::new();
        storage.set("story", "not json".into());
        let state = load_initial_state(&mut storage, "", &config);
        assert_eq!(state, default_state(&config));
        assert_eq!(storage.get("story").as_deref(), Some("not json"));
    }

    #[test]
    fn dev_query_selects_the_fixture() {
        let config = EditorConfig::default();
        let state = load_initial_state(&mut MemoryStorage::new(), "?dev", &config);
        assert_eq!(state.tactics.len(), 2);
        assert_eq!(state.tactic_idx, 1);
        assert!(state.is_aligned());
    }

    #[test]
    fn script_escapes_closing_tags() {
        let mut state = default_state(&EditorConfig::default());
        state.tactics[0].description = "</script>".into();
        let script = notebook_script(&state, "story").unwrap();
        assert!(script.starts_with("localStorage.setItem(\"story\", \""));
        assert!(!script.contains("</"));
    }
}
