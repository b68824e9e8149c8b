//! Group registry: an in-memory template collection with JSON import/export

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::FieldGroup;

/// Errors raised when importing or exporting group template files
#[derive(Debug, Error)]
pub enum ImportError {
    /// Failed to read or write a group file
    #[error("failed to access group file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or valid JSON of the wrong type
    #[error("invalid group JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Valid JSON that lacks a required part of the group shape
    #[error("group JSON missing required '{0}' field")]
    MissingField(&'static str),

    /// A group with this id is already registered
    #[error("duplicate group id: {id}")]
    DuplicateId { id: String },

    /// No registered group with this id
    #[error("group not found: {id}")]
    NotFound { id: String },
}

impl ImportError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Parse and shape-validate a group template from JSON.
///
/// Validation checks the minimal importable shape before the typed
/// deserialize: a JSON object with string `id` and `name` and a `fields`
/// array. Anything else is an [`ImportError`].
pub fn parse_group(json: &str) -> Result<FieldGroup, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let obj = value.as_object().ok_or(ImportError::MissingField("id"))?;

    if !obj.get("id").map(|v| v.is_string()).unwrap_or(false) {
        return Err(ImportError::MissingField("id"));
    }
    if !obj.get("name").map(|v| v.is_string()).unwrap_or(false) {
        return Err(ImportError::MissingField("name"));
    }
    if !obj.get("fields").map(|v| v.is_array()).unwrap_or(false) {
        return Err(ImportError::MissingField("fields"));
    }

    Ok(serde_json::from_value(value)?)
}

/// Serialize a group template to pretty-printed interchange JSON
pub fn export_group(group: &FieldGroup) -> Result<String, ImportError> {
    Ok(serde_json::to_string_pretty(group)?)
}

/// Collection of saved group templates, keyed by id
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: HashMap<String, FieldGroup>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group, rejecting duplicate ids
    pub fn register(&mut self, group: FieldGroup) -> Result<(), ImportError> {
        if self.groups.contains_key(&group.id) {
            return Err(ImportError::DuplicateId { id: group.id });
        }
        self.groups.insert(group.id.clone(), group);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&FieldGroup> {
        self.groups.get(id)
    }

    /// Find a group by its display name (first match)
    pub fn get_by_name(&self, name: &str) -> Option<&FieldGroup> {
        self.groups.values().find(|g| g.name == name)
    }

    pub fn remove(&mut self, id: &str) -> Option<FieldGroup> {
        self.groups.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.groups.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldGroup> {
        self.groups.values()
    }

    /// Import a group from a JSON string; the registry is untouched on any
    /// failure, including a duplicate id.
    pub fn import_str(&mut self, json: &str) -> Result<&FieldGroup, ImportError> {
        let group = parse_group(json)?;
        let id = group.id.clone();
        self.register(group)?;
        Ok(&self.groups[&id])
    }

    /// Import a group from a JSON file
    pub fn import_file(&mut self, path: &Path) -> Result<&FieldGroup, ImportError> {
        let json = std::fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
        self.import_str(&json)
    }

    /// Write a registered group to a JSON file
    pub fn export_file(&self, id: &str, path: &Path) -> Result<(), ImportError> {
        let group = self.get(id).ok_or_else(|| ImportError::NotFound {
            id: id.to_string(),
        })?;
        let json = export_group(group)?;
        std::fs::write(path, json).map_err(|e| ImportError::io(path, e))
    }
}
