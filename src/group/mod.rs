//! Field-group templates: anchor-relative position bundles that can be saved,
//! shared as JSON, and reapplied onto a different anchor field.

mod encoder;
mod registry;

pub use encoder::{apply_group, relative_offsets, Encoded};
pub use registry::{export_group, parse_group, GroupRegistry, ImportError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member of a field group: a field name plus its offset from the
/// group's anchor field (the anchor itself is recorded at `(0, 0)`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupField {
    pub field: String,
    pub relative_top: f64,
    pub relative_left: f64,
}

impl GroupField {
    pub fn new(field: impl Into<String>, relative_top: f64, relative_left: f64) -> Self {
        Self {
            field: field.into(),
            relative_top,
            relative_left,
        }
    }
}

/// A saved field-group template
///
/// Serializes to the interchange JSON shape:
/// `{ "id", "name", "description"?, "createdAt", "fields": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub fields: Vec<GroupField>,
}

impl FieldGroup {
    /// Create a group with a fresh id and the current timestamp
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        fields: Vec<GroupField>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description,
            created_at: Utc::now(),
            fields,
        }
    }
}
