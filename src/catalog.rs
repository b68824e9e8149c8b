//! Per-form field catalog
//!
//! The host UI owns the real form metadata; this catalog carries the part
//! the position engine needs: which fields a form has, what kind of input
//! each one is, and the default overlay position a field falls back to
//! before it has ever been moved.

use crate::geometry::{FieldPosition, FieldPositionMap};

/// Supported California Judicial Council forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    /// FL-320: Responsive Declaration to Request for Order
    Fl320,
    /// DV-100: Request for Domestic Violence Restraining Order
    Dv100,
    /// DV-105: Request for Child Custody and Visitation Orders
    Dv105,
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormType::Fl320 => write!(f, "FL-320"),
            FormType::Dv100 => write!(f, "DV-100"),
            FormType::Dv105 => write!(f, "DV-105"),
        }
    }
}

impl std::str::FromStr for FormType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FL-320" | "FL320" => Ok(FormType::Fl320),
            "DV-100" | "DV100" => Ok(FormType::Dv100),
            "DV-105" | "DV105" => Ok(FormType::Dv105),
            other => Err(format!(
                "unknown form type '{}' (expected FL-320, DV-100 or DV-105)",
                other
            )),
        }
    }
}

/// Kind of input a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Checkbox,
}

/// Static configuration for one overlay field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default_position: FieldPosition,
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    top: f64,
    left: f64,
) -> FieldConfig {
    FieldConfig {
        name,
        label,
        kind,
        default_position: FieldPosition { top, left },
    }
}

const FL320_FIELDS: &[FieldConfig] = &[
    field("attorney_name", "Attorney or party without attorney", FieldKind::Text, 5.0, 6.0),
    field("attorney_phone", "Telephone no.", FieldKind::Text, 8.5, 6.0),
    field("attorney_email", "Email address", FieldKind::Text, 10.0, 6.0),
    field("court_county", "Superior Court of California, County of", FieldKind::Text, 13.5, 6.0),
    field("court_address", "Street address", FieldKind::Text, 15.0, 6.0),
    field("petitioner", "Petitioner", FieldKind::Text, 19.0, 6.0),
    field("respondent", "Respondent", FieldKind::Text, 21.0, 6.0),
    field("other_parent", "Other parent/party", FieldKind::Text, 23.0, 6.0),
    field("case_number", "Case number", FieldKind::Text, 19.0, 72.0),
    field("hearing_date", "Hearing date", FieldKind::Text, 26.0, 10.0),
    field("consent_custody", "Consent to custody order", FieldKind::Checkbox, 35.0, 8.0),
    field("consent_support", "Consent to support order", FieldKind::Checkbox, 38.0, 8.0),
    field("facts", "Facts in support", FieldKind::Textarea, 55.0, 6.0),
];

const DV100_FIELDS: &[FieldConfig] = &[
    field("protected_name", "Name of person asking for protection", FieldKind::Text, 6.0, 6.0),
    field("protected_age", "Age", FieldKind::Text, 6.0, 70.0),
    field("restrained_name", "Name of person you want protection from", FieldKind::Text, 12.0, 6.0),
    field("restrained_description", "Description of that person", FieldKind::Textarea, 16.0, 6.0),
    field("relationship", "Your relationship to that person", FieldKind::Text, 24.0, 6.0),
    field("case_number", "Case number", FieldKind::Text, 6.0, 72.0),
    field("live_together", "We live together", FieldKind::Checkbox, 30.0, 8.0),
    field("other_orders", "Other restraining orders exist", FieldKind::Checkbox, 34.0, 8.0),
    field("abuse_description", "Describe the most recent abuse", FieldKind::Textarea, 48.0, 6.0),
];

const DV105_FIELDS: &[FieldConfig] = &[
    field("parent_asking", "Name of parent asking for orders", FieldKind::Text, 6.0, 6.0),
    field("other_parent", "Name of other parent", FieldKind::Text, 9.0, 6.0),
    field("case_number", "Case number", FieldKind::Text, 6.0, 72.0),
    field("child_1_name", "Child's name", FieldKind::Text, 18.0, 6.0),
    field("child_1_birthdate", "Date of birth", FieldKind::Text, 18.0, 55.0),
    field("child_2_name", "Child's name", FieldKind::Text, 21.0, 6.0),
    field("child_2_birthdate", "Date of birth", FieldKind::Text, 21.0, 55.0),
    field("custody_to_me", "Legal custody to me", FieldKind::Checkbox, 30.0, 8.0),
    field("visitation_none", "No visitation", FieldKind::Checkbox, 36.0, 8.0),
    field("visitation_schedule", "Proposed visitation schedule", FieldKind::Textarea, 50.0, 6.0),
];

/// Field configurations for a form, in page order
pub fn fields_for(form: FormType) -> &'static [FieldConfig] {
    match form {
        FormType::Fl320 => FL320_FIELDS,
        FormType::Dv100 => DV100_FIELDS,
        FormType::Dv105 => DV105_FIELDS,
    }
}

/// Default overlay position for one field of a form
pub fn default_position(form: FormType, name: &str) -> Option<FieldPosition> {
    fields_for(form)
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.default_position)
}

/// Position map seeded with every field of a form at its default position
pub fn default_positions(form: FormType) -> FieldPositionMap {
    fields_for(form)
        .iter()
        .map(|f| (f.name, f.default_position))
        .collect()
}
