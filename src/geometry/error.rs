//! Warning and outcome types for the position engines
//!
//! The engines never panic or hard-fail on well-formed numeric input. The
//! only failure modes are user-facing: a precondition was not met (the map
//! is returned untouched) or an operation could apply only partially (the
//! map is returned with warnings attached).

use thiserror::Error;

use super::types::FieldPositionMap;

/// Non-fatal, user-facing condition raised by a position operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// An operation needs more selected fields than it was given
    #[error("{operation} requires at least {required} selected fields ({actual} selected)")]
    TooFewFields {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    /// Paste was requested before anything was copied
    #[error("nothing to paste: no positions have been copied")]
    EmptyClipboard,

    /// Snapshot and selection differ in size; only the overlap was applied
    #[error("copied {copied} positions but {selected} fields selected; applied {applied}")]
    PartialPaste {
        copied: usize,
        selected: usize,
        applied: usize,
    },

    /// Group has more fields than there are targets; the surplus is skipped
    #[error("group has {group_fields} fields but only {targets} targets; some fields will be skipped")]
    GroupTruncated { group_fields: usize, targets: usize },

    /// A named field has no recorded position and was skipped
    #[error("field '{field}' has no recorded position")]
    UnknownField { field: String },
}

impl Warning {
    pub fn too_few(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::TooFewFields {
            operation,
            required,
            actual,
        }
    }

    pub fn unknown(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}

/// A successfully applied operation: the new map plus any partial-application
/// warnings the host should surface
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub positions: FieldPositionMap,
    pub warnings: Vec<Warning>,
}

impl Applied {
    /// An outcome with no warnings
    pub fn clean(positions: FieldPositionMap) -> Self {
        Self {
            positions,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(positions: FieldPositionMap, warnings: Vec<Warning>) -> Self {
        Self {
            positions,
            warnings,
        }
    }
}

/// Uniform return type for position operations
///
/// `Err` means the precondition failed and the caller's map is untouched;
/// `Ok` carries the new map and any warnings about partial application.
pub type EngineResult = Result<Applied, Warning>;
