//! formgrid - field-position geometry for court-form PDF overlays
//!
//! This library implements the positioning engine behind a form-filling
//! overlay editor: normalized percentage positions, bounds clamping, grid
//! snapping, keyboard nudging, multi-select alignment and distribution,
//! position copy/paste, and anchor-relative field-group templates with a
//! JSON interchange format.
//!
//! All engines are pure: they borrow the current [`FieldPositionMap`] and
//! return a new one, leaving persistence and rendering to the host.
//!
//! # Example
//!
//! ```rust
//! use formgrid::{align, AlignEdge, FieldPosition, FieldPositionMap, Selection};
//!
//! let positions = FieldPositionMap::from_iter([
//!     ("case_number", FieldPosition::new(10.0, 10.0)),
//!     ("petitioner", FieldPosition::new(20.0, 30.0)),
//! ]);
//! let selection = Selection::from_iter(["case_number", "petitioner"]);
//!
//! let applied = align(&positions, &selection, AlignEdge::Left).unwrap();
//! assert_eq!(applied.positions.get("petitioner").unwrap().left, 10.0);
//! ```

pub mod catalog;
pub mod geometry;
pub mod group;
pub mod settings;

pub use catalog::{default_positions, fields_for, FieldConfig, FieldKind, FormType};
pub use geometry::{
    align, copy_positions, distribute, nudge_fields, paste_positions, snap_to_grid, transform,
    AlignEdge, Applied, CopiedPositions, DistributeAxis, EngineResult, FieldPosition,
    FieldPositionMap, NudgeDirection, Selection, Transform, Warning, DEFAULT_NUDGE_STEP,
};
pub use group::{
    apply_group, export_group, parse_group, relative_offsets, FieldGroup, GroupField,
    GroupRegistry, ImportError,
};
pub use settings::{Settings, SettingsError};
