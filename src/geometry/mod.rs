//! Pure position geometry: clamping, snapping, nudging, alignment,
//! distribution, and copy/paste transforms over a field position map.
//!
//! Every engine borrows the current [`FieldPositionMap`] and returns a new
//! one; the caller decides when to persist. See [`EngineResult`] for the
//! uniform warning policy.

mod align;
mod distribute;
mod error;
mod snap;
mod transform;
mod types;

pub use align::{align, AlignEdge};
pub use distribute::{distribute, DistributeAxis};
pub use error::{Applied, EngineResult, Warning};
pub use snap::snap_to_grid;
pub use transform::{copy_positions, nudge_fields, paste_positions, transform, Transform};
pub use types::{
    CopiedPositions, FieldPosition, FieldPositionMap, NudgeDirection, Selection,
    DEFAULT_NUDGE_STEP,
};
