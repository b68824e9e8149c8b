//! Relative group encoder: convert absolute positions to anchor-relative
//! offsets and reapply them onto a new anchor.

use log::warn;

use crate::geometry::{Applied, EngineResult, FieldPosition, FieldPositionMap, Selection, Warning};

use super::{FieldGroup, GroupField};

/// Result of encoding a selection into anchor-relative offsets
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    pub fields: Vec<GroupField>,
    pub warnings: Vec<Warning>,
}

/// Encode the selection as offsets from its first field (the anchor).
///
/// The anchor is recorded at `(0, 0)`; every other field as its distance
/// from the anchor. The anchor must have a recorded position; members
/// without one are skipped with a warning.
pub fn relative_offsets(
    selection: &Selection,
    positions: &FieldPositionMap,
) -> Result<Encoded, Warning> {
    let anchor_name = selection
        .iter()
        .next()
        .ok_or(Warning::too_few("group capture", 1, 0))?;
    let anchor = positions
        .get(anchor_name)
        .copied()
        .ok_or_else(|| Warning::unknown(anchor_name))?;

    let mut fields = Vec::with_capacity(selection.len());
    let mut warnings = Vec::new();
    for name in selection.iter() {
        match positions.get(name) {
            Some(p) => fields.push(GroupField::new(
                name,
                p.top - anchor.top,
                p.left - anchor.left,
            )),
            None => warnings.push(Warning::unknown(name)),
        }
    }

    Ok(Encoded { fields, warnings })
}

/// Reapply a group onto a target field set.
///
/// The first target is the new anchor: entry `i` of the group lands on
/// target `i` at `anchor + offset`. Surplus group entries are skipped with
/// a warning; surplus targets are left unmodified. The anchor target must
/// have a recorded position.
pub fn apply_group(
    group: &FieldGroup,
    targets: &Selection,
    positions: &FieldPositionMap,
) -> EngineResult {
    let anchor_name = targets
        .iter()
        .next()
        .ok_or(Warning::too_few("apply group", 1, 0))?;
    let anchor = positions
        .get(anchor_name)
        .copied()
        .ok_or_else(|| Warning::unknown(anchor_name))?;

    let mut warnings = Vec::new();
    if group.fields.len() > targets.len() {
        let w = Warning::GroupTruncated {
            group_fields: group.fields.len(),
            targets: targets.len(),
        };
        warn!("applying group '{}': {}", group.name, w);
        warnings.push(w);
    }

    let mut next = positions.clone();
    for (entry, target) in group.fields.iter().zip(targets.iter()) {
        let placed = FieldPosition::new(
            anchor.top + entry.relative_top,
            anchor.left + entry.relative_left,
        );
        next.insert(target, placed);
    }

    Ok(Applied::with_warnings(next, warnings))
}
