//! Grid snapper: round a set of fields onto a percentage grid

use super::types::{FieldPositionMap, Selection};

/// Snap the selection (or the single active field when the selection is
/// empty) to the nearest multiple of `grid` on both axes.
///
/// Total: fields without a recorded position are skipped, everything else
/// passes through [`crate::FieldPosition::snapped`]. Idempotent.
pub fn snap_to_grid(
    positions: &FieldPositionMap,
    selection: &Selection,
    active: Option<&str>,
    grid: f64,
) -> FieldPositionMap {
    let mut next = positions.clone();
    for name in selection.targets(active) {
        if let Some(p) = positions.get(name) {
            next.insert(name, p.snapped(grid));
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::types::FieldPosition;

    #[test]
    fn test_snap_selection() {
        let positions = FieldPositionMap::from_iter([
            ("a", FieldPosition::new(7.0, 13.0)),
            ("b", FieldPosition::new(22.4, 47.6)),
        ]);
        let selection = Selection::from_iter(["a", "b"]);
        let snapped = snap_to_grid(&positions, &selection, None, 5.0);
        assert_eq!(snapped.get("a"), Some(&FieldPosition::new(5.0, 15.0)));
        assert_eq!(snapped.get("b"), Some(&FieldPosition::new(20.0, 50.0)));
    }

    #[test]
    fn test_snap_active_field_when_selection_empty() {
        let positions = FieldPositionMap::from_iter([
            ("a", FieldPosition::new(7.0, 13.0)),
            ("b", FieldPosition::new(22.4, 47.6)),
        ]);
        let snapped = snap_to_grid(&positions, &Selection::new(), Some("a"), 5.0);
        assert_eq!(snapped.get("a"), Some(&FieldPosition::new(5.0, 15.0)));
        // b was not a target
        assert_eq!(snapped.get("b"), Some(&FieldPosition::new(22.4, 47.6)));
    }

    #[test]
    fn test_snap_idempotent_over_map() {
        let positions = FieldPositionMap::from_iter([("a", FieldPosition::new(7.0, 13.0))]);
        let selection = Selection::from_iter(["a"]);
        let once = snap_to_grid(&positions, &selection, None, 5.0);
        let twice = snap_to_grid(&once, &selection, None, 5.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_snap_unknown_field_is_skipped() {
        let positions = FieldPositionMap::from_iter([("a", FieldPosition::new(7.0, 13.0))]);
        let selection = Selection::from_iter(["ghost"]);
        let snapped = snap_to_grid(&positions, &selection, None, 5.0);
        assert_eq!(snapped, positions);
    }
}
