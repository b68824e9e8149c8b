//! Copy/paste, offset/scale transforms, and keyboard nudging

use log::warn;

use super::error::{Applied, EngineResult, Warning};
use super::types::{
    CopiedPositions, FieldPosition, FieldPositionMap, NudgeDirection, Selection,
};

/// Offset and/or scale applied to a selection
///
/// Offsets are percentage points added to `left`/`top`; `scale` multiplies
/// the position's distance from the form origin. Offset is applied before
/// scale, and every result is clamped to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: Option<f64>,
}

impl Transform {
    pub fn offset(x: f64, y: f64) -> Self {
        Self {
            offset_x: x,
            offset_y: y,
            scale: None,
        }
    }

    pub fn scaled(factor: f64) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: Some(factor),
        }
    }

    pub fn with_scale(mut self, factor: f64) -> Self {
        self.scale = Some(factor);
        self
    }

    fn apply(&self, p: FieldPosition) -> FieldPosition {
        let factor = self.scale.unwrap_or(1.0);
        FieldPosition::new(
            (p.top + self.offset_y) * factor,
            (p.left + self.offset_x) * factor,
        )
        .clamped()
    }
}

/// Capture the selection's current positions, in selection order.
///
/// Pure read; selected fields without a recorded position are omitted.
pub fn copy_positions(positions: &FieldPositionMap, selection: &Selection) -> CopiedPositions {
    let entries = selection
        .iter()
        .filter_map(|name| positions.get(name).map(|p| (name.to_string(), *p)))
        .collect();
    CopiedPositions::from_entries(entries)
}

/// Overwrite the selected fields' positions from a snapshot.
///
/// Matching is positional: entry `i` of the snapshot lands on field `i` of
/// the selection, up to the shorter of the two; a size mismatch applies the
/// overlap and warns. A missing or empty snapshot blocks the operation.
pub fn paste_positions(
    positions: &FieldPositionMap,
    selection: &Selection,
    clipboard: Option<&CopiedPositions>,
) -> EngineResult {
    let clipboard = match clipboard {
        Some(c) if !c.is_empty() => c,
        _ => return Err(Warning::EmptyClipboard),
    };

    let applied_count = selection.len().min(clipboard.len());
    let mut warnings = Vec::new();
    if selection.len() != clipboard.len() {
        let w = Warning::PartialPaste {
            copied: clipboard.len(),
            selected: selection.len(),
            applied: applied_count,
        };
        warn!("{}", w);
        warnings.push(w);
    }

    let mut next = positions.clone();
    for (i, name) in selection.iter().take(applied_count).enumerate() {
        if let Some(p) = clipboard.position_at(i) {
            next.insert(name, p);
        }
    }

    Ok(Applied::with_warnings(next, warnings))
}

/// Apply an offset/scale transform to every selected field.
///
/// Total over the selection: an empty selection is a no-op and fields
/// without a recorded position are skipped with a warning.
pub fn transform(
    positions: &FieldPositionMap,
    selection: &Selection,
    transform: &Transform,
) -> EngineResult {
    let mut warnings = Vec::new();
    let mut next = positions.clone();
    for name in selection.iter() {
        match positions.get(name) {
            Some(p) => next.insert(name, transform.apply(*p)),
            None => warnings.push(Warning::unknown(name)),
        }
    }
    Ok(Applied::with_warnings(next, warnings))
}

/// Nudge the selection (or the active field when the selection is empty)
/// by `step` percentage points in `direction`. Total; results are clamped.
pub fn nudge_fields(
    positions: &FieldPositionMap,
    selection: &Selection,
    active: Option<&str>,
    direction: NudgeDirection,
    step: f64,
) -> FieldPositionMap {
    let mut next = positions.clone();
    for name in selection.targets(active) {
        if let Some(p) = positions.get(name) {
            next.insert(name, p.nudged(direction, step));
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (FieldPositionMap, Selection) {
        let positions = FieldPositionMap::from_iter([
            ("a", FieldPosition::new(10.0, 10.0)),
            ("b", FieldPosition::new(20.0, 30.0)),
            ("c", FieldPosition::new(15.0, 50.0)),
        ]);
        (positions, Selection::from_iter(["a", "b", "c"]))
    }

    #[test]
    fn test_copy_paste_round_trip() {
        let (positions, selection) = sample();
        let snapshot = copy_positions(&positions, &selection);
        let applied = paste_positions(&positions, &selection, Some(&snapshot)).unwrap();
        assert_eq!(applied.positions, positions);
        assert!(applied.warnings.is_empty());
    }

    #[test]
    fn test_paste_without_copy_is_blocked() {
        let (positions, selection) = sample();
        let err = paste_positions(&positions, &selection, None).unwrap_err();
        assert_eq!(err, Warning::EmptyClipboard);
    }

    #[test]
    fn test_paste_empty_snapshot_is_blocked() {
        let (positions, selection) = sample();
        let empty = copy_positions(&positions, &Selection::new());
        let err = paste_positions(&positions, &selection, Some(&empty)).unwrap_err();
        assert_eq!(err, Warning::EmptyClipboard);
    }

    #[test]
    fn test_paste_partial_warns_and_applies_overlap() {
        let (positions, selection) = sample();
        let snapshot = copy_positions(&positions, &selection);
        let smaller = Selection::from_iter(["b", "c"]);
        let applied = paste_positions(&positions, &smaller, Some(&snapshot)).unwrap();
        assert_eq!(
            applied.warnings,
            vec![Warning::PartialPaste {
                copied: 3,
                selected: 2,
                applied: 2,
            }]
        );
        // b takes the first snapshot entry (a's position), c the second
        assert_eq!(
            applied.positions.get("b").unwrap(),
            &FieldPosition::new(10.0, 10.0)
        );
        assert_eq!(
            applied.positions.get("c").unwrap(),
            &FieldPosition::new(20.0, 30.0)
        );
        assert_eq!(
            applied.positions.get("a").unwrap(),
            &FieldPosition::new(10.0, 10.0)
        );
    }

    #[test]
    fn test_transform_offset() {
        let positions = FieldPositionMap::from_iter([("a", FieldPosition::new(50.0, 50.0))]);
        let selection = Selection::from_iter(["a"]);
        let applied = transform(&positions, &selection, &Transform::offset(5.0, -5.0)).unwrap();
        assert_eq!(
            applied.positions.get("a").unwrap(),
            &FieldPosition::new(45.0, 55.0)
        );
    }

    #[test]
    fn test_transform_offset_then_scale() {
        let positions = FieldPositionMap::from_iter([("a", FieldPosition::new(10.0, 20.0))]);
        let selection = Selection::from_iter(["a"]);
        let t = Transform::offset(10.0, 10.0).with_scale(2.0);
        let applied = transform(&positions, &selection, &t).unwrap();
        // (20 + 10) * 2 = 60, (10 + 10) * 2 = 40
        assert_eq!(
            applied.positions.get("a").unwrap(),
            &FieldPosition::new(40.0, 60.0)
        );
    }

    #[test]
    fn test_transform_clamps_result() {
        let positions = FieldPositionMap::from_iter([("a", FieldPosition::new(90.0, 5.0))]);
        let selection = Selection::from_iter(["a"]);
        let applied =
            transform(&positions, &selection, &Transform::offset(-20.0, 30.0)).unwrap();
        assert_eq!(
            applied.positions.get("a").unwrap(),
            &FieldPosition::new(100.0, 0.0)
        );
    }

    #[test]
    fn test_transform_scale_from_origin() {
        let positions = FieldPositionMap::from_iter([("a", FieldPosition::new(30.0, 40.0))]);
        let selection = Selection::from_iter(["a"]);
        let applied = transform(&positions, &selection, &Transform::scaled(0.5)).unwrap();
        assert_eq!(
            applied.positions.get("a").unwrap(),
            &FieldPosition::new(15.0, 20.0)
        );
    }

    #[test]
    fn test_transform_empty_selection_is_noop() {
        let (positions, _) = sample();
        let applied =
            transform(&positions, &Selection::new(), &Transform::offset(5.0, 5.0)).unwrap();
        assert_eq!(applied.positions, positions);
        assert!(applied.warnings.is_empty());
    }

    #[test]
    fn test_transform_unknown_field_warns() {
        let (positions, _) = sample();
        let selection = Selection::from_iter(["a", "ghost"]);
        let applied =
            transform(&positions, &selection, &Transform::offset(1.0, 1.0)).unwrap();
        assert_eq!(applied.warnings, vec![Warning::unknown("ghost")]);
    }

    #[test]
    fn test_nudge_selection() {
        let (positions, selection) = sample();
        let next = nudge_fields(&positions, &selection, None, NudgeDirection::Down, 0.5);
        assert_eq!(next.get("a").unwrap().top, 10.5);
        assert_eq!(next.get("b").unwrap().top, 20.5);
    }

    #[test]
    fn test_nudge_active_fallback() {
        let (positions, _) = sample();
        let next = nudge_fields(
            &positions,
            &Selection::new(),
            Some("a"),
            NudgeDirection::Right,
            2.0,
        );
        assert_eq!(next.get("a").unwrap().left, 12.0);
        assert_eq!(next.get("b").unwrap().left, 30.0);
    }
}
