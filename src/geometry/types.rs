//! Core types for the position engine

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default keyboard nudge distance, in percentage points
pub const DEFAULT_NUDGE_STEP: f64 = 0.5;

/// Direction for a keyboard nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl std::str::FromStr for NudgeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(NudgeDirection::Up),
            "down" => Ok(NudgeDirection::Down),
            "left" => Ok(NudgeDirection::Left),
            "right" => Ok(NudgeDirection::Right),
            other => Err(format!(
                "unknown direction '{}' (expected up, down, left or right)",
                other
            )),
        }
    }
}

/// An overlay position expressed as percentages of the page surface
///
/// Both axes are semantically constrained to `[0, 100]`; every mutating
/// operation in this crate runs its result through [`FieldPosition::clamped`]
/// so a field can never land off the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPosition {
    /// Distance from the top edge, percent of page height
    pub top: f64,
    /// Distance from the left edge, percent of page width
    pub left: f64,
}

impl FieldPosition {
    /// Minimum value on either axis
    pub const MIN: f64 = 0.0;
    /// Maximum value on either axis
    pub const MAX: f64 = 100.0;

    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Constrain both axes to `[0, 100]`. Idempotent.
    pub fn clamped(self) -> Self {
        Self {
            top: self.top.clamp(Self::MIN, Self::MAX),
            left: self.left.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Round both axes to the nearest multiple of `grid`, then clamp.
    ///
    /// A non-positive grid size leaves the position unchanged (apart from
    /// clamping). Idempotent for any grid that divides 100.
    pub fn snapped(self, grid: f64) -> Self {
        if grid <= 0.0 {
            return self.clamped();
        }
        Self {
            top: (self.top / grid).round() * grid,
            left: (self.left / grid).round() * grid,
        }
        .clamped()
    }

    /// Move by `step` percentage points in `direction`, then clamp.
    pub fn nudged(self, direction: NudgeDirection, step: f64) -> Self {
        let mut next = self;
        match direction {
            NudgeDirection::Up => next.top -= step,
            NudgeDirection::Down => next.top += step,
            NudgeDirection::Left => next.left -= step,
            NudgeDirection::Right => next.left += step,
        }
        next.clamped()
    }
}

/// The single source of truth for overlay placement: field name to position
///
/// Insertion order is irrelevant; ordered operations take their order from
/// the [`Selection`]. Backed by a `BTreeMap` so serialized output is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPositionMap(BTreeMap<String, FieldPosition>);

impl FieldPositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position for a field, clamping it to the page
    pub fn insert(&mut self, name: impl Into<String>, position: FieldPosition) {
        self.0.insert(name.into(), position.clamped());
    }

    pub fn get(&self, name: &str) -> Option<&FieldPosition> {
        self.0.get(name)
    }

    /// Position for `name`, or `fallback` (typically the field's default
    /// overlay position from the form catalog) if it was never recorded
    pub fn get_or(&self, name: &str, fallback: FieldPosition) -> FieldPosition {
        self.0.get(name).copied().unwrap_or(fallback)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldPosition> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPosition)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, FieldPosition)> for FieldPositionMap {
    fn from_iter<I: IntoIterator<Item = (S, FieldPosition)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, position) in iter {
            map.insert(name, position);
        }
        map
    }
}

/// Ordered set of field names selected for bulk operations
///
/// A name appears at most once; order is the order fields were selected in,
/// which drives positional paste matching and distribution tie-breaking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single field (plain click)
    pub fn select(&mut self, name: impl Into<String>) {
        self.0.clear();
        self.0.push(name.into());
    }

    /// Toggle membership of a field (modifier click)
    pub fn toggle(&mut self, name: impl Into<String>) {
        let name = name.into();
        if let Some(idx) = self.0.iter().position(|n| *n == name) {
            self.0.remove(idx);
        } else {
            self.0.push(name);
        }
    }

    /// Replace the selection with every given field, preserving order and
    /// dropping duplicates
    pub fn select_all<S: Into<String>>(&mut self, names: impl IntoIterator<Item = S>) {
        self.0.clear();
        for name in names {
            let name = name.into();
            if !self.0.contains(&name) {
                self.0.push(name);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|n| n.as_str())
    }

    /// Fields a selection-scoped operation should act on: the selection
    /// itself, or the single active field when nothing is selected
    pub fn targets<'a>(&'a self, active: Option<&'a str>) -> Vec<&'a str> {
        if self.0.is_empty() {
            active.into_iter().collect()
        } else {
            self.iter().collect()
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        selection.select_all(iter);
        selection
    }
}

/// Snapshot of the selection's positions at the moment of copy
///
/// Entries are kept in selection order so paste can match positionally when
/// the target selection differs in size. One snapshot at a time; the host
/// replaces it wholesale on the next copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CopiedPositions {
    entries: Vec<(String, FieldPosition)>,
}

impl CopiedPositions {
    pub(crate) fn from_entries(entries: Vec<(String, FieldPosition)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPosition)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn position_at(&self, index: usize) -> Option<FieldPosition> {
        self.entries.get(index).map(|(_, p)| *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pulls_into_range() {
        let p = FieldPosition::new(-3.0, 117.2).clamped();
        assert_eq!(p, FieldPosition::new(0.0, 100.0));
    }

    #[test]
    fn test_clamp_idempotent() {
        for &(top, left) in &[(-10.0, 50.0), (0.0, 0.0), (100.0, 100.0), (55.5, 200.0)] {
            let once = FieldPosition::new(top, left).clamped();
            assert_eq!(once.clamped(), once);
            assert!((0.0..=100.0).contains(&once.top));
            assert!((0.0..=100.0).contains(&once.left));
        }
    }

    #[test]
    fn test_snap_rounds_to_nearest_multiple() {
        let p = FieldPosition::new(7.0, 13.0).snapped(5.0);
        assert_eq!(p, FieldPosition::new(5.0, 15.0));
    }

    #[test]
    fn test_snap_idempotent() {
        let once = FieldPosition::new(42.3, 87.6).snapped(5.0);
        assert_eq!(once.snapped(5.0), once);
    }

    #[test]
    fn test_snap_non_positive_grid_only_clamps() {
        let p = FieldPosition::new(101.0, 33.3);
        assert_eq!(p.snapped(0.0), FieldPosition::new(100.0, 33.3));
        assert_eq!(p.snapped(-2.0), FieldPosition::new(100.0, 33.3));
    }

    #[test]
    fn test_nudge_directions() {
        let p = FieldPosition::new(50.0, 50.0);
        assert_eq!(p.nudged(NudgeDirection::Up, 0.5).top, 49.5);
        assert_eq!(p.nudged(NudgeDirection::Down, 0.5).top, 50.5);
        assert_eq!(p.nudged(NudgeDirection::Left, 0.5).left, 49.5);
        assert_eq!(p.nudged(NudgeDirection::Right, 0.5).left, 50.5);
    }

    #[test]
    fn test_nudge_clamps_at_page_edge() {
        let p = FieldPosition::new(0.2, 99.9);
        assert_eq!(p.nudged(NudgeDirection::Up, 0.5).top, 0.0);
        assert_eq!(p.nudged(NudgeDirection::Right, 0.5).left, 100.0);
    }

    #[test]
    fn test_map_insert_clamps() {
        let mut map = FieldPositionMap::new();
        map.insert("case_number", FieldPosition::new(140.0, -2.0));
        assert_eq!(map.get("case_number"), Some(&FieldPosition::new(100.0, 0.0)));
    }

    #[test]
    fn test_map_get_or_falls_back() {
        let map = FieldPositionMap::new();
        let fallback = FieldPosition::new(10.0, 20.0);
        assert_eq!(map.get_or("petitioner", fallback), fallback);
    }

    #[test]
    fn test_selection_toggle() {
        let mut sel = Selection::new();
        sel.toggle("a");
        sel.toggle("b");
        sel.toggle("a");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_selection_select_replaces() {
        let mut sel = Selection::from_iter(["a", "b", "c"]);
        sel.select("d");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["d"]);
    }

    #[test]
    fn test_selection_deduplicates() {
        let sel = Selection::from_iter(["a", "b", "a", "c", "b"]);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_selection_targets_falls_back_to_active() {
        let empty = Selection::new();
        assert_eq!(empty.targets(Some("facts")), vec!["facts"]);
        assert!(empty.targets(None).is_empty());

        let sel = Selection::from_iter(["a", "b"]);
        assert_eq!(sel.targets(Some("facts")), vec!["a", "b"]);
    }
}
