//! Distribution engine: even spacing between the extremes of a selection

use super::error::{Applied, EngineResult, Warning};
use super::types::{FieldPosition, FieldPositionMap, Selection};

/// Axis along which fields are redistributed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

impl std::str::FromStr for DistributeAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(DistributeAxis::Horizontal),
            "vertical" => Ok(DistributeAxis::Vertical),
            other => Err(format!(
                "unknown axis '{}' (expected horizontal or vertical)",
                other
            )),
        }
    }
}

/// Space the selected fields evenly along one axis.
///
/// Fields are sorted by their coordinate on `axis` (stable, so ties keep
/// selection order and repeated calls are deterministic). The two extreme
/// fields stay where they are; interior fields land at
/// `min + i * (max - min) / (n - 1)`. The orthogonal axis is untouched.
/// Requires at least three selected fields with recorded positions;
/// all-equal coordinates produce zero spacing, a valid idempotent result.
pub fn distribute(
    positions: &FieldPositionMap,
    selection: &Selection,
    axis: DistributeAxis,
) -> EngineResult {
    if selection.len() < 3 {
        return Err(Warning::too_few("distribute", 3, selection.len()));
    }

    let mut warnings = Vec::new();
    let mut entries: Vec<(&str, FieldPosition)> = Vec::with_capacity(selection.len());
    for name in selection.iter() {
        match positions.get(name) {
            Some(p) => entries.push((name, *p)),
            None => warnings.push(Warning::unknown(name)),
        }
    }
    if entries.len() < 3 {
        return Err(Warning::too_few("distribute", 3, entries.len()));
    }

    let coord = |p: &FieldPosition| match axis {
        DistributeAxis::Horizontal => p.left,
        DistributeAxis::Vertical => p.top,
    };

    // Vec::sort_by is stable: equal coordinates preserve selection order.
    entries.sort_by(|a, b| coord(&a.1).total_cmp(&coord(&b.1)));

    let min = coord(&entries[0].1);
    let max = coord(&entries[entries.len() - 1].1);
    let spacing = (max - min) / (entries.len() - 1) as f64;

    let mut next = positions.clone();
    for (i, (name, p)) in entries.iter().enumerate() {
        let value = min + i as f64 * spacing;
        let placed = match axis {
            DistributeAxis::Horizontal => FieldPosition::new(p.top, value),
            DistributeAxis::Vertical => FieldPosition::new(value, p.left),
        };
        next.insert(*name, placed);
    }

    Ok(Applied::with_warnings(next, warnings))
}
