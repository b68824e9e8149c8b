//! Alignment engine: snap a selection to a shared edge or center line

use super::error::{Applied, EngineResult, Warning};
use super::types::{FieldPosition, FieldPositionMap, Selection};

/// Edge or center line the selection is aligned on
///
/// `Left`/`Center`/`Right` operate on the horizontal axis (`left`);
/// `Top`/`Middle`/`Bottom` on the vertical axis (`top`). The orthogonal
/// axis is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignEdge {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl AlignEdge {
    fn is_horizontal(self) -> bool {
        matches!(self, AlignEdge::Left | AlignEdge::Center | AlignEdge::Right)
    }
}

impl std::str::FromStr for AlignEdge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(AlignEdge::Left),
            "center" => Ok(AlignEdge::Center),
            "right" => Ok(AlignEdge::Right),
            "top" => Ok(AlignEdge::Top),
            "middle" => Ok(AlignEdge::Middle),
            "bottom" => Ok(AlignEdge::Bottom),
            other => Err(format!(
                "unknown alignment edge '{}' (expected left, center, right, top, middle or bottom)",
                other
            )),
        }
    }
}

/// Align every selected field on the given edge.
///
/// The target coordinate is the minimum (`Left`/`Top`), maximum
/// (`Right`/`Bottom`), or midpoint of minimum and maximum
/// (`Center`/`Middle`) over the selection. Requires at least two selected
/// fields with recorded positions; otherwise the map is left untouched.
/// Selected fields without a recorded position are skipped with a warning.
pub fn align(positions: &FieldPositionMap, selection: &Selection, edge: AlignEdge) -> EngineResult {
    if selection.len() < 2 {
        return Err(Warning::too_few("align", 2, selection.len()));
    }

    let mut warnings = Vec::new();
    let mut entries: Vec<(&str, FieldPosition)> = Vec::with_capacity(selection.len());
    for name in selection.iter() {
        match positions.get(name) {
            Some(p) => entries.push((name, *p)),
            None => warnings.push(Warning::unknown(name)),
        }
    }
    if entries.len() < 2 {
        return Err(Warning::too_few("align", 2, entries.len()));
    }

    let coord = |p: &FieldPosition| if edge.is_horizontal() { p.left } else { p.top };
    let min = entries
        .iter()
        .map(|(_, p)| coord(p))
        .fold(f64::INFINITY, f64::min);
    let max = entries
        .iter()
        .map(|(_, p)| coord(p))
        .fold(f64::NEG_INFINITY, f64::max);

    let target = match edge {
        AlignEdge::Left | AlignEdge::Top => min,
        AlignEdge::Right | AlignEdge::Bottom => max,
        AlignEdge::Center | AlignEdge::Middle => (min + max) / 2.0,
    };

    let mut next = positions.clone();
    for (name, p) in entries {
        let aligned = if edge.is_horizontal() {
            FieldPosition::new(p.top, target)
        } else {
            FieldPosition::new(target, p.left)
        };
        next.insert(name, aligned);
    }

    Ok(Applied::with_warnings(next, warnings))
}
