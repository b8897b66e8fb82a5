//! JSON summary of a loaded grid.

use std::collections::BTreeMap;

use gmt_common::{GridArray, Registration};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSummary {
    pub name: String,
    pub dims: [String; 2],
    pub shape: [usize; 2],
    pub registration: Registration,
    /// `[west, east]` of the node coordinates
    pub x_range: Option<[f64; 2]>,
    /// `[south, north]` of the node coordinates
    pub y_range: Option<[f64; 2]>,
    /// `[min, max]` ignoring NaN nodes
    pub value_range: Option<[f32; 2]>,
    pub nan_count: usize,
    pub attrs: BTreeMap<String, String>,
}

impl GridSummary {
    pub fn from_grid(grid: &GridArray) -> Self {
        let (rows, cols) = grid.shape();
        Self {
            name: grid.name.clone(),
            dims: grid.dims.clone(),
            shape: [rows, cols],
            registration: grid.registration,
            x_range: span(&grid.x),
            y_range: span(&grid.y),
            value_range: grid.value_range().map(|(lo, hi)| [lo, hi]),
            nan_count: grid.values.iter().filter(|v| v.is_nan()).count(),
            attrs: grid.attrs.clone(),
        }
    }
}

fn span(coords: &[f64]) -> Option<[f64; 2]> {
    Some([*coords.first()?, *coords.last()?])
}
