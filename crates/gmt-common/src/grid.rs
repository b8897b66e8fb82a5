//! Labeled grid arrays returned from GMT.

use crate::{GmtError, GmtResult};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Grid node registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Registration {
    /// Nodes sit on cell corners.
    Gridline,
    /// Nodes sit at cell centers.
    Pixel,
}

impl Registration {
    /// Remote file-name suffix (`_g` / `_p`).
    pub fn suffix(&self) -> &'static str {
        match self {
            Registration::Gridline => "_g",
            Registration::Pixel => "_p",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Registration::Gridline => "gridline",
            Registration::Pixel => "pixel",
        }
    }

    /// Decode the numeric code reported by `grdinfo` (0 = gridline, 1 = pixel).
    pub fn from_code(code: i64) -> GmtResult<Self> {
        match code {
            0 => Ok(Registration::Gridline),
            1 => Ok(Registration::Pixel),
            other => Err(GmtError::invalid_output(format!(
                "unknown registration code {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Registration {
    type Err = GmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gridline" => Ok(Registration::Gridline),
            "pixel" => Ok(Registration::Pixel),
            other => Err(GmtError::invalid_input(format!(
                "Invalid grid registration: '{}', should be either 'pixel', 'gridline' or None. \
                 Default is None, where a pixel-registered grid is returned unless only the \
                 gridline-registered grid is available.",
                other
            ))),
        }
    }
}

/// Coordinate system of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    Cartesian,
    Geographic,
}

impl GridType {
    /// Decode the numeric code reported by `grdinfo` (0 = Cartesian, 1 = geographic).
    pub fn from_code(code: i64) -> GmtResult<Self> {
        match code {
            0 => Ok(GridType::Cartesian),
            1 => Ok(GridType::Geographic),
            other => Err(GmtError::invalid_output(format!(
                "unknown grid type code {}",
                other
            ))),
        }
    }

    /// Dimension names in (y, x) order.
    pub fn dims(&self) -> [&'static str; 2] {
        match self {
            GridType::Cartesian => ["y", "x"],
            GridType::Geographic => ["lat", "lon"],
        }
    }
}

/// Grid header as reported by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridHeader {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub x_inc: f64,
    pub y_inc: f64,
    pub n_columns: usize,
    pub n_rows: usize,
    pub registration: Registration,
    pub grid_type: GridType,
}

impl GridHeader {
    /// Node coordinates along x, west to east.
    pub fn x_coords(&self) -> Vec<f64> {
        node_coords(self.west, self.x_inc, self.n_columns, self.registration)
    }

    /// Node coordinates along y, south to north.
    pub fn y_coords(&self) -> Vec<f64> {
        node_coords(self.south, self.y_inc, self.n_rows, self.registration)
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.n_columns * self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_columns == 0 || self.n_rows == 0
    }
}

fn node_coords(min: f64, inc: f64, n: usize, registration: Registration) -> Vec<f64> {
    let offset = match registration {
        Registration::Gridline => 0.0,
        Registration::Pixel => 0.5,
    };
    (0..n).map(|i| min + (i as f64 + offset) * inc).collect()
}

/// A 2-D grid with named dimensions, coordinates and attributes.
///
/// Rows run along the first dimension (`lat`/`y`, ascending) and columns
/// along the second (`lon`/`x`, ascending). Missing nodes are NaN.
#[derive(Debug, Clone)]
pub struct GridArray {
    pub name: String,
    pub dims: [String; 2],
    pub y: Vec<f64>,
    pub x: Vec<f64>,
    pub values: Array2<f32>,
    pub attrs: BTreeMap<String, String>,
    pub registration: Registration,
    pub grid_type: GridType,
}

impl GridArray {
    /// Assemble a grid from its header and values in south-to-north,
    /// west-to-east row-major order.
    pub fn from_header(header: &GridHeader, values: Vec<f32>) -> GmtResult<Self> {
        let shape = (header.n_rows, header.n_columns);
        if values.len() != header.len() {
            return Err(GmtError::invalid_output(format!(
                "expected {} grid values ({} rows x {} columns), got {}",
                header.len(),
                header.n_rows,
                header.n_columns,
                values.len()
            )));
        }
        let values = Array2::from_shape_vec(shape, values)
            .map_err(|e| GmtError::invalid_output(e.to_string()))?;
        let dims = header.grid_type.dims();

        Ok(Self {
            name: String::new(),
            dims: [dims[0].to_string(), dims[1].to_string()],
            y: header.y_coords(),
            x: header.x_coords(),
            values,
            attrs: BTreeMap::new(),
            registration: header.registration,
            grid_type: header.grid_type,
        })
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Value at a row/column index.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.values.get((row, col)).copied()
    }

    /// Value at the node nearest to (x, y), or None outside the coordinate span.
    pub fn sel_nearest(&self, x: f64, y: f64) -> Option<f32> {
        let col = nearest_index(&self.x, x)?;
        let row = nearest_index(&self.y, y)?;
        self.get(row, col)
    }

    /// Minimum and maximum of the non-NaN values.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.values
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }
}

fn nearest_index(coords: &[f64], target: f64) -> Option<usize> {
    let (first, last) = (*coords.first()?, *coords.last()?);
    let half = if coords.len() > 1 {
        (coords[1] - coords[0]).abs() / 2.0
    } else {
        0.0
    };
    if target < first.min(last) - half || target > first.max(last) + half {
        return None;
    }
    coords
        .iter()
        .enumerate()
        .min_by(|a, b| {
            (a.1 - target)
                .abs()
                .partial_cmp(&(b.1 - target).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}
