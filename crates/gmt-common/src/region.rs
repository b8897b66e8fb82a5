//! Region types and parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The area of interest passed to GMT via `-R`.
///
/// Either explicit numeric bounds in `xmin/xmax/ymin/ymax` order, or any
/// other `-R` text, kept verbatim for GMT to interpret (region codes,
/// `10W/20E/5S/15N`, `dd:mm` coordinates, `+r` and `+u` modifiers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Region {
    Bounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
    Code(String),
}

impl Region {
    /// Create a region from explicit bounds.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Region::Bounds {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Build a region from a `[xmin, xmax, ymin, ymax]` sequence.
    pub fn from_sequence(values: &[f64]) -> Result<Self, RegionParseError> {
        match values {
            [xmin, xmax, ymin, ymax] => Ok(Self::new(*xmin, *xmax, *ymin, *ymax)),
            _ => Err(RegionParseError::WrongLength(values.len())),
        }
    }

    /// Width of explicit bounds in coordinate units.
    pub fn width(&self) -> Option<f64> {
        match self {
            Region::Bounds { xmin, xmax, .. } => Some(xmax - xmin),
            Region::Code(_) => None,
        }
    }

    /// Height of explicit bounds in coordinate units.
    pub fn height(&self) -> Option<f64> {
        match self {
            Region::Bounds { ymin, ymax, .. } => Some(ymax - ymin),
            Region::Code(_) => None,
        }
    }

    /// Render in the form GMT expects after `-R`.
    pub fn to_gmt_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Bounds {
                xmin,
                xmax,
                ymin,
                ymax,
            } => write!(f, "{}/{}/{}/{}", xmin, xmax, ymin, ymax),
            Region::Code(code) => f.write_str(code),
        }
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RegionParseError::Empty);
        }

        let values: Vec<f64> = s
            .split('/')
            .map_while(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect();
        match values.as_slice() {
            [xmin, xmax, ymin, ymax] if s.split('/').count() == 4 => {
                Ok(Self::new(*xmin, *xmax, *ymin, *ymax))
            }
            _ => Ok(Region::Code(s.to_string())),
        }
    }
}

impl From<[f64; 4]> for Region {
    fn from(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegionParseError {
    #[error("Empty region")]
    Empty,

    #[error("Region needs 4 values [xmin, xmax, ymin, ymax], got {0}")]
    WrongLength(usize),
}
