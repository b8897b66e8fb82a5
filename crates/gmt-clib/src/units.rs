//! Plot length units.

use gmt_common::GmtError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CM_PER_INCH: f64 = 2.54;
const POINTS_PER_INCH: f64 = 72.0;

/// Length unit for plot offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Centimeter,
    Inch,
    Point,
}

impl LengthUnit {
    /// Unit for a suffix letter (`c`, `i`, `p`).
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            'c' => Some(LengthUnit::Centimeter),
            'i' => Some(LengthUnit::Inch),
            'p' => Some(LengthUnit::Point),
            _ => None,
        }
    }

    pub fn suffix(&self) -> char {
        match self {
            LengthUnit::Centimeter => 'c',
            LengthUnit::Inch => 'i',
            LengthUnit::Point => 'p',
        }
    }

    /// Value of GMT's `PROJ_LENGTH_UNIT` setting for this unit.
    pub fn gmt_name(&self) -> &'static str {
        match self {
            LengthUnit::Centimeter => "cm",
            LengthUnit::Inch => "inch",
            LengthUnit::Point => "point",
        }
    }

    pub fn to_inches(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Centimeter => value / CM_PER_INCH,
            LengthUnit::Inch => value,
            LengthUnit::Point => value / POINTS_PER_INCH,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for LengthUnit {
    type Err = GmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" | "cm" | "centimeter" => Ok(LengthUnit::Centimeter),
            "i" | "inch" => Ok(LengthUnit::Inch),
            "p" | "point" => Ok(LengthUnit::Point),
            other => Err(GmtError::Config(format!("unknown length unit '{}'", other))),
        }
    }
}

/// Resolve a relative `-X`/`-Y` shift to inches.
///
/// Returns None for forms that depend on engine state: absolute (`a`),
/// centered (`c`), fixed (`f`) and plot-dimension expressions like `w+2c`.
pub fn parse_shift(raw: &str, default_unit: LengthUnit) -> Option<f64> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('r').unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }

    let last = raw.chars().last()?;
    let (number, unit) = match LengthUnit::from_suffix(last) {
        Some(unit) => (&raw[..raw.len() - 1], unit),
        None => (raw, default_unit),
    };
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(unit.to_inches(value))
}
