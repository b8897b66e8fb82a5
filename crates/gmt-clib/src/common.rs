//! Tracking of GMT common options (`-R`, `-X`, `-Y`, ...) seen in a session.

use crate::args::split_args;
use crate::units::{parse_shift, LengthUnit};
use gmt_common::{GmtError, GmtResult};
use std::collections::HashMap;

/// Option letters GMT reserves for common options.
pub const COMMON_OPTIONS: &str = "BJRUVXYabdefghijlnopqrstx";

/// Current value of a common option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommonValue {
    /// Not given in the last module call.
    Unset,
    /// Given, with a value that is not a length.
    Set,
    /// Plot origin shift in inches (`-X` / `-Y`).
    Shift(f64),
}

impl CommonValue {
    /// The shift in inches, if any. A zero shift counts as none.
    pub fn shift(&self) -> Option<f64> {
        match self {
            CommonValue::Shift(v) if *v != 0.0 => Some(*v),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, CommonValue::Unset)
    }
}

/// Common options parsed from a module argument string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    values: HashMap<char, String>,
}

impl CommonOptions {
    /// Record the common options present in `args`. The last occurrence wins.
    pub fn from_args(args: &str) -> Self {
        let mut values = HashMap::new();
        for token in split_args(args) {
            let mut chars = token.chars();
            if chars.next() != Some('-') {
                continue;
            }
            let Some(letter) = chars.next() else {
                continue;
            };
            if COMMON_OPTIONS.contains(letter) {
                values.insert(letter, chars.as_str().to_string());
            }
        }
        Self { values }
    }

    /// Raw text given after the option letter.
    pub fn raw(&self, option: char) -> Option<&str> {
        self.values.get(&option).map(String::as_str)
    }

    /// Resolve an option. `X` and `Y` resolve to a shift in inches.
    pub fn value(&self, option: char, default_unit: LengthUnit) -> GmtResult<CommonValue> {
        if !COMMON_OPTIONS.contains(option) {
            return Err(GmtError::invalid_input(format!(
                "-{} is not a GMT common option",
                option
            )));
        }
        let Some(raw) = self.raw(option) else {
            return Ok(CommonValue::Unset);
        };
        match option {
            'X' | 'Y' => parse_shift(raw, default_unit)
                .map(CommonValue::Shift)
                .ok_or_else(|| GmtError::UnresolvedCommonOption {
                    option,
                    value: raw.to_string(),
                }),
            _ => Ok(CommonValue::Set),
        }
    }
}
