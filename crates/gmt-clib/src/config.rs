//! Configuration for driving the GMT executable.

use crate::units::LengthUnit;
use gmt_common::{GmtError, GmtResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for [`GmtCli`](crate::cli::GmtCli).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path or name of the `gmt` executable.
    pub gmt_bin: PathBuf,

    /// Value of `GMT_SESSION_NAME` for modern-mode calls.
    pub session_name: String,

    /// Unit applied to shifts given without a unit suffix.
    pub length_unit: LengthUnit,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gmt_bin: PathBuf::from("gmt"),
            session_name: format!("gmtrs{}", std::process::id()),
            length_unit: LengthUnit::Centimeter,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> GmtResult<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GMT_BIN") {
            if !val.is_empty() {
                config.gmt_bin = PathBuf::from(val);
            }
        }

        if let Ok(val) = std::env::var("GMT_SESSION_NAME") {
            if !val.is_empty() {
                config.session_name = val;
            }
        }

        if let Ok(val) = std::env::var("GMT_LENGTH_UNIT") {
            config.length_unit = val.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> GmtResult<()> {
        if self.gmt_bin.as_os_str().is_empty() {
            return Err(GmtError::Config("gmt_bin must not be empty".to_string()));
        }

        if self.session_name.is_empty() {
            return Err(GmtError::Config("session_name must not be empty".to_string()));
        }

        if self.session_name.chars().any(char::is_whitespace) {
            return Err(GmtError::Config(format!(
                "session_name must not contain whitespace: '{}'",
                self.session_name
            )));
        }

        Ok(())
    }
}
