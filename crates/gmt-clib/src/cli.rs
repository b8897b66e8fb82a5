//! Session provider backed by the `gmt` executable.
//!
//! Each module call spawns `gmt <module> <args...>` with `GMT_SESSION_NAME`
//! set, so calls made between [`GmtCli::begin`] and [`GmtCli::end`] share one
//! modern-mode session on disk. Standard output is captured and returned;
//! a non-zero exit status is reported with the engine's stderr.
//!
//! Module calls carry `--PROJ_LENGTH_UNIT` from the config, so unit-less
//! lengths are read by the engine in the same unit [`CliSession`] uses to
//! answer `get_common`.

use std::process::Command;
use std::sync::Arc;

use gmt_common::{GmtError, GmtResult};
use tracing::{debug, info, warn};

use crate::args::split_args;
use crate::common::{CommonOptions, CommonValue};
use crate::config::SessionConfig;
use crate::session::{Session, SessionProvider};

/// Drives GMT through its command-line front end.
#[derive(Debug)]
pub struct GmtCli {
    config: Arc<SessionConfig>,
    modern: bool,
}

impl GmtCli {
    /// Classic mode: module calls without a modern-mode session.
    pub fn new(config: SessionConfig) -> GmtResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            modern: false,
        })
    }

    /// Start a modern-mode session (`gmt begin`).
    pub fn begin(config: SessionConfig) -> GmtResult<Self> {
        let mut cli = Self::new(config)?;
        run(&cli.config, "begin", &[])?;
        cli.modern = true;
        info!(session = %cli.config.session_name, "Started GMT modern session");
        Ok(cli)
    }

    /// End the modern-mode session (`gmt end`).
    pub fn end(mut self) -> GmtResult<()> {
        self.finish()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_modern(&self) -> bool {
        self.modern
    }

    fn finish(&mut self) -> GmtResult<()> {
        if !self.modern {
            return Ok(());
        }
        self.modern = false;
        run(&self.config, "end", &[])?;
        info!(session = %self.config.session_name, "Ended GMT modern session");
        Ok(())
    }
}

impl Drop for GmtCli {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            warn!(error = %e, "Failed to end GMT session");
        }
    }
}

impl SessionProvider for GmtCli {
    type Session = CliSession;

    fn open(&self) -> GmtResult<CliSession> {
        debug!(session = %self.config.session_name, "Opening GMT session");
        Ok(CliSession {
            config: Arc::clone(&self.config),
            common: CommonOptions::default(),
        })
    }
}

/// One session handle. Remembers the common options of its last call.
#[derive(Debug)]
pub struct CliSession {
    config: Arc<SessionConfig>,
    common: CommonOptions,
}

impl Session for CliSession {
    fn call_module(&mut self, module: &str, args: &str) -> GmtResult<String> {
        if module.is_empty() || module.chars().any(char::is_whitespace) {
            return Err(GmtError::invalid_input(format!(
                "invalid module name '{}'",
                module
            )));
        }
        let mut argv = split_args(args);
        argv.push(format!(
            "--PROJ_LENGTH_UNIT={}",
            self.config.length_unit.gmt_name()
        ));
        let output = run(&self.config, module, &argv)?;
        self.common = CommonOptions::from_args(args);
        Ok(output)
    }

    fn get_common(&mut self, option: char) -> GmtResult<CommonValue> {
        self.common.value(option, self.config.length_unit)
    }
}

impl Drop for CliSession {
    fn drop(&mut self) {
        debug!(session = %self.config.session_name, "Closed GMT session");
    }
}

fn run(config: &SessionConfig, module: &str, argv: &[String]) -> GmtResult<String> {
    debug!(
        bin = %config.gmt_bin.display(),
        module = %module,
        args = ?argv,
        "Calling GMT module"
    );

    let output = Command::new(&config.gmt_bin)
        .arg(module)
        .args(argv)
        .env("GMT_SESSION_NAME", &config.session_name)
        .output()
        .map_err(|e| {
            GmtError::Command(format!(
                "failed to run {}: {}",
                config.gmt_bin.display(),
                e
            ))
        })?;

    if !output.status.success() {
        return Err(GmtError::ModuleFailed {
            module: module.to_string(),
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
