//! Figure handle.

use std::path::Path;

use gmt_clib::{build_arg_string, with_session, Kwargs, Session, SessionProvider};
use gmt_common::{GmtError, GmtResult};
use tracing::debug;
use uuid::Uuid;

/// A named figure inside a modern-mode session.
///
/// Every plotting method first makes this figure the current one, so several
/// figures can be interleaved on the same provider.
#[derive(Debug)]
pub struct Figure<'p, P: SessionProvider> {
    provider: &'p P,
    name: String,
}

impl<'p, P: SessionProvider> Figure<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self {
            provider,
            name: Uuid::new_v4().simple().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &'p P {
        self.provider
    }

    /// Make this the current figure (`figure <name> -`).
    pub fn activate(&self) -> GmtResult<()> {
        self.call_module("figure", &format!("{} -", self.name))
            .map(|_| ())
    }

    /// Run a module against this figure after activating it.
    pub fn plot_module(&self, module: &str, kwargs: &Kwargs) -> GmtResult<()> {
        self.activate()?;
        self.call_module(module, &build_arg_string(kwargs))
            .map(|_| ())
    }

    /// Draw a basemap (`basemap -R.. -J.. -B..`).
    pub fn basemap(&self, kwargs: &Kwargs) -> GmtResult<()> {
        self.plot_module("basemap", kwargs)
    }

    /// Save the figure; the format is taken from the file extension.
    pub fn savefig(&self, path: impl AsRef<Path>) -> GmtResult<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let format = raster_format(&ext).ok_or_else(|| {
            GmtError::invalid_input(format!(
                "Unknown extension '.{}' for figure {}",
                ext,
                path.display()
            ))
        })?;
        let prefix = path.with_extension("");

        let kwargs = Kwargs::new()
            .with("A", true)
            .with("T", format.to_string())
            .with("F", prefix.to_string_lossy().into_owned());
        debug!(figure = %self.name, path = %path.display(), "Saving figure");
        self.plot_module("psconvert", &kwargs)
    }

    pub(crate) fn call_module(&self, module: &str, args: &str) -> GmtResult<String> {
        with_session(self.provider, |lib| lib.call_module(module, args))
    }
}

/// `psconvert -T` code for a file extension.
fn raster_format(ext: &str) -> Option<char> {
    match ext {
        "png" => Some('g'),
        "pdf" => Some('f'),
        "jpg" | "jpeg" => Some('j'),
        "eps" => Some('e'),
        "tif" | "tiff" => Some('t'),
        "bmp" => Some('b'),
        _ => None,
    }
}
