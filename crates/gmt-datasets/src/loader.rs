//! Loading remote datasets into labeled arrays.

use std::path::{Path, PathBuf};

use gmt_clib::{call_module, with_positional, with_session, Kwargs, SessionProvider};
use gmt_common::{GmtError, GmtResult, GridArray, Region, Registration};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::reader::read_grid;
use crate::registry::{remote_dataset, RemoteDataset};

/// Where `which` may fetch a remote file to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Download {
    /// Remote data files go to the user data dir, other URLs to the cache
    #[default]
    Auto,
    Cache,
    Local,
    User,
}

impl Download {
    fn code(&self) -> &'static str {
        match self {
            Download::Auto => "a",
            Download::Cache => "c",
            Download::Local => "l",
            Download::User => "u",
        }
    }
}

/// Which remote grid to load and how much of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteDatasetQuery {
    /// Registry name, e.g. `earth_geoid`
    pub dataset_name: String,
    /// File-name prefix on the data server, e.g. `earth_geoid_`
    pub dataset_prefix: String,
    pub resolution: String,
    pub region: Option<Region>,
    pub registration: Option<Registration>,
}

impl RemoteDatasetQuery {
    pub fn new(dataset_name: impl Into<String>, dataset_prefix: impl Into<String>) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            dataset_prefix: dataset_prefix.into(),
            ..Default::default()
        }
    }

    pub fn resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = resolution.into();
        self
    }

    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn registration(mut self, registration: Registration) -> Self {
        self.registration = Some(registration);
        self
    }

    /// Validate against the registry and build the `@`-prefixed remote name.
    pub fn remote_name(&self) -> GmtResult<String> {
        let dataset = self.dataset()?;

        let resolution = dataset.resolution(&self.resolution).ok_or_else(|| {
            GmtError::invalid_input(format!("Invalid resolution '{}'.", self.resolution))
        })?;

        let suffix = match self.registration {
            Some(reg) if resolution.offers(reg) => reg.suffix(),
            Some(reg) => {
                let available: Vec<&str> =
                    resolution.registrations.iter().map(|r| r.as_str()).collect();
                return Err(GmtError::invalid_input(format!(
                    "{} registration is not available for the {} {} dataset. Only {} registration is available.",
                    reg,
                    resolution.code,
                    dataset.title,
                    available.join(" or ")
                )));
            }
            None => "",
        };

        if resolution.tiled && self.region.is_none() {
            return Err(GmtError::invalid_input(format!(
                "'region' is required for {} resolution '{}'.",
                dataset.title, resolution.code
            )));
        }

        Ok(format!(
            "@{}{}{}",
            self.dataset_prefix, resolution.code, suffix
        ))
    }

    fn dataset(&self) -> GmtResult<&'static RemoteDataset> {
        remote_dataset(&self.dataset_name).ok_or_else(|| {
            GmtError::invalid_input(format!("Unknown remote dataset '{}'.", self.dataset_name))
        })
    }
}

/// Locate a file, downloading remote files when needed.
///
/// Returns the local path reported by `which`.
pub fn which<P>(provider: &P, fname: &str, download: Download) -> GmtResult<PathBuf>
where
    P: SessionProvider + ?Sized,
{
    let kwargs = Kwargs::new().with("G", download.code());
    let output = call_module(provider, "which", &with_positional(&[fname], &kwargs))?;
    let path = output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| GmtError::invalid_output(format!("File '{}' not found.", fname)))?;
    Ok(PathBuf::from(path))
}

/// Cut `region` out of a grid and write it to `outgrid`.
pub fn grdcut<P>(provider: &P, fname: &str, region: &Region, outgrid: &Path) -> GmtResult<()>
where
    P: SessionProvider + ?Sized,
{
    let kwargs = Kwargs::new()
        .with("R", region.to_gmt_string())
        .with("G", outgrid.to_string_lossy().into_owned());
    call_module(provider, "grdcut", &with_positional(&[fname], &kwargs)).map(|_| ())
}

/// Load a remote dataset as a labeled grid.
///
/// Without a region the whole grid is downloaded to the user data dir and
/// read from there. With a region only that part is cut into a temporary
/// file, which is removed once the grid is in memory.
pub fn load_remote_dataset<P: SessionProvider>(
    provider: &P,
    query: &RemoteDatasetQuery,
) -> GmtResult<GridArray> {
    let dataset = query.dataset()?;
    let name = query.remote_name()?;
    debug!(remote = %name, region = ?query.region, "Loading remote dataset");

    let mut grid = match &query.region {
        None => {
            let path = which(provider, &name, Download::Auto)?;
            with_session(provider, |lib| read_grid(lib, &path))?
        }
        Some(region) => {
            let tmp = tempfile::Builder::new().prefix("gmtrs-").tempdir()?;
            let outgrid = tmp.path().join(format!("{}.nc", name.trim_start_matches('@')));
            grdcut(provider, &name, region, &outgrid)?;
            with_session(provider, |lib| read_grid(lib, &outgrid))?
        }
    };

    grid.name = dataset.name.to_string();
    grid.set_attr("long_name", dataset.long_name);
    grid.set_attr("units", dataset.units);
    if let Some(datum) = dataset.horizontal_datum {
        grid.set_attr("horizontal_datum", datum);
    }
    if let Some(datum) = dataset.vertical_datum {
        grid.set_attr("vertical_datum", datum);
    }

    let (rows, cols) = grid.shape();
    info!(remote = %name, rows = rows, cols = cols, "Loaded remote dataset");
    Ok(grid)
}
