//! EGM2008 Earth geoid grids.

use gmt_clib::SessionProvider;
use gmt_common::{GmtResult, GridArray, Region, Registration};
use serde::{Deserialize, Serialize};

use crate::loader::{load_remote_dataset, RemoteDatasetQuery};

/// Options for [`load_earth_geoid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// `01d`, `30m`, `20m`, `15m`, `10m`, `06m`, `05m`, `04m`, `03m`, `02m` or `01m`
    pub resolution: String,
    /// Required for `05m` and finer, which are stored as tiles
    pub region: Option<Region>,
    /// `None` lets GMT pick pixel registration unless only gridline exists
    pub registration: Option<Registration>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            resolution: "01d".to_string(),
            region: None,
            registration: None,
        }
    }
}

/// Load the EGM2008 geoid at the given resolution.
///
/// The first load of a resolution downloads it to the user data dir
/// (usually `~/.gmt/server/earth/earth_geoid/`); later loads read it from
/// there. Coordinates are `lat`/`lon` in degrees and values are meters.
///
/// # Example
///
/// ```no_run
/// use gmt_clib::GmtCli;
/// use gmt_datasets::{load_earth_geoid, LoadOptions};
///
/// let gmt = GmtCli::new(Default::default())?;
/// let grid = load_earth_geoid(&gmt, &LoadOptions {
///     resolution: "05m".to_string(),
///     region: Some([-10.0, 10.0, -5.0, 5.0].into()),
///     registration: None,
/// })?;
/// assert_eq!(grid.attr("units"), Some("m"));
/// # Ok::<(), gmt_common::GmtError>(())
/// ```
pub fn load_earth_geoid<P: SessionProvider>(
    provider: &P,
    options: &LoadOptions,
) -> GmtResult<GridArray> {
    let query = RemoteDatasetQuery {
        dataset_name: "earth_geoid".to_string(),
        dataset_prefix: "earth_geoid_".to_string(),
        resolution: options.resolution.clone(),
        region: options.region.clone(),
        registration: options.registration,
    };
    load_remote_dataset(provider, &query)
}
