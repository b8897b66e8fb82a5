//! Remote GMT datasets.
//!
//! Grids published on the GMT data server are loaded into a
//! [`GridArray`](gmt_common::GridArray): a 2-D array of values labeled with
//! coordinates, dimension names and attributes.
//!
//! ```text
//! load_earth_geoid(options)
//!      │
//!      ▼
//! RemoteDatasetQuery::remote_name()   validate against the registry
//!      │
//!      ├─► no region:  which @earth_geoid_01d -Ga      → local path
//!      │
//!      └─► region:     grdcut @earth_geoid_05m -R.. -G<tmp>/….nc
//!               │
//!               ▼
//!          grdinfo -Cn + grd2xyz -ZBLa   → GridArray
//! ```

pub mod earth_geoid;
pub mod loader;
pub mod reader;
pub mod registry;

pub use earth_geoid::{load_earth_geoid, LoadOptions};
pub use loader::{grdcut, load_remote_dataset, which, Download, RemoteDatasetQuery};
pub use reader::{parse_grd2xyz, parse_grdinfo, read_grid};
pub use registry::{remote_dataset, RemoteDataset, Resolution, EARTH_GEOID};
