//! Registry of remote datasets served by the GMT data server.

use gmt_common::Registration;
use serde::Serialize;

const BOTH: &[Registration] = &[Registration::Gridline, Registration::Pixel];

/// One resolution a remote dataset is published at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    /// Resolution code, e.g. `"01d"` or `"05m"`
    pub code: &'static str,
    /// Registrations available at this resolution
    pub registrations: &'static [Registration],
    /// Tiled resolutions are split on the server and need a region
    pub tiled: bool,
}

impl Resolution {
    const fn untiled(code: &'static str) -> Self {
        Self {
            code,
            registrations: BOTH,
            tiled: false,
        }
    }

    const fn tiled(code: &'static str) -> Self {
        Self {
            code,
            registrations: BOTH,
            tiled: true,
        }
    }

    pub fn offers(&self, registration: Registration) -> bool {
        self.registrations.contains(&registration)
    }
}

/// Metadata for a remote dataset family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteDataset {
    pub name: &'static str,
    pub title: &'static str,
    pub long_name: &'static str,
    pub units: &'static str,
    pub horizontal_datum: Option<&'static str>,
    pub vertical_datum: Option<&'static str>,
    pub resolutions: &'static [Resolution],
}

impl RemoteDataset {
    pub fn resolution(&self, code: &str) -> Option<&'static Resolution> {
        self.resolutions.iter().find(|r| r.code == code)
    }

    pub fn resolution_codes(&self) -> Vec<&'static str> {
        self.resolutions.iter().map(|r| r.code).collect()
    }
}

pub static EARTH_GEOID: RemoteDataset = RemoteDataset {
    name: "earth_geoid",
    title: "Earth geoid",
    long_name: "EGM2008 Earth Geoid",
    units: "m",
    horizontal_datum: Some("WGS84"),
    vertical_datum: None,
    resolutions: &[
        Resolution::untiled("01d"),
        Resolution::untiled("30m"),
        Resolution::untiled("20m"),
        Resolution::untiled("15m"),
        Resolution::untiled("10m"),
        Resolution::untiled("06m"),
        Resolution::tiled("05m"),
        Resolution::tiled("04m"),
        Resolution::tiled("03m"),
        Resolution::tiled("02m"),
        Resolution::tiled("01m"),
    ],
};

static DATASETS: &[&RemoteDataset] = &[&EARTH_GEOID];

/// Look up a dataset by name.
pub fn remote_dataset(name: &str) -> Option<&'static RemoteDataset> {
    DATASETS.iter().copied().find(|d| d.name == name)
}
