//! Common test fixtures for GMT binding tests.
//!
//! Canned engine output and request values that show up across the suite.

/// Common regions as `[xmin, xmax, ymin, ymax]`.
pub mod region {
    /// Whole globe
    pub const GLOBAL: [f64; 4] = [-180.0, 180.0, -90.0, 90.0];

    /// Small area off West Africa used in the geoid examples
    pub const GULF_OF_GUINEA: [f64; 4] = [-10.0, 10.0, -5.0, 5.0];

    /// Basemap region from the origin-shift example
    pub const SQUARE_10: [f64; 4] = [0.0, 10.0, 0.0, 10.0];
}

/// Canned engine output.
pub mod output {
    /// `which -Ga` answer for the 1-degree pixel geoid.
    pub const WHICH_GEOID_01D: &str =
        "/home/user/.gmt/server/earth/earth_geoid/earth_geoid_01d_p.grd\n";

    /// `grdinfo -Cn` for a 3x2 pixel-registered geographic grid over 0/3/0/2.
    pub const GRDINFO_3X2_PIXEL: &str = "0\t3\t0\t2\t-1.5\t4.5\t1\t1\t3\t2\t1\t1\n";

    /// `grd2xyz -ZBLa` values matching [`GRDINFO_3X2_PIXEL`], south row first.
    pub const GRD2XYZ_3X2: &str = "-1.5\n0\n1.5\nNaN\n3\n4.5\n";

    /// `grdinfo -Cn` for a 4x3 gridline-registered geographic grid over 0/3/0/2.
    pub const GRDINFO_4X3_GRIDLINE: &str = "0\t3\t0\t2\t0\t11\t1\t1\t4\t3\t0\t1\n";

    /// Older `grdinfo -Cn` output without the registration/type columns.
    pub const GRDINFO_LEGACY: &str = "0 3 0 2 0 11 1 1 4 3\n";
}
