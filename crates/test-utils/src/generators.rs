//! Generators for synthetic grids and the engine text that describes them.
//!
//! The loader reads grids through `grdinfo -Cn` and `grd2xyz -ZBLa`. These
//! helpers produce both outputs for arbitrary sizes so tests can script a
//! [`FakeGmt`](crate::FakeGmt) without real data files.

/// Creates geoid-like heights in meters (roughly -100 to +80).
pub fn create_geoid_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x = col as f32 / width.max(1) as f32 * std::f32::consts::TAU;
            let y = row as f32 / height.max(1) as f32 * std::f32::consts::PI;
            data.push(-10.0 + 70.0 * x.sin() * y.sin() - 20.0 * (2.0 * y).cos());
        }
    }
    data
}

/// Render values the way `grd2xyz -ZBLa` prints them: one per line, NaN as `NaN`.
pub fn grd2xyz_output(values: &[f32]) -> String {
    let mut out = String::with_capacity(values.len() * 8);
    for v in values {
        if v.is_nan() {
            out.push_str("NaN");
        } else {
            out.push_str(&v.to_string());
        }
        out.push('\n');
    }
    out
}

/// Render a `grdinfo -Cn` line for a geographic grid.
///
/// `pixel` selects pixel registration. Increments follow from the extent and
/// node counts.
pub fn grdinfo_output(
    region: [f64; 4],
    n_columns: usize,
    n_rows: usize,
    pixel: bool,
    z_range: (f32, f32),
) -> String {
    let [w, e, s, n] = region;
    let (x_cells, y_cells) = if pixel {
        (n_columns, n_rows)
    } else {
        (n_columns.saturating_sub(1).max(1), n_rows.saturating_sub(1).max(1))
    };
    let dx = (e - w) / x_cells as f64;
    let dy = (n - s) / y_cells as f64;
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t1\n",
        w,
        e,
        s,
        n,
        z_range.0,
        z_range.1,
        dx,
        dy,
        n_columns,
        n_rows,
        if pixel { 1 } else { 0 }
    )
}
