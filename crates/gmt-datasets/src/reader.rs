//! Reading grids through the engine's text output.
//!
//! The header comes from `grdinfo -Cn`:
//!
//! ```text
//! west east south north z_min z_max x_inc y_inc n_columns n_rows [registration grid_type]
//! ```
//!
//! The values come from `grd2xyz -ZBLa`: one value per line, starting at the
//! south-west node and running west to east, south to north.

use std::path::Path;

use gmt_clib::{with_positional, Kwargs, Session};
use gmt_common::{GmtError, GmtResult, GridArray, GridHeader, GridType, Registration};
use tracing::debug;

const HEADER_FIELDS: usize = 10;

/// Parse one `grdinfo -Cn` line.
///
/// The trailing registration and grid-type columns are optional. Without them
/// the grid is taken as gridline-registered and Cartesian.
pub fn parse_grdinfo(output: &str) -> GmtResult<GridHeader> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| GmtError::invalid_output("grdinfo returned no header"))?;

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < HEADER_FIELDS {
        return Err(GmtError::invalid_output(format!(
            "grdinfo header has {} fields, expected at least {}: '{}'",
            fields.len(),
            HEADER_FIELDS,
            line
        )));
    }

    let num = |i: usize| -> GmtResult<f64> {
        fields[i].parse::<f64>().map_err(|_| {
            GmtError::invalid_output(format!("grdinfo field {} is not a number: '{}'", i + 1, fields[i]))
        })
    };
    let count = |i: usize| -> GmtResult<usize> {
        let v = num(i)?;
        if v < 0.0 || v.fract() != 0.0 {
            return Err(GmtError::invalid_output(format!(
                "grdinfo field {} is not a node count: '{}'",
                i + 1,
                fields[i]
            )));
        }
        Ok(v as usize)
    };

    let registration = match fields.get(10) {
        Some(_) => Registration::from_code(num(10)? as i64)?,
        None => Registration::Gridline,
    };
    let grid_type = match fields.get(11) {
        Some(_) => GridType::from_code(num(11)? as i64)?,
        None => GridType::Cartesian,
    };

    Ok(GridHeader {
        west: num(0)?,
        east: num(1)?,
        south: num(2)?,
        north: num(3)?,
        z_min: num(4)?,
        z_max: num(5)?,
        x_inc: num(6)?,
        y_inc: num(7)?,
        n_columns: count(8)?,
        n_rows: count(9)?,
        registration,
        grid_type,
    })
}

/// Parse `grd2xyz -ZBLa` output and check the node count.
pub fn parse_grd2xyz(output: &str, expected: usize) -> GmtResult<Vec<f32>> {
    let mut values = Vec::with_capacity(expected);
    for (lineno, line) in output.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = line.parse::<f32>().map_err(|_| {
            GmtError::invalid_output(format!(
                "grd2xyz line {} is not a value: '{}'",
                lineno + 1,
                line
            ))
        })?;
        values.push(v);
    }

    if values.len() != expected {
        return Err(GmtError::invalid_output(format!(
            "grd2xyz returned {} values, expected {}",
            values.len(),
            expected
        )));
    }
    Ok(values)
}

/// Read a grid file into a labeled array using an open session.
pub fn read_grid<S: Session>(lib: &mut S, path: &Path) -> GmtResult<GridArray> {
    let path = path.to_string_lossy();

    let info = lib.call_module(
        "grdinfo",
        &with_positional(&[path.as_ref()], &Kwargs::new().with("C", "n")),
    )?;
    let header = parse_grdinfo(&info)?;
    debug!(
        path = %path,
        n_columns = header.n_columns,
        n_rows = header.n_rows,
        registration = %header.registration,
        "Read grid header"
    );

    let dump = lib.call_module(
        "grd2xyz",
        &with_positional(&[path.as_ref()], &Kwargs::new().with("Z", "BLa")),
    )?;
    let values = parse_grd2xyz(&dump, header.len())?;

    GridArray::from_header(&header, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures::output;

    #[test]
    fn test_parse_grdinfo_full() {
        let h = parse_grdinfo(output::GRDINFO_3X2_PIXEL).unwrap();
        assert_eq!((h.west, h.east, h.south, h.north), (0.0, 3.0, 0.0, 2.0));
        assert_eq!((h.z_min, h.z_max), (-1.5, 4.5));
        assert_eq!((h.n_columns, h.n_rows), (3, 2));
        assert_eq!(h.registration, Registration::Pixel);
        assert_eq!(h.grid_type, GridType::Geographic);
    }

    #[test]
    fn test_parse_grdinfo_legacy_columns() {
        let h = parse_grdinfo(output::GRDINFO_LEGACY).unwrap();
        assert_eq!((h.n_columns, h.n_rows), (4, 3));
        assert_eq!(h.registration, Registration::Gridline);
        assert_eq!(h.grid_type, GridType::Cartesian);
    }

    #[test]
    fn test_parse_grdinfo_skips_blank_lines() {
        let h = parse_grdinfo("\n\n0 1 0 1 0 0 1 1 2 2 0 0\n").unwrap();
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn test_parse_grdinfo_errors() {
        assert!(parse_grdinfo("").is_err());
        assert!(parse_grdinfo("0 3 0 2").is_err());
        assert!(parse_grdinfo("0 3 0 2 0 11 1 1 four 3").is_err());
        assert!(parse_grdinfo("0 3 0 2 0 11 1 1 4.5 3").is_err());
        assert!(parse_grdinfo("0 3 0 2 0 11 1 1 4 3 7 1").is_err());
    }

    #[test]
    fn test_parse_grd2xyz() {
        let values = parse_grd2xyz(output::GRD2XYZ_3X2, 6).unwrap();
        assert_eq!(values[0], -1.5);
        assert!(values[3].is_nan());
        assert_eq!(values[5], 4.5);
    }

    #[test]
    fn test_parse_grd2xyz_count_mismatch() {
        let err = parse_grd2xyz(output::GRD2XYZ_3X2, 12).unwrap_err();
        assert!(matches!(err, GmtError::InvalidOutput(_)));
    }

    #[test]
    fn test_parse_grd2xyz_bad_value() {
        let err = parse_grd2xyz("1\nabc\n", 2).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
