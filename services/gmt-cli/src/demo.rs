//! The origin-shift example map.

use std::path::Path;

use gmt_clib::{Kwargs, SessionProvider};
use gmt_common::GmtResult;
use gmt_figure::{Figure, OriginOffset, Shift};
use tracing::info;

/// A plain number is a length in the default unit; anything else is passed
/// to GMT as written.
pub fn parse_shift_arg(raw: &str) -> Shift {
    match raw.trim().parse::<f64>() {
        Ok(v) => Shift::Length(v),
        Err(_) => Shift::Expr(raw.trim().to_string()),
    }
}

fn frame() -> Kwargs {
    Kwargs::new()
        .with("R", "0/10/0/10")
        .with("J", "X10c/10c")
        .with("B", true)
}

/// Draw a basemap, shift the origin, draw a second basemap and save.
///
/// With `scoped`, the second basemap is drawn inside a temporary shift and a
/// third one, filled white, is drawn back at the first origin.
pub fn shift_demo<P: SessionProvider>(
    provider: &P,
    offset: &OriginOffset,
    scoped: bool,
    output: &Path,
) -> GmtResult<()> {
    let mut fig = Figure::new(provider);
    fig.basemap(&frame())?;

    if scoped {
        fig.with_shifted_origin(offset, |fig| fig.basemap(&frame()))?;
        fig.basemap(&frame().with("B", "+gwhite"))?;
    } else {
        fig.shift_origin(offset)?;
        fig.basemap(&frame())?;
    }

    fig.savefig(output)?;
    info!(figure = %fig.name(), output = %output.display(), "Saved shift demo");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::FakeGmt;

    #[test]
    fn test_parse_shift_arg() {
        assert_eq!(parse_shift_arg("12"), Shift::Length(12.0));
        assert_eq!(parse_shift_arg(" -2.5 "), Shift::Length(-2.5));
        assert_eq!(parse_shift_arg("w+2c"), Shift::Expr("w+2c".to_string()));
    }

    #[test]
    fn test_permanent_demo() {
        let gmt = FakeGmt::new();
        let offset = OriginOffset::new().x(12);
        shift_demo(&gmt, &offset, false, Path::new("map.png")).unwrap();

        assert_eq!(gmt.calls_to("basemap").len(), 2);
        assert_eq!(gmt.calls_to("plot"), vec!["-T -X12"]);
        assert_eq!(gmt.calls_to("psconvert"), vec!["-A -Fmap -Tg"]);
    }

    #[test]
    fn test_scoped_demo_restores_before_third_basemap() {
        let gmt = FakeGmt::new();
        let offset = OriginOffset::new().x("2i");
        shift_demo(&gmt, &offset, true, Path::new("map.pdf")).unwrap();

        let modules: Vec<String> = gmt
            .modules()
            .into_iter()
            .filter(|m| m != "figure")
            .collect();
        assert_eq!(
            modules,
            vec!["basemap", "plot", "basemap", "plot", "basemap", "psconvert"]
        );
        assert_eq!(gmt.calls_to("plot"), vec!["-T -X2i", "-T -X-2i"]);
        assert_eq!(gmt.calls_to("basemap")[2], "-B+gwhite -JX10c/10c -R0/10/0/10");
    }
}
