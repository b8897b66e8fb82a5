//! Tests for permanent and temporary plot-origin shifts.

use std::panic::{catch_unwind, AssertUnwindSafe};

use gmt_clib::{parse_shift, Kwargs, LengthUnit};
use gmt_common::{GmtError, GmtResult};
use gmt_figure::{Figure, OriginOffset};
use test_utils::{assert_approx_eq, FakeGmt};

/// Shift in inches carried by a reversal call, e.g. "-T -X-2i" -> -2.0 for 'X'.
fn shift_in(args: &str, option: char) -> Option<f64> {
    let prefix = format!("-{}", option);
    args.split_whitespace()
        .find_map(|tok| tok.strip_prefix(&prefix))
        .and_then(|raw| parse_shift(raw, LengthUnit::Inch))
}

fn frame() -> Kwargs {
    Kwargs::new()
        .with("R", "0/10/0/10")
        .with("J", "X10c/10c")
        .with("B", true)
}

// ============================================================================
// Figure basics
// ============================================================================

#[test]
fn test_figure_names_are_unique_hex() {
    let gmt = FakeGmt::new();
    let a = Figure::new(&gmt);
    let b = Figure::new(&gmt);
    assert_ne!(a.name(), b.name());
    assert_eq!(a.name().len(), 32);
    assert!(a.name().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_basemap_activates_figure_first() {
    let gmt = FakeGmt::new();
    let fig = Figure::new(&gmt);
    fig.basemap(&frame()).unwrap();

    assert_eq!(gmt.modules(), vec!["figure", "basemap"]);
    assert_eq!(gmt.calls_to("figure"), vec![format!("{} -", fig.name())]);
    assert_eq!(gmt.calls_to("basemap"), vec!["-B -JX10c/10c -R0/10/0/10"]);
}

#[test]
fn test_savefig_uses_extension_format() {
    let gmt = FakeGmt::new();
    let fig = Figure::new(&gmt);
    fig.savefig("/tmp/maps/shifted.png").unwrap();

    assert_eq!(gmt.calls_to("psconvert"), vec!["-A -F/tmp/maps/shifted -Tg"]);
}

#[test]
fn test_savefig_rejects_unknown_extension() {
    let gmt = FakeGmt::new();
    let fig = Figure::new(&gmt);
    let err = fig.savefig("map.svgz").unwrap_err();
    assert!(err.is_caller_error());
    assert!(gmt.calls().is_empty());
}

// ============================================================================
// Permanent shift
// ============================================================================

#[test]
fn test_shift_origin_issues_single_plot_call() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    fig.shift_origin(&OriginOffset::new().x(12).y("3c")).unwrap();

    assert_eq!(gmt.modules(), vec!["figure", "plot"]);
    assert_eq!(gmt.calls_to("plot"), vec!["-T -X12 -Y3c"]);
}

#[test]
fn test_shift_origin_with_width_expression() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    fig.shift_origin(&OriginOffset::new().x("w+2c")).unwrap();

    assert_eq!(gmt.calls_to("plot"), vec!["-T -Xw+2c"]);
}

#[test]
fn test_shift_origin_without_offsets_still_calls_plot() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    fig.shift_origin(&OriginOffset::new()).unwrap();

    assert_eq!(gmt.calls_to("plot"), vec!["-T"]);
}

// ============================================================================
// Temporary shift: normal exit
// ============================================================================

#[test]
fn test_scope_restore_reverses_in_inches() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);

    let shifted = fig.shift_origin_scope(&OriginOffset::new().x(12)).unwrap();
    let (saved_x, saved_y) = shifted.saved_shift();
    assert_approx_eq!(saved_x.unwrap(), 12.0 / 2.54, 1e-12);
    assert_eq!(saved_y, None);
    shifted.restore().unwrap();

    let plots = gmt.calls_to("plot");
    assert_eq!(plots.len(), 2);
    assert_eq!(plots[0], "-T -X12");
    assert_approx_eq!(shift_in(&plots[1], 'X').unwrap(), -12.0 / 2.54, 1e-12);
    assert_eq!(shift_in(&plots[1], 'Y'), None);
}

#[test]
fn test_scope_reverses_both_axes() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);

    fig.with_shifted_origin(&OriginOffset::new().x("2i").y("-72p"), |_| Ok(()))
        .unwrap();

    assert_eq!(gmt.calls_to("plot"), vec!["-T -X2i -Y-72p", "-T -X-2i -Y1i"]);
}

#[test]
fn test_scope_uses_session_length_unit() {
    let gmt = FakeGmt::new().with_length_unit(LengthUnit::Point);
    let mut fig = Figure::new(&gmt);

    fig.with_shifted_origin(&OriginOffset::new().y(36), |_| Ok(()))
        .unwrap();

    // 36 points read back as half an inch
    assert_eq!(gmt.calls_to("plot"), vec!["-T -Y36", "-T -Y-0.5i"]);
}

#[test]
fn test_guard_drop_reverses() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    {
        let _shifted = fig.shift_origin_scope(&OriginOffset::new().x("1i")).unwrap();
    }
    assert_eq!(gmt.calls_to("plot"), vec!["-T -X1i", "-T -X-1i"]);
}

#[test]
fn test_plotting_through_guard() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    fig.basemap(&frame()).unwrap();

    let shifted = fig.shift_origin_scope(&OriginOffset::new().x("12c")).unwrap();
    shifted.basemap(&frame()).unwrap();
    shifted.restore().unwrap();

    assert_eq!(
        gmt.modules(),
        vec!["figure", "basemap", "figure", "plot", "figure", "basemap", "figure", "plot"]
    );
}

#[test]
fn test_closure_result_is_returned() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);

    let value = fig
        .with_shifted_origin(&OriginOffset::new().x("1i"), |fig| {
            fig.basemap(&frame())?;
            Ok(42)
        })
        .unwrap();

    assert_eq!(value, 42);
    assert_eq!(gmt.calls_to("basemap").len(), 1);
}

#[test]
fn test_every_session_is_closed() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    fig.with_shifted_origin(&OriginOffset::new().x("1i"), |fig| fig.basemap(&frame()))
        .unwrap();

    assert!(gmt.sessions_opened() > 0);
    assert_eq!(gmt.sessions_opened(), gmt.sessions_closed());
}

#[test]
fn test_reversal_runs_in_its_own_session() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    fig.with_shifted_origin(&OriginOffset::new().x("1i"), |_| Ok(()))
        .unwrap();

    let plots: Vec<_> = gmt
        .calls()
        .into_iter()
        .filter(|c| c.module == "plot")
        .collect();
    assert_eq!(plots.len(), 2);
    assert_ne!(plots[0].session, plots[1].session);
}

// ============================================================================
// Temporary shift: error and panic exits
// ============================================================================

#[test]
fn test_reversal_runs_after_body_error() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);

    let result: GmtResult<()> = fig.with_shifted_origin(&OriginOffset::new().x("1i"), |_| {
        Err(GmtError::invalid_input("body failed"))
    });

    assert!(matches!(result, Err(GmtError::InvalidInput(ref m)) if m == "body failed"));
    assert_eq!(gmt.calls_to("plot"), vec!["-T -X1i", "-T -X-1i"]);
}

#[test]
fn test_reversal_runs_after_panic() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _: GmtResult<()> =
            fig.with_shifted_origin(&OriginOffset::new().y("2c"), |_| panic!("boom"));
    }));

    assert!(outcome.is_err());
    let plots = gmt.calls_to("plot");
    assert_eq!(plots.len(), 2);
    assert_approx_eq!(shift_in(&plots[1], 'Y').unwrap(), -2.0 / 2.54, 1e-12);
}

#[test]
fn test_reversal_error_is_reported() {
    let gmt = FakeGmt::new();
    gmt.fail_call("plot", 2);
    let mut fig = Figure::new(&gmt);

    let err = fig
        .with_shifted_origin(&OriginOffset::new().x("1i"), |_| Ok(()))
        .unwrap_err();

    assert!(matches!(err, GmtError::ModuleFailed { ref module, .. } if module == "plot"));
}

#[test]
fn test_body_error_wins_over_reversal_error() {
    let gmt = FakeGmt::new();
    gmt.fail_call("plot", 2);
    let mut fig = Figure::new(&gmt);

    let err = fig
        .with_shifted_origin(&OriginOffset::new().x("1i"), |_| -> GmtResult<()> {
            Err(GmtError::invalid_input("body failed"))
        })
        .unwrap_err();

    assert!(matches!(err, GmtError::InvalidInput(_)));
    assert_eq!(gmt.calls_to("plot").len(), 2);
}

#[test]
fn test_failed_forward_shift_is_not_reversed() {
    let gmt = FakeGmt::new();
    gmt.fail_call("plot", 1);
    let mut fig = Figure::new(&gmt);

    let mut body_ran = false;
    let result = fig.with_shifted_origin(&OriginOffset::new().x("1i"), |_| {
        body_ran = true;
        Ok(())
    });

    assert!(result.is_err());
    assert!(!body_ran);
    assert_eq!(gmt.calls_to("plot").len(), 1);
}

#[test]
fn test_unresolvable_shift_is_an_error() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);

    let err = fig
        .shift_origin_scope(&OriginOffset::new().x("w+2c"))
        .err()
        .unwrap();

    assert!(matches!(err, GmtError::UnresolvedCommonOption { option: 'X', .. }));
    assert!(gmt.calls().is_empty(), "nothing may be drawn: {:?}", gmt.calls());
    assert_eq!(gmt.sessions_opened(), 0);
}

#[test]
fn test_unresolvable_shift_skips_body() {
    let gmt = FakeGmt::new();
    let mut fig = Figure::new(&gmt);
    let mut body_ran = false;

    let result = fig.with_shifted_origin(&OriginOffset::new().x(2).y("a"), |_| {
        body_ran = true;
        Ok(())
    });

    assert!(matches!(
        result,
        Err(GmtError::UnresolvedCommonOption { option: 'Y', .. })
    ));
    assert!(!body_ran);
    assert!(gmt.calls_to("plot").is_empty());
}

#[test]
fn test_session_open_failure_propagates() {
    let gmt = FakeGmt::new();
    gmt.refuse_sessions();
    let mut fig = Figure::new(&gmt);

    let err = fig.shift_origin(&OriginOffset::new().x(1)).unwrap_err();
    assert!(matches!(err, GmtError::SessionState(_)));
    assert!(gmt.calls().is_empty());
}
