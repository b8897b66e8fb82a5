//! Shifting the plot origin.
//!
//! A shift is one `plot -T -X<x> -Y<y>` call: `-T` skips reading data, so the
//! only effect is moving the origin. A temporary shift reads the applied
//! offsets back from the session (in inches) and undoes them with a second
//! `plot -T -X-<x>i -Y-<y>i` call when the scope ends. Shifts whose size
//! depends on plot state (`a`, `c`, `f`, `w+2c`, ...) cannot be read back, so
//! a temporary shift refuses them before anything is drawn.

use std::ops::{Deref, DerefMut};

use gmt_clib::{
    build_arg_string, parse_shift, with_session, ArgValue, Kwargs, LengthUnit, Session,
    SessionProvider,
};
use gmt_common::{GmtError, GmtResult};
use tracing::{debug, error};

use crate::figure::Figure;

/// A shift along one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Shift {
    /// Amount in the session's default length unit.
    Length(f64),
    /// Any GMT shift expression, e.g. `"2i"`, `"-3c"` or `"w+2c"`.
    Expr(String),
}

impl Shift {
    /// Zero lengths and empty expressions count as "no shift".
    pub fn is_given(&self) -> bool {
        match self {
            Shift::Length(v) => *v != 0.0,
            Shift::Expr(s) => !s.trim().is_empty(),
        }
    }

    fn to_arg(&self) -> ArgValue {
        match self {
            Shift::Length(v) => ArgValue::from(*v),
            Shift::Expr(s) => ArgValue::from(s.trim()),
        }
    }
}

impl From<f64> for Shift {
    fn from(v: f64) -> Self {
        Shift::Length(v)
    }
}

impl From<i32> for Shift {
    fn from(v: i32) -> Self {
        Shift::Length(v as f64)
    }
}

impl From<&str> for Shift {
    fn from(s: &str) -> Self {
        Shift::Expr(s.to_string())
    }
}

impl From<String> for Shift {
    fn from(s: String) -> Self {
        Shift::Expr(s)
    }
}

/// Offsets for a plot-origin shift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginOffset {
    pub xshift: Option<Shift>,
    pub yshift: Option<Shift>,
}

impl OriginOffset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, shift: impl Into<Shift>) -> Self {
        self.xshift = Some(shift.into());
        self
    }

    pub fn y(mut self, shift: impl Into<Shift>) -> Self {
        self.yshift = Some(shift.into());
        self
    }

    /// Arguments for the forward `plot -T` call.
    pub fn to_kwargs(&self) -> Kwargs {
        let mut kwargs = Kwargs::new().with("T", true);
        if let Some(x) = self.xshift.as_ref().filter(|s| s.is_given()) {
            kwargs.set("X", x.to_arg());
        }
        if let Some(y) = self.yshift.as_ref().filter(|s| s.is_given()) {
            kwargs.set("Y", y.to_arg());
        }
        kwargs
    }

    /// Error for the first given shift whose size cannot be known up front.
    pub fn check_reversible(&self) -> GmtResult<()> {
        for (option, shift) in [('X', &self.xshift), ('Y', &self.yshift)] {
            if let Some(Shift::Expr(expr)) = shift.as_ref().filter(|s| s.is_given()) {
                let expr = expr.trim();
                // The unit only scales the result; it never decides resolvability.
                if parse_shift(expr, LengthUnit::default()).is_none() {
                    return Err(GmtError::UnresolvedCommonOption {
                        option,
                        value: expr.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Arguments undoing shifts given in inches.
pub fn reversal_kwargs(saved_x: Option<f64>, saved_y: Option<f64>) -> Kwargs {
    let mut kwargs = Kwargs::new().with("T", true);
    if let Some(x) = saved_x {
        kwargs.set("X", format!("{}i", -x));
    }
    if let Some(y) = saved_y {
        kwargs.set("Y", format!("{}i", -y));
    }
    kwargs
}

impl<'p, P: SessionProvider> Figure<'p, P> {
    /// Shift the plot origin permanently.
    ///
    /// Later plotting on this figure is relative to the new origin.
    pub fn shift_origin(&mut self, offset: &OriginOffset) -> GmtResult<()> {
        self.activate()?;
        let args = build_arg_string(&offset.to_kwargs());
        debug!(figure = %self.name(), args = %args, "Shifting plot origin");
        self.call_module("plot", &args).map(|_| ())
    }

    /// Shift the plot origin until the returned guard is restored or dropped.
    ///
    /// The guard dereferences to the figure, so plotting continues through it.
    /// Offsets failing [`OriginOffset::check_reversible`] are rejected without
    /// any engine call.
    pub fn shift_origin_scope(
        &mut self,
        offset: &OriginOffset,
    ) -> GmtResult<ShiftedOrigin<'_, 'p, P>> {
        offset.check_reversible()?;
        self.activate()?;
        let args = build_arg_string(&offset.to_kwargs());
        debug!(figure = %self.name(), args = %args, "Shifting plot origin for scope");

        let (saved_x, saved_y) = with_session(self.provider(), |lib| {
            lib.call_module("plot", &args)?;
            let x = lib.get_common('X')?.shift();
            let y = lib.get_common('Y')?.shift();
            Ok((x, y))
        })?;

        Ok(ShiftedOrigin {
            figure: self,
            saved_x,
            saved_y,
            restored: false,
        })
    }

    /// Run `body` with the origin shifted and shift back afterwards.
    ///
    /// The reversal runs whether `body` succeeds, fails or panics. An error
    /// from `body` takes precedence over an error from the reversal.
    pub fn with_shifted_origin<T, F>(&mut self, offset: &OriginOffset, body: F) -> GmtResult<T>
    where
        F: FnOnce(&mut Figure<'p, P>) -> GmtResult<T>,
    {
        let mut shifted = self.shift_origin_scope(offset)?;
        let result = body(&mut *shifted);
        let restored = shifted.restore();
        let value = result?;
        restored?;
        Ok(value)
    }
}

/// Guard for a temporary origin shift.
#[must_use = "the origin is shifted back as soon as the guard is dropped"]
pub struct ShiftedOrigin<'f, 'p, P: SessionProvider> {
    figure: &'f mut Figure<'p, P>,
    saved_x: Option<f64>,
    saved_y: Option<f64>,
    restored: bool,
}

impl<'f, 'p, P: SessionProvider> ShiftedOrigin<'f, 'p, P> {
    /// Shift recorded by the session for each axis, in inches.
    pub fn saved_shift(&self) -> (Option<f64>, Option<f64>) {
        (self.saved_x, self.saved_y)
    }

    /// Shift the origin back now and report any error.
    pub fn restore(mut self) -> GmtResult<()> {
        self.restored = true;
        self.reverse()
    }

    fn reverse(&mut self) -> GmtResult<()> {
        let args = build_arg_string(&reversal_kwargs(self.saved_x, self.saved_y));
        debug!(figure = %self.figure.name(), args = %args, "Restoring plot origin");
        self.figure.activate()?;
        self.figure.call_module("plot", &args).map(|_| ())
    }
}

impl<'f, 'p, P: SessionProvider> Deref for ShiftedOrigin<'f, 'p, P> {
    type Target = Figure<'p, P>;

    fn deref(&self) -> &Self::Target {
        self.figure
    }
}

impl<'f, 'p, P: SessionProvider> DerefMut for ShiftedOrigin<'f, 'p, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.figure
    }
}

impl<'f, 'p, P: SessionProvider> Drop for ShiftedOrigin<'f, 'p, P> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        if let Err(e) = self.reverse() {
            error!(figure = %self.figure.name(), error = %e, "Failed to restore plot origin");
        }
    }
}
