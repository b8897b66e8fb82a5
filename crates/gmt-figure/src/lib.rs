//! Figure handle for the GMT engine.
//!
//! [`Figure`] wraps module calls that draw on a named figure of a
//! modern-mode session. Besides thin pass-throughs (`basemap`, `savefig`)
//! it controls the plot origin:
//!
//! - [`Figure::shift_origin`] moves the origin for the rest of the figure.
//! - [`Figure::shift_origin_scope`] returns a [`ShiftedOrigin`] guard that
//!   moves it back when restored or dropped.
//! - [`Figure::with_shifted_origin`] runs a closure with the origin moved.
//!
//! ```ignore
//! let gmt = GmtCli::begin(SessionConfig::from_env()?)?;
//! let mut fig = Figure::new(&gmt);
//! let frame = Kwargs::new().with("R", "0/10/0/10").with("J", "X10c/10c").with("B", true);
//! fig.basemap(&frame)?;
//! fig.with_shifted_origin(&OriginOffset::new().x(12), |fig| fig.basemap(&frame))?;
//! fig.savefig("map.png")?;
//! ```

pub mod figure;
pub mod shift;

pub use figure::Figure;
pub use shift::{reversal_kwargs, OriginOffset, Shift, ShiftedOrigin};
