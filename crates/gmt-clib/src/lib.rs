//! Session and module dispatch for the GMT engine.
//!
//! This crate is the seam between Rust code and the native engine. Callers
//! build option maps with [`Kwargs`], render them with [`build_arg_string`]
//! and hand them to a [`Session`] opened from a [`SessionProvider`].
//!
//! # Example
//!
//! ```ignore
//! use gmt_clib::{build_arg_string, with_session, GmtCli, Kwargs, SessionConfig};
//!
//! let gmt = GmtCli::begin(SessionConfig::from_env()?)?;
//! let args = build_arg_string(&Kwargs::new().with("T", true).with("X", "2c"));
//! with_session(&gmt, |lib| lib.call_module("plot", &args))?;
//! gmt.end()?;
//! ```
//!
//! The engine does the real work: rendering, downloads and caching of
//! remote files, projections. Nothing here reimplements it.

pub mod args;
pub mod cli;
pub mod common;
pub mod config;
pub mod session;
pub mod units;

pub use args::{build_arg_string, split_args, with_positional, ArgValue, Kwargs};
pub use cli::{CliSession, GmtCli};
pub use common::{CommonOptions, CommonValue};
pub use config::SessionConfig;
pub use session::{call_module, with_session, Session, SessionProvider};
pub use units::{parse_shift, LengthUnit};
