//! Common types and utilities shared across the GMT binding crates.

pub mod error;
pub mod grid;
pub mod region;

pub use error::{GmtError, GmtResult};
pub use grid::{GridArray, GridHeader, GridType, Registration};
pub use region::{Region, RegionParseError};
