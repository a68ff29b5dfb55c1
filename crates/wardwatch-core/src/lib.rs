//! Domain types for Wardwatch, the hospital operations backend: units,
//! staff, guardia schedules and coverage, beds, patients, and the supporting
//! operational records, plus the [`store::OpsStore`] trait that backends
//! implement.
//!
//! No HTTP or SQL lives here.

#[macro_use]
mod label;

pub mod bed;
pub mod bootstrap;
pub mod census;
pub mod enums;
pub mod error;
pub mod ops;
pub mod patient;
pub mod schedule;
pub mod staff;
pub mod store;
pub mod unit;

pub use error::{Error, ErrorKind, Result};
