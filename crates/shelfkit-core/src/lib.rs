//! # ShelfKit Core
//!
//! Core types and utilities shared by the ShelfKit crates.
//! Provides the error taxonomy of the grid configurator, the fixed
//! grid constants and millimeter/inch display helpers.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{FormatError, PlacementError, PresetError, StorageError};
pub use units::MeasurementSystem;
