//! Temperature LUT shared types and errors.
//!
//! This crate provides the foundational types shared across the pipeline:
//! - The 8-element calibration vector read from a device
//! - The insertion-ordered calibration table keyed by board temperature
//! - The unified error type

pub mod error;
pub mod table;
pub mod vector;

pub use error::{Error, Result};
pub use table::CalibrationTable;
pub use vector::{CalibrationVector, VECTOR_LEN};
