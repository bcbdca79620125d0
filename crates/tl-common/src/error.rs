//! Error types for the temperature LUT pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the temperature LUT pipeline.
#[derive(Error, Debug)]
pub enum Error {
    // Connection errors
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("no device found")]
    NoDeviceFound,

    #[error("invalid device uri: {0}")]
    InvalidUri(String),

    #[error("no backend for `{scheme}:` device locators is available in this build")]
    BackendUnavailable { scheme: String },

    // Table file errors
    #[error("malformed table file {path}: {reason}")]
    MalformedTable { path: PathBuf, reason: String },

    // Sampling errors
    #[error("recalibration failed: {0}")]
    Calibration(String),

    #[error("device read failed: {0}")]
    Sample(String),

    // Lifecycle errors
    #[error("failed to install interrupt handler: {0}")]
    Interrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
