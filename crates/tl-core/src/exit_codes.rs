//! Exit codes for the templut CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//! An interrupt-triggered flush is a success, not an error.

use tl_common::Error;

/// Exit codes for templut runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Table written (normal completion or interrupt-triggered flush)
    Success = 0,

    /// Device open or discovery failure; nothing written
    ConnectionError = 10,

    /// Malformed existing table file in append mode; nothing written
    ParseError = 11,

    /// Device read or recalibration failure mid-session, after the
    /// accumulated table was flushed best-effort
    SampleError = 12,

    /// Output file I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Map a pipeline error to its exit code.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Connection(_)
            | Error::NoDeviceFound
            | Error::InvalidUri(_)
            | Error::BackendUnavailable { .. } => ExitCode::ConnectionError,
            Error::MalformedTable { .. } => ExitCode::ParseError,
            Error::Calibration(_) | Error::Sample(_) => ExitCode::SampleError,
            Error::Io(_) => ExitCode::IoError,
            Error::Interrupt(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
