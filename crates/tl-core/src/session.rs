//! The bounded sampling session.
//!
//! Owns the table and the interrupt flag for the duration of a run, so no
//! global mutable state is shared with the signal handler. Each iteration
//! recalibrates both converter paths, reads the board temperature and the
//! freshly computed coefficients, and records them; coefficients are
//! temperature-dependent, so they are recomputed every iteration before
//! being read. The loop is best-effort: no fixed sample rate, bounded
//! only by the wall-clock budget, the temperature threshold, and the
//! interrupt flag.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use tl_common::{CalibrationTable, Result};
use tl_device::CalibrationSource;

use crate::interrupt::InterruptFlag;
use crate::progress::ProgressTracker;

/// Immutable per-run settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Sampling stops once the board temperature reaches this, °C.
    pub max_temperature: f64,
    /// Session wall-clock budget, whole minutes.
    pub timeout_minutes: u64,
    /// Output entry cap; `<= 0` keeps every entry.
    pub max_values: i64,
    /// Output file path.
    pub output: PathBuf,
    /// Merge with an existing file before sampling.
    pub append: bool,
}

/// How a sampling session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The wall-clock budget elapsed.
    TimedOut,
    /// The board reached the temperature threshold. The triggering
    /// sample is not recorded.
    ThresholdReached,
    /// The interrupt flag fired.
    Interrupted,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimedOut => write!(f, "timed_out"),
            Self::ThresholdReached => write!(f, "threshold_reached"),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Run context for one sampling session.
pub struct Session {
    config: SessionConfig,
    table: CalibrationTable,
    interrupt: InterruptFlag,
}

impl Session {
    /// `table` may already be seeded by the merge loader.
    pub fn new(config: SessionConfig, table: CalibrationTable, interrupt: InterruptFlag) -> Self {
        Self {
            config,
            table,
            interrupt,
        }
    }

    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    pub fn into_table(self) -> CalibrationTable {
        self.table
    }

    /// Drive the sampling loop until timeout, threshold, or interrupt.
    ///
    /// A device failure ends the session as an error without recording
    /// the failing iteration; the accumulated table stays available to
    /// the caller for a best-effort flush.
    pub fn run(&mut self, source: &mut dyn CalibrationSource) -> Result<SessionEnd> {
        let started = Instant::now();
        let mut progress = ProgressTracker::new();
        progress.notice(self.config.timeout_minutes, &self.table);
        let mut elapsed_notices: u64 = 1;

        let end = loop {
            if self.interrupt.is_fired() {
                break SessionEnd::Interrupted;
            }

            let elapsed = started.elapsed();
            if elapsed.as_secs() / 60 >= self.config.timeout_minutes {
                break SessionEnd::TimedOut;
            }
            if elapsed.as_secs_f64() / 60.0 >= elapsed_notices as f64 {
                progress.notice(self.config.timeout_minutes - elapsed_notices, &self.table);
                elapsed_notices += 1;
            }

            source.calibrate_adc()?;
            source.calibrate_dac()?;

            let temperature = source.board_temperature()?;
            let vector = source.calibration_vector()?;
            if temperature >= self.config.max_temperature {
                break SessionEnd::ThresholdReached;
            }
            self.table.insert(temperature, vector);
        };

        self.interrupt.complete();
        tracing::info!(end = %end, entries = self.table.len(), "sampling session ended");
        Ok(end)
    }
}
