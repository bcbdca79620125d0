//! Per-minute progress notices for the operator.

use tl_common::CalibrationTable;

use crate::format::Numeric;

/// Tracks which temperature keys have already been announced.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    announced: Vec<f64>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys present in `table` that have not been announced yet, in
    /// insertion order. Each key is reported exactly once per session.
    pub fn fresh_keys(&mut self, table: &CalibrationTable) -> Vec<f64> {
        let fresh: Vec<f64> = table
            .keys()
            .filter(|key| !self.announced.contains(key))
            .collect();
        self.announced.extend(&fresh);
        fresh
    }

    /// Print the periodic notice: newly observed temperatures since the
    /// previous notice, and the remaining session minutes.
    pub fn notice(&mut self, minutes_left: u64, table: &CalibrationTable) {
        let fresh = self.fresh_keys(table);
        if !fresh.is_empty() {
            let list = fresh
                .iter()
                .map(|key| Numeric::from_f64(*key).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("New calibration temperatures found: {list}");
        }
        println!("Time left: {minutes_left} min");
    }
}
