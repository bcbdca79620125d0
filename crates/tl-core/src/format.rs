//! Serialization to the on-disk LUT text format.
//!
//! The file is the literal `cal,temp_lut=` prefix followed by a flat
//! comma-separated stream: each entry is its temperature key then the 8
//! calibration values, entries sorted by key ascending, no trailing
//! comma. Every number is rounded to 6 decimal digits; a value whose
//! rounded form is integral prints as an integer literal. The decision is
//! made per value here at serialization time; storage is `f64` throughout
//! the pipeline.

use std::fmt;
use std::fs;
use std::path::Path;

use tl_common::{CalibrationTable, Result};

/// Literal prefix the firmware expects at the start of the file.
pub const PREFIX: &str = "cal,temp_lut=";

/// Conventional file name the device firmware looks for.
pub const DEFAULT_FILE_NAME: &str = "calib-temp-lut.ini";

const ROUND_SCALE: f64 = 1e6;

/// A number tagged with its printed form, decided at serialization time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    /// Round to 6 decimal digits and classify.
    pub fn from_f64(value: f64) -> Self {
        let rounded = (value * ROUND_SCALE).round() / ROUND_SCALE;
        if rounded.fract() == 0.0 && rounded.abs() < i64::MAX as f64 {
            Numeric::Integer(rounded as i64)
        } else {
            Numeric::Float(rounded)
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(value) => write!(f, "{value}"),
            Numeric::Float(value) => {
                let fixed = format!("{value:.6}");
                f.write_str(fixed.trim_end_matches('0').trim_end_matches('.'))
            }
        }
    }
}

/// Render the table to its on-disk form.
pub fn render(table: &CalibrationTable) -> String {
    let mut out = String::from(PREFIX);
    for (key, vector) in table.iter_sorted() {
        out.push_str(&Numeric::from_f64(key).to_string());
        for value in vector.values() {
            out.push(',');
            out.push_str(&Numeric::from_f64(*value).to_string());
        }
        out.push(',');
    }
    if out.ends_with(',') {
        out.pop();
    }
    out
}

/// Serialize `table` to `path`, fully rewriting the file.
pub fn write_file(path: &Path, table: &CalibrationTable) -> Result<()> {
    fs::write(path, render(table))?;
    tracing::debug!(path = %path.display(), entries = table.len(), "table written");
    Ok(())
}
