//! Deterministic simulated calibration source.
//!
//! Models a board warming from ambient toward a thermal asymptote while
//! its calibration coefficients drift with temperature: ADC offsets are
//! integers near mid-scale (2048), DAC offsets are small integers, and
//! gains stay near 1.0. Each recalibration advances the thermal model by
//! one step and takes a short, configurable latency, so a session against
//! the simulator paces like a (much faster) real device.
//!
//! The same seed always reproduces the same temperature trace and
//! coefficients.

use std::thread;
use std::time::Duration;

use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use tl_common::{CalibrationVector, Result};

use crate::CalibrationSource;

/// Tuning knobs for the simulated board.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// PRNG seed; equal seeds produce identical sessions.
    pub seed: u64,
    /// Board temperature at power-on, °C.
    pub ambient: f64,
    /// Temperature the board levels off at, °C.
    pub asymptote: f64,
    /// Fraction of the remaining gap closed per recalibration step.
    pub warm_rate: f64,
    /// Wall-clock cost of one recalibration call.
    pub recalibration_latency: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            ambient: 32.0,
            asymptote: 68.0,
            warm_rate: 0.002,
            recalibration_latency: Duration::from_millis(5),
        }
    }
}

/// Simulated warming board.
pub struct SimSource {
    config: SimConfig,
    rng: Xoshiro256PlusPlus,
    temperature: f64,
    adc_offset: [i32; 2],
    adc_gain: [f64; 2],
    dac_offset: [i32; 2],
    dac_gain: [f64; 2],
}

impl SimSource {
    pub fn new(config: SimConfig) -> Self {
        let rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        Self {
            temperature: config.ambient,
            adc_offset: [2048, 2048],
            adc_gain: [1.0, 1.0],
            dac_offset: [0, 0],
            dac_gain: [1.0, 1.0],
            rng,
            config,
        }
    }

    /// Advance the first-order thermal model by one step.
    fn warm(&mut self) {
        let gap = self.config.asymptote - self.temperature;
        let jitter = self.rng.random_range(-0.01..0.01);
        self.temperature += gap * self.config.warm_rate + jitter;
    }
}

impl CalibrationSource for SimSource {
    fn calibrate_adc(&mut self) -> Result<()> {
        thread::sleep(self.config.recalibration_latency);
        self.warm();
        let drift = self.temperature - 25.0;
        for ch in 0..2 {
            self.adc_offset[ch] = 2048 - (0.6 * drift).round() as i32 - ch as i32;
            self.adc_gain[ch] =
                1.0 + 4.0e-4 * drift + self.rng.random_range(-1.0e-5..1.0e-5);
        }
        Ok(())
    }

    fn calibrate_dac(&mut self) -> Result<()> {
        thread::sleep(self.config.recalibration_latency);
        let drift = self.temperature - 25.0;
        for ch in 0..2 {
            self.dac_offset[ch] = (0.3 * drift).round() as i32 + ch as i32;
            self.dac_gain[ch] =
                1.0 - 2.5e-4 * drift + self.rng.random_range(-1.0e-5..1.0e-5);
        }
        Ok(())
    }

    fn board_temperature(&mut self) -> Result<f64> {
        // The temperature sensor reports in centidegree steps.
        Ok((self.temperature * 100.0).round() / 100.0)
    }

    fn calibration_vector(&mut self) -> Result<CalibrationVector> {
        Ok(CalibrationVector::from_channels(
            self.adc_offset,
            self.adc_gain,
            self.dac_offset,
            self.dac_gain,
        ))
    }
}

impl Drop for SimSource {
    fn drop(&mut self) {
        tracing::debug!("simulated device released");
    }
}
