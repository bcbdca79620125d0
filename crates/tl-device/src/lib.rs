//! The calibration source seam.
//!
//! A [`CalibrationSource`] is the black-box device the sampler drives:
//! it can recalibrate its ADC and DAC paths, report the board
//! temperature, and report the calibration coefficients the last
//! recalibration computed. Hardware transports (`ip:`, `usb:`) are
//! provided by an external driver crate implementing this trait; this
//! crate ships the deterministic simulator used for development and
//! tests.
//!
//! The device handle is exclusively owned for the whole session and
//! released by `Drop` on every exit path.

pub mod sim;
pub mod uri;

use tl_common::{CalibrationVector, Error, Result};

pub use sim::{SimConfig, SimSource};
pub use uri::DeviceUri;

/// A live device the sampling session reads from.
pub trait CalibrationSource {
    /// Recompute the ADC path calibration coefficients at the current
    /// board temperature.
    fn calibrate_adc(&mut self) -> Result<()>;

    /// Recompute the DAC path calibration coefficients at the current
    /// board temperature.
    fn calibrate_dac(&mut self) -> Result<()>;

    /// Current board temperature in degrees Celsius.
    fn board_temperature(&mut self) -> Result<f64>;

    /// The coefficients computed by the most recent recalibration.
    fn calibration_vector(&mut self) -> Result<CalibrationVector>;
}

/// Open the device named by `uri`.
pub fn open(uri: &DeviceUri) -> Result<Box<dyn CalibrationSource>> {
    tracing::debug!(locator = %uri, "opening device");
    match uri {
        DeviceUri::Auto => {
            // Hardware discovery lives in the driver crate; with no driver
            // backend linked in, discovery never yields a device. The
            // simulator must be named explicitly so a missing real device
            // stays an error.
            Err(Error::NoDeviceFound)
        }
        DeviceUri::Sim { seed } => {
            let config = match seed {
                Some(seed) => SimConfig {
                    seed: *seed,
                    ..SimConfig::default()
                },
                None => SimConfig::default(),
            };
            tracing::debug!(seed = config.seed, "opening simulated device");
            Ok(Box::new(SimSource::new(config)))
        }
        DeviceUri::Ip(_) => Err(Error::BackendUnavailable {
            scheme: "ip".to_string(),
        }),
        DeviceUri::Usb(_) => Err(Error::BackendUnavailable {
            scheme: "usb".to_string(),
        }),
    }
}
