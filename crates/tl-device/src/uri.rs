//! Device locator parsing.
//!
//! Locators follow the context-uri conventions of the device library:
//! `auto` discovers the first attached device, `ip:<host>` and
//! `usb:<port>` name a transport, and `sim[:<seed>]` names the in-tree
//! simulator.

use std::fmt;
use std::str::FromStr;

use tl_common::{Error, Result};

/// A parsed device locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceUri {
    /// Discover the first attached device.
    Auto,
    /// The deterministic simulator, optionally seeded.
    Sim { seed: Option<u64> },
    /// Network transport, e.g. `ip:192.168.2.1`.
    Ip(String),
    /// USB transport, e.g. `usb:1.2.3`.
    Usb(String),
}

impl FromStr for DeviceUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "auto" {
            return Ok(DeviceUri::Auto);
        }
        if s == "sim" {
            return Ok(DeviceUri::Sim { seed: None });
        }
        if let Some(seed) = s.strip_prefix("sim:") {
            let seed = seed
                .parse::<u64>()
                .map_err(|_| Error::InvalidUri(format!("bad simulator seed `{seed}`")))?;
            return Ok(DeviceUri::Sim { seed: Some(seed) });
        }
        if let Some(host) = s.strip_prefix("ip:") {
            if host.is_empty() {
                return Err(Error::InvalidUri(s.to_string()));
            }
            return Ok(DeviceUri::Ip(host.to_string()));
        }
        if let Some(port) = s.strip_prefix("usb:") {
            return Ok(DeviceUri::Usb(port.to_string()));
        }
        Err(Error::InvalidUri(s.to_string()))
    }
}

impl fmt::Display for DeviceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceUri::Auto => write!(f, "auto"),
            DeviceUri::Sim { seed: None } => write!(f, "sim"),
            DeviceUri::Sim { seed: Some(seed) } => write!(f, "sim:{seed}"),
            DeviceUri::Ip(host) => write!(f, "ip:{host}"),
            DeviceUri::Usb(port) => write!(f, "usb:{port}"),
        }
    }
}
