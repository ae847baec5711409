//! # Printer Configuration
//!
//! Serial line settings for ESC/POS receipt printers.
//!
//! ## Defaults
//!
//! | Setting | Value |
//! |---------|-------|
//! | Baud rate | 9600 |
//! | Data bits | 8 |
//! | Stop bits | 1 |
//! | Parity | none |
//!
//! 9600 8N1 is the factory setting of most USB-serial and RS-232 thermal
//! printers; check the self-test printout (hold FEED while powering on) if
//! output is garbled.
//!
//! ## Usage
//!
//! ```
//! use struk::printer::{Parity, SerialConfig};
//!
//! let config = SerialConfig {
//!     baud_rate: 19200,
//!     ..SerialConfig::default()
//! };
//! assert_eq!(config.parity, Parity::None);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, StrukError};

/// Baud rates the serial transport can configure.
pub const SUPPORTED_BAUD_RATES: [u32; 9] =
    [1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200, 230400];

/// Parity bit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    #[default]
    None,
    Even,
    Odd,
}

impl FromStr for Parity {
    type Err = StrukError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "n" => Ok(Parity::None),
            "even" | "e" => Ok(Parity::Even),
            "odd" | "o" => Ok(Parity::Odd),
            _ => Err(StrukError::InvalidParameter(format!(
                "unknown parity '{}'",
                s
            ))),
        }
    }
}

/// # Serial Line Settings
///
/// All fields have serde defaults, so a partial JSON object such as
/// `{"baudRate": 19200}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SerialConfig {
    pub baud_rate: u32,
    /// 5-8
    pub data_bits: u8,
    /// 1 or 2
    pub stop_bits: u8,
    pub parity: Parity,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            data_bits: 8,
            stop_bits: 1,
            parity: Parity::None,
        }
    }
}

impl SerialConfig {
    /// Check every field against what the serial transport can set.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_BAUD_RATES.contains(&self.baud_rate) {
            return Err(StrukError::InvalidParameter(format!(
                "unsupported baud rate {}",
                self.baud_rate
            )));
        }
        if !(5..=8).contains(&self.data_bits) {
            return Err(StrukError::InvalidParameter(format!(
                "data bits must be 5-8, got {}",
                self.data_bits
            )));
        }
        if !(1..=2).contains(&self.stop_bits) {
            return Err(StrukError::InvalidParameter(format!(
                "stop bits must be 1 or 2, got {}",
                self.stop_bits
            )));
        }
        Ok(())
    }
}
