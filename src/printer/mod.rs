//! # Printer Module
//!
//! This module provides printer-side configuration.
//!
//! ## Modules
//!
//! - [`config`]: Serial line settings

pub mod config;

pub use config::{Parity, SerialConfig};
