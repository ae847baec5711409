//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS subset
//! used on receipts.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, feed, cut, cash drawer)
//! - [`text`]: Text styling (alignment, bold, underline, size)
//!
//! ## Usage Example
//!
//! ```
//! use struk::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//!
//! // Set text style
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold(false));
//!
//! // Feed and cut
//! data.extend(commands::feed_lines(3));
//! data.extend(commands::cut_full());
//!
//! // Send `data` to printer via transport...
//! ```

pub mod commands;
pub mod text;
