//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting commands used on receipts.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | Underlined text |
//! | Alignment | ESC a n | Left / center / right |
//! | Size | GS ! n | 1x-8x width and height |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use super::commands::{ESC, GS};
use crate::error::{Result, StrukError};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Behavior
///
/// - Only takes effect at the start of a line
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use struk::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
///
/// `n` is exactly 1 (on) or 0 (off).
#[inline]
pub fn bold(enabled: bool) -> Vec<u8> {
    vec![ESC, b'E', enabled as u8]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// # Turn Underline Mode On/Off (ESC - n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
///
/// Only the 1-dot underline is used; `n` is exactly 1 (on) or 0 (off).
#[inline]
pub fn underline(enabled: bool) -> Vec<u8> {
    vec![ESC, b'-', enabled as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Smallest character magnification
pub const MIN_SCALE: u8 = 1;

/// Largest character magnification
pub const MAX_SCALE: u8 = 8;

/// # Select Character Size (GS ! n)
///
/// Sets the character width and height magnification.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
///
/// ## Parameter Byte
///
/// ```text
/// bit  7 6 5 4 | 3 2 1 0
///      width-1 | height-1
/// ```
///
/// ## Errors
///
/// Both multipliers must be in `1..=8`; anything else would set bits the
/// command does not define and is rejected with `InvalidParameter`.
///
/// ## Example
///
/// ```
/// use struk::protocol::text::size;
///
/// assert_eq!(size(2, 2).unwrap(), vec![0x1D, 0x21, 0x11]);
/// assert!(size(0, 1).is_err());
/// ```
pub fn size(width: u8, height: u8) -> Result<Vec<u8>> {
    let w = check_scale("width", width)?;
    let h = check_scale("height", height)?;
    Ok(vec![GS, b'!', ((w - 1) << 4) | (h - 1)])
}

fn check_scale(name: &str, value: u8) -> Result<u8> {
    if (MIN_SCALE..=MAX_SCALE).contains(&value) {
        Ok(value)
    } else {
        Err(StrukError::InvalidParameter(format!(
            "text {} must be {}-{}, got {}",
            name, MIN_SCALE, MAX_SCALE, value
        )))
    }
}
