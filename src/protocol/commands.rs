//! # ESC/POS Printer Control Commands
//!
//! This module implements the printer-control subset of the ESC/POS command
//! set used by generic 58mm/80mm thermal receipt printers.
//!
//! ## Protocol Overview
//!
//! ESC/POS commands are short byte sequences starting with a prefix byte
//! followed by a command byte and zero or more parameter bytes:
//!
//! - `ESC` (0x1B) prefixed: initialize, bold, underline, alignment, feed, drawer
//! - `GS` (0x1D) prefixed: character size, paper cut
//!
//! Everything that is not a command is printed as text. The printer is
//! stateful: a style command affects all text sent after it until changed
//! or until the printer is initialized again.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size (`GS !`) and the cutter (`GS V`).
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
///
/// Terminates every text line of a receipt.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets the printer to its power-on mode.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use struk::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer and feeds the paper `n` lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
///
/// ## Parameters
///
/// - `n`: Number of lines (0-255). The parameter is a single byte, so
///   larger counts cannot be expressed; see [`crate::ir::PrintIntent::feed_lines`]
///   for the checked constructor.
///
/// ## Example
///
/// ```
/// use struk::protocol::commands;
///
/// assert_eq!(commands::feed_lines(3), vec![0x1B, 0x64, 3]);
/// ```
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Full Cut (GS V 0)
///
/// Cuts the paper completely at the current position.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 0   |
/// | Hex     | 1D 56 00 |
/// | Decimal | 29 86 0  |
///
/// ## Behavior
///
/// The cut happens at the cutter, not at the print head, so the last
/// printed lines must be fed past the blade first (`ESC d 3` is typical).
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![GS, b'V', 0]
}

// ============================================================================
// CASH DRAWER
// ============================================================================

/// # Generate Pulse (ESC p m t1 t2)
///
/// Sends a kick-out pulse to the cash drawer connector.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC p 0 t1 t2  |
/// | Hex     | 1B 70 00 19 FA |
///
/// ## Parameters (fixed)
///
/// - `m = 0`: drawer kick-out connector pin 2
/// - `t1 = 0x19`: ON time, 25 × 2ms = 50ms
/// - `t2 = 0xFA`: OFF time, 250 × 2ms = 500ms
#[inline]
pub fn open_drawer() -> Vec<u8> {
    vec![ESC, b'p', 0x00, 0x19, 0xFA]
}

// ============================================================================
// TESTS
// ============================================================================
