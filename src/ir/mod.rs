//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for receipt printing. The IR is a
//! sequence of [`PrintIntent`]s that sits between receipt layout and raw
//! ESC/POS protocol bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐     ┌──────────┐
//! │   Receipt   │ ──► │     IR      │ ──► │ Codegen  │ ──► │   Sink   │
//! │   layout    │     │  (Program)  │     │ (bytes)  │     │          │
//! └─────────────┘     └─────────────┘     └──────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use struk::ir::{PrintIntent, Program};
//! use struk::protocol::text::Alignment;
//!
//! let mut program = Program::with_init();
//! program.push(PrintIntent::SetAlign(Alignment::Center));
//! program.push(PrintIntent::SetBold(true));
//! program.push(PrintIntent::line("HELLO"));
//! program.push(PrintIntent::Cut);
//!
//! let bytes = program.to_bytes().unwrap();
//! assert!(bytes.starts_with(&[0x1B, 0x40]));
//! ```

mod codegen;
mod ops;
mod preview;

pub use codegen::encode;
pub use ops::*;
pub use preview::CUT_MARKER;
