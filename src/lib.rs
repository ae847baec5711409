//! # Struk - ESC/POS Receipt Printing
//!
//! Struk turns structured sales receipts into ESC/POS byte streams for
//! 58mm thermal printers (32 columns). It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders
//! - **Intent IR**: inspectable print programs, encoded to exact bytes
//! - **Receipt layout**: fixed-width item and total lines, locale-aware money
//! - **Transport**: a byte-sink abstraction plus a raw serial backend
//!
//! ## Quick Start
//!
//! ```no_run
//! use struk::{
//!     PrinterSession, ReceiptDocument, ReceiptFormatter,
//!     printer::SerialConfig,
//!     transport::SerialTransport,
//! };
//!
//! let json = std::fs::read_to_string("receipt.json")?;
//! let doc = ReceiptDocument::from_json(&json)?;
//!
//! // Open connection to printer
//! let transport = SerialTransport::open("/dev/ttyUSB0", &SerialConfig::default())?;
//!
//! // Print and release the device
//! let mut session = PrinterSession::new(transport);
//! session.print_receipt(&doc, &ReceiptFormatter::new())?;
//! session.close()?;
//!
//! # Ok::<(), struk::StrukError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`ir`] | Print intents, codegen, text preview |
//! | [`receipt`] | Receipt document and layout |
//! | [`locale`] | Currency and timestamp formatting |
//! | [`session`] | Print sessions and emission |
//! | [`transport`] | Byte sinks |
//! | [`printer`] | Serial configuration |
//! | [`error`] | Error types |

pub mod error;
pub mod ir;
pub mod locale;
pub mod money;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod session;
pub mod transport;

// Re-exports for convenience
pub use error::StrukError;
pub use ir::{PrintIntent, Program, encode};
pub use locale::{CurrencyFormatter, Locale, TimestampFormatter};
pub use money::Money;
pub use receipt::{LineItem, ReceiptDocument, ReceiptFormatter, build_intent_sequence};
pub use session::{PrinterSession, print_receipt};
pub use transport::ByteSink;
