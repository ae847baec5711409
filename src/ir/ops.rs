//! # Print Intents
//!
//! This module defines the intermediate representation for receipt printing.
//! A receipt is first laid out as a sequence of intents, each a single
//! semantic print instruction, and only then compiled to ESC/POS bytes.
//!
//! ```text
//! ReceiptDocument → Program (Vec<PrintIntent>) → encode → byte buffers → sink
//! ```
//!
//! Each intent encodes to exactly one byte buffer, so the program is also the
//! emission plan: buffer `i` on the wire is `encode(&program.intents[i])`.

use crate::error::{Result, StrukError};
use crate::protocol::commands::LF;
use crate::protocol::text::{Alignment, MAX_SCALE, MIN_SCALE};

/// A single print instruction, prior to byte encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintIntent {
    /// Reset the printer (ESC @).
    Initialize,

    /// Enable/disable bold.
    SetBold(bool),

    /// Enable/disable underline.
    SetUnderline(bool),

    /// Set text alignment.
    SetAlign(Alignment),

    /// Character magnification, each in 1..=8.
    ///
    /// Build through [`PrintIntent::text_size`] to get the range check up
    /// front; the encoder checks again either way.
    SetTextSize { width: u8, height: u8 },

    /// Print and feed `n` lines.
    FeedLines(u8),

    /// Full paper cut.
    Cut,

    /// Cash drawer kick pulse.
    OpenDrawer,

    /// Text, sent as UTF-8 with no escaping. Carries its own newline.
    RawText(String),
}

impl PrintIntent {
    /// Checked `SetTextSize`.
    ///
    /// ```
    /// use struk::ir::PrintIntent;
    ///
    /// assert!(PrintIntent::text_size(2, 2).is_ok());
    /// assert!(PrintIntent::text_size(9, 1).is_err());
    /// ```
    pub fn text_size(width: u8, height: u8) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if !(MIN_SCALE..=MAX_SCALE).contains(&value) {
                return Err(StrukError::InvalidParameter(format!(
                    "text {} must be {}-{}, got {}",
                    name, MIN_SCALE, MAX_SCALE, value
                )));
            }
        }
        Ok(PrintIntent::SetTextSize { width, height })
    }

    /// Checked `FeedLines`: the count must fit the single parameter byte.
    pub fn feed_lines(count: u32) -> Result<Self> {
        u8::try_from(count)
            .map(PrintIntent::FeedLines)
            .map_err(|_| {
                StrukError::InvalidParameter(format!("feed count must be 0-255, got {}", count))
            })
    }

    /// Text intent.
    pub fn text(s: impl Into<String>) -> Self {
        PrintIntent::RawText(s.into())
    }

    /// Text intent terminated by `LF`, which prints the line.
    pub fn line(s: impl AsRef<str>) -> Self {
        let mut text = String::from(s.as_ref());
        text.push(char::from(LF));
        PrintIntent::RawText(text)
    }
}

/// An ordered intent sequence for one print job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub intents: Vec<PrintIntent>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self {
            intents: Vec::new(),
        }
    }

    /// Create a program with an initial Initialize intent.
    pub fn with_init() -> Self {
        Self {
            intents: vec![PrintIntent::Initialize],
        }
    }

    /// Add an intent to the program.
    pub fn push(&mut self, intent: PrintIntent) {
        self.intents.push(intent);
    }

    /// Add multiple intents to the program.
    pub fn extend(&mut self, intents: impl IntoIterator<Item = PrintIntent>) {
        self.intents.extend(intents);
    }

    /// Get the number of intents in the program.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Iterate over intents.
    pub fn iter(&self) -> impl Iterator<Item = &PrintIntent> {
        self.intents.iter()
    }
}

impl FromIterator<PrintIntent> for Program {
    fn from_iter<T: IntoIterator<Item = PrintIntent>>(iter: T) -> Self {
        Self {
            intents: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = PrintIntent;
    type IntoIter = std::vec::IntoIter<PrintIntent>;

    fn into_iter(self) -> Self::IntoIter {
        self.intents.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a PrintIntent;
    type IntoIter = std::slice::Iter<'a, PrintIntent>;

    fn into_iter(self) -> Self::IntoIter {
        self.intents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_with_init() {
        let program = Program::with_init();
        assert_eq!(program.len(), 1);
        assert_eq!(program.intents[0], PrintIntent::Initialize);
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::new();
        program.push(PrintIntent::Initialize);
        program.push(PrintIntent::SetBold(true));
        program.push(PrintIntent::text("Hello"));
        assert_eq!(program.len(), 3);
    }

    #[test]
    fn test_text_size_checked() {
        assert_eq!(
            PrintIntent::text_size(1, 8).unwrap(),
            PrintIntent::SetTextSize {
                width: 1,
                height: 8
            }
        );
        assert!(matches!(
            PrintIntent::text_size(0, 2),
            Err(StrukError::InvalidParameter(_))
        ));
        assert!(matches!(
            PrintIntent::text_size(2, 9),
            Err(StrukError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_feed_lines_checked() {
        assert_eq!(PrintIntent::feed_lines(0).unwrap(), PrintIntent::FeedLines(0));
        assert_eq!(
            PrintIntent::feed_lines(255).unwrap(),
            PrintIntent::FeedLines(255)
        );
        assert!(matches!(
            PrintIntent::feed_lines(256),
            Err(StrukError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_line_appends_newline() {
        assert_eq!(
            PrintIntent::line("Toko Budi"),
            PrintIntent::RawText("Toko Budi\n".into())
        );
        assert_eq!(PrintIntent::line(""), PrintIntent::RawText("\n".into()));
    }
}
