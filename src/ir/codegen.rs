//! # Code Generation
//!
//! Converts print intents to ESC/POS protocol bytes.

use super::ops::{PrintIntent, Program};
use crate::error::Result;
use crate::protocol::{commands, text};

/// Encode a single intent to its byte buffer.
///
/// Pure: no I/O and no state. Text is emitted as UTF-8 verbatim, including
/// any ESC/GS bytes it happens to contain.
///
/// ## Errors
///
/// `InvalidParameter` for a `SetTextSize` outside 1..=8.
///
/// ## Example
///
/// ```
/// use struk::ir::{encode, PrintIntent};
///
/// assert_eq!(encode(&PrintIntent::Cut).unwrap(), vec![0x1D, 0x56, 0x00]);
/// ```
pub fn encode(intent: &PrintIntent) -> Result<Vec<u8>> {
    let bytes = match intent {
        // ===== Printer Control =====
        PrintIntent::Initialize => commands::init(),
        PrintIntent::FeedLines(n) => commands::feed_lines(*n),
        PrintIntent::Cut => commands::cut_full(),
        PrintIntent::OpenDrawer => commands::open_drawer(),

        // ===== Style Changes =====
        PrintIntent::SetBold(enabled) => text::bold(*enabled),
        PrintIntent::SetUnderline(enabled) => text::underline(*enabled),
        PrintIntent::SetAlign(align) => text::align(*align),
        PrintIntent::SetTextSize { width, height } => text::size(*width, *height)?,

        // ===== Content =====
        PrintIntent::RawText(s) => s.as_bytes().to_vec(),
    };
    Ok(bytes)
}

impl Program {
    /// Encode every intent, one buffer per intent, in program order.
    pub fn emissions(&self) -> Result<Vec<Vec<u8>>> {
        self.intents.iter().map(encode).collect()
    }

    /// Compile the whole program to one contiguous byte stream.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for intent in &self.intents {
            out.extend(encode(intent)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrukError;
    use crate::protocol::text::Alignment;

    #[test]
    fn test_fixed_sequences() {
        assert_eq!(encode(&PrintIntent::Initialize).unwrap(), vec![0x1B, 0x40]);
        assert_eq!(encode(&PrintIntent::Cut).unwrap(), vec![0x1D, 0x56, 0x00]);
        assert_eq!(
            encode(&PrintIntent::OpenDrawer).unwrap(),
            vec![0x1B, 0x70, 0x00, 0x19, 0xFA]
        );
    }

    #[test]
    fn test_flags_encode_as_one_or_zero() {
        for b in [true, false] {
            let bold = encode(&PrintIntent::SetBold(b)).unwrap();
            let underline = encode(&PrintIntent::SetUnderline(b)).unwrap();
            assert_eq!(bold, vec![0x1B, 0x45, b as u8]);
            assert_eq!(underline, vec![0x1B, 0x2D, b as u8]);
        }
    }

    #[test]
    fn test_align_codes() {
        let codes: Vec<u8> = [Alignment::Left, Alignment::Center, Alignment::Right]
            .into_iter()
            .map(|a| encode(&PrintIntent::SetAlign(a)).unwrap()[2])
            .collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn test_text_size() {
        let bytes = encode(&PrintIntent::SetTextSize {
            width: 2,
            height: 2,
        })
        .unwrap();
        assert_eq!(bytes, vec![0x1D, 0x21, 0x11]);
    }

    #[test]
    fn test_text_size_rejected_at_encode() {
        // Struct literal bypasses the checked constructor
        let intent = PrintIntent::SetTextSize {
            width: 9,
            height: 1,
        };
        assert!(matches!(
            encode(&intent),
            Err(StrukError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_feed() {
        assert_eq!(
            encode(&PrintIntent::FeedLines(3)).unwrap(),
            vec![0x1B, 0x64, 0x03]
        );
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let bytes = encode(&PrintIntent::text("a\x1Bb\x1Dc")).unwrap();
        assert_eq!(bytes, vec![b'a', 0x1B, b'b', 0x1D, b'c']);
    }

    #[test]
    fn test_raw_text_utf8() {
        let bytes = encode(&PrintIntent::text("é")).unwrap();
        assert_eq!(bytes, vec![0xC3, 0xA9]);
    }

    #[test]
    fn test_program_to_bytes() {
        let mut program = Program::with_init();
        program.push(PrintIntent::SetBold(true));
        program.push(PrintIntent::line("HI"));
        program.push(PrintIntent::Cut);

        assert_eq!(
            program.to_bytes().unwrap(),
            vec![0x1B, 0x40, 0x1B, 0x45, 0x01, b'H', b'I', b'\n', 0x1D, 0x56, 0x00]
        );
        assert_eq!(program.emissions().unwrap().len(), 4);
    }

    #[test]
    fn test_program_invalid_intent_fails_whole_compile() {
        let mut program = Program::with_init();
        program.push(PrintIntent::SetTextSize {
            width: 0,
            height: 0,
        });
        assert!(program.to_bytes().is_err());
        assert!(program.emissions().is_err());
    }
}
