//! # Text Preview
//!
//! Renders a program as the plain text a printer would produce, ignoring
//! styles. Used for dry runs from the CLI and for layout assertions.

use super::ops::{PrintIntent, Program};

/// Marker line standing in for the cutter.
pub const CUT_MARKER: &str = "- - - - - - - 8< - - - - - - - -";

impl Program {
    /// Plain-text rendering of the program.
    ///
    /// `FeedLines(n)` becomes `n` line feeds, `Cut` a scissor rule,
    /// style and drawer intents produce nothing.
    pub fn preview(&self) -> String {
        let mut out = String::new();
        for intent in &self.intents {
            match intent {
                PrintIntent::RawText(s) => out.push_str(s),
                PrintIntent::FeedLines(n) => {
                    for _ in 0..*n {
                        out.push('\n');
                    }
                }
                PrintIntent::Cut => {
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str(CUT_MARKER);
                    out.push('\n');
                }
                _ => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_skips_styles() {
        let mut program = Program::with_init();
        program.push(PrintIntent::SetBold(true));
        program.push(PrintIntent::line("A"));
        program.push(PrintIntent::SetBold(false));
        program.push(PrintIntent::FeedLines(2));
        program.push(PrintIntent::line("B"));
        assert_eq!(program.preview(), "A\n\n\nB\n");
    }

    #[test]
    fn test_preview_cut() {
        let mut program = Program::new();
        program.push(PrintIntent::text("tail"));
        program.push(PrintIntent::Cut);
        assert_eq!(program.preview(), format!("tail\n{}\n", CUT_MARKER));
    }
}
