//! Program Parser
//!
//! Line splitting and token extraction for grouped CNC programs.
//! No machine state lives here - see [`crate::estimate`] for that.

pub mod directives;
pub mod lexer;

pub use directives::LineDirectives;
pub use lexer::{tokenize_line, Axis, FeedMode, MotionMode, Token};

/// Scan a single line into the directives it carries
///
/// This is the main entry point for per-line parsing. It tokenizes the line
/// and folds the tokens into one [`LineDirectives`] value.
pub fn scan_line(line: &str) -> LineDirectives<'_> {
    let tokens = lexer::tokenize_line(line);
    directives::tokens_to_directives(tokens)
}

/// Split program text into lines
///
/// Accepts every common line terminator, including a lone `\r` from old
/// controllers. `\r\n` counts as a single terminator and a trailing
/// terminator does not yield an empty last line.
pub fn program_lines(text: &str) -> ProgramLines<'_> {
    ProgramLines { rest: text }
}

/// Iterator returned by [`program_lines`]
#[derive(Debug, Clone)]
pub struct ProgramLines<'a> {
    rest: &'a str,
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl<'a> Iterator for ProgramLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((idx, c)) => {
                let line = &self.rest[..idx];
                let mut skip = idx + c.len_utf8();
                if c == '\r' && self.rest[skip..].starts_with('\n') {
                    skip += 1;
                }
                self.rest = &self.rest[skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
