//! Human-readable disassembly of a word stream.

use core::fmt::{self, Write};
use core::ops::Range;

use super::Decoder;
use crate::{String, Vec};

/// One line per instruction, prefixed with its address:
///
/// ```text
/// 0000  CONST 2
/// 0002  CONST 3
/// 0004  ADD
/// ```
///
/// Words that cannot be decoded (an illegal opcode and everything after it, or
/// an opcode whose operand is missing) are listed as `.word N`, one per line.
/// The text assembles back to the original words.
pub struct Listing {
    text: String,
    /// (address, byte range of the line) for every line.
    lines: Vec<(usize, Range<usize>)>,
}

impl Listing {
    pub fn new(words: &[i32]) -> Listing {
        let mut listing = Listing {
            text: String::new(),
            lines: Vec::new(),
        };

        let mut raw_from = words.len();
        for decoded in Decoder::new(words) {
            match decoded {
                Ok(decoded) => {
                    listing.push_line(decoded.position, format_args!("{}", decoded.instruction))
                }
                Err(e) => {
                    raw_from = e.position();
                    break;
                }
            }
        }
        for (position, word) in words.iter().enumerate().skip(raw_from) {
            listing.push_line(position, format_args!(".word {}", word));
        }

        listing
    }

    fn push_line(&mut self, position: usize, body: fmt::Arguments<'_>) {
        let start = self.text.len();
        // Writing into a String cannot fail.
        write!(self.text, "{:04}  {}", position, body).ok();
        self.lines.push((position, start..self.text.len()));
        self.text.push('\n');
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range (without the newline) of the line listing address `position`.
    pub fn span_of(&self, position: usize) -> Option<Range<usize>> {
        self.lines
            .iter()
            .find(|(address, _)| *address == position)
            .map(|(_, span)| span.clone())
    }

    /// Byte range of the final line, where faults past the end are reported.
    pub fn last_span(&self) -> Option<Range<usize>> {
        self.lines.last().map(|(_, span)| span.clone())
    }

    /// Number of listed lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
