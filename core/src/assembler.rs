//! Text assembler for the instruction set.
//!
//! One instruction per line:
//!
//! ```text
//! ; 2 + 3 * 4
//! CONST 2
//! CONST 3
//! CONST 4
//! MUL
//! ADD
//! ```
//!
//! Mnemonics are case-insensitive. `;` and `#` start comments. `.word N` emits
//! a raw word, which is how illegal programs are written down. A leading
//! all-digit address column, as printed by [`Listing`](crate::vm::Listing), is
//! skipped, so listings assemble back into the words they came from.

use thiserror::Error;

use crate::vm::{Instruction, Opcode};
use crate::{String, ToString, Vec};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("line {line}: unknown mnemonic `{name}`")]
    UnknownMnemonic { line: usize, name: String },

    #[error("line {line}: `{opcode}` expects an operand")]
    MissingOperand { line: usize, opcode: Opcode },

    #[error("line {line}: `{opcode}` takes no operand")]
    UnexpectedOperand { line: usize, opcode: Opcode },

    #[error("line {line}: invalid operand `{text}`, expected a 32-bit integer")]
    InvalidOperand { line: usize, text: String },
}

impl AssemblyError {
    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            AssemblyError::UnknownMnemonic { line, .. }
            | AssemblyError::MissingOperand { line, .. }
            | AssemblyError::UnexpectedOperand { line, .. }
            | AssemblyError::InvalidOperand { line, .. } => *line,
        }
    }
}

const RAW_WORD: &str = ".word";

/// Assemble `source` into a word stream.
pub fn assemble(source: &str) -> Result<Vec<i32>, AssemblyError> {
    let mut words = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line = index + 1;
        let mut tokens = strip_comment(raw_line).split_whitespace().peekable();

        // Skip the address column of a listing.
        if tokens
            .peek()
            .is_some_and(|t| t.bytes().all(|b| b.is_ascii_digit()))
        {
            tokens.next();
        }

        let Some(name) = tokens.next() else {
            continue;
        };
        let operand = tokens.next();
        if let Some(extra) = tokens.next() {
            return Err(AssemblyError::InvalidOperand {
                line,
                text: extra.to_string(),
            });
        }

        if name.eq_ignore_ascii_case(RAW_WORD) {
            let Some(text) = operand else {
                return Err(AssemblyError::InvalidOperand {
                    line,
                    text: String::new(),
                });
            };
            words.push(parse_operand(line, text)?);
            continue;
        }

        let opcode = Opcode::from_mnemonic(name).ok_or_else(|| AssemblyError::UnknownMnemonic {
            line,
            name: name.to_string(),
        })?;

        let operands = match (opcode.arity(), operand) {
            (0, None) => Vec::new(),
            (0, Some(_)) => return Err(AssemblyError::UnexpectedOperand { line, opcode }),
            (_, None) => return Err(AssemblyError::MissingOperand { line, opcode }),
            (_, Some(text)) => crate::vec![parse_operand(line, text)?],
        };
        Instruction::from_parts(opcode, &operands).encode(&mut words);
    }

    Ok(words)
}

fn strip_comment(line: &str) -> &str {
    match line.find([';', '#']) {
        Some(index) => &line[..index],
        None => line,
    }
}

fn parse_operand(line: usize, text: &str) -> Result<i32, AssemblyError> {
    text.parse::<i32>()
        .map_err(|_| AssemblyError::InvalidOperand {
            line,
            text: text.to_string(),
        })
}
