//! Lazy decoding of a raw word stream into [`Instruction`]s.

use super::{ExecutionError, Instruction, Opcode};

/// An instruction together with the address of its opcode word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub position: usize,
    pub instruction: Instruction,
}

/// Iterator over the instructions of a word stream.
///
/// Yields one `Err` at the first word that cannot be decoded and then stops.
pub struct Decoder<'a> {
    words: &'a [i32],
    pc: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(words: &'a [i32]) -> Self {
        Decoder { words, pc: 0 }
    }

    /// Address of the next word to fetch.
    pub fn pc(&self) -> usize {
        self.pc
    }

    fn decode_next(&mut self) -> Result<Decoded, ExecutionError> {
        let position = self.pc;
        let word = self.words[position];
        let opcode = Opcode::from_word(word).ok_or(ExecutionError::IllegalInstruction {
            opcode: word,
            position,
        })?;

        let start = position + 1;
        let end = start + opcode.arity();
        let operands = self
            .words
            .get(start..end)
            .ok_or(ExecutionError::MissingOperand { opcode, position })?;

        self.pc = end;
        Ok(Decoded {
            position,
            instruction: Instruction::from_parts(opcode, operands),
        })
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Decoded, ExecutionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pc >= self.words.len() {
            return None;
        }
        let result = self.decode_next();
        if result.is_err() {
            // Fuse: nothing after a bad word can be trusted.
            self.pc = self.words.len();
        }
        Some(result)
    }
}
