//! intvm Instructions
//!
//! This module defines the instruction set of the stack machine.
//!
//! # Instruction Format
//!
//! A program is a flat stream of 32-bit words. Each instruction is one opcode
//! word, optionally followed by a single operand word:
//! ```text
//! ┌────────────┬─────────────────────┐
//! │   Opcode   │  Operand (optional) │
//! │  (1 word)  │      (1 word)       │
//! └────────────┴─────────────────────┘
//! ```
//!
//! Words are not tagged: whether a word is an opcode or an operand depends
//! only on its position. The number of trailing operand words is a property
//! of the opcode alone (see [`Opcode::arity`]), so decoding never has to look
//! at the machine state.
//!
//! # Stack Discipline
//!
//! Stack effect notation: `[..., operand1, operand2] -> [..., result]`

use core::fmt;

use static_assertions::assert_eq_size;

use crate::Vec;

/// Raw opcode values as they appear in the instruction stream.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push literal
    /// Operand: i32 value | Stack: [...] -> [..., value]
    Const = 0,

    /// Push a copy of the value `n` slots below the current top (0 = top)
    /// Operand: i32 depth | Stack: [..., aN, ..., a0] -> [..., aN, ..., a0, aN]
    Var = 1,

    /// Stack: [..., a, b] -> [..., a + b]
    Add = 2,

    /// Stack: [..., a, b] -> [..., a - b]
    Sub = 3,

    /// Stack: [..., a, b] -> [..., a * b]
    Mul = 4,

    /// Stack: [..., a] -> [...]
    Pop = 5,

    /// Stack: [..., a, b] -> [..., b, a]
    Swap = 6,
}

impl Opcode {
    /// All opcodes, ordered by their code.
    pub const ALL: [Opcode; 7] = [
        Opcode::Const,
        Opcode::Var,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Pop,
        Opcode::Swap,
    ];

    /// Decode a raw word. Returns `None` for anything outside the instruction set.
    pub fn from_word(word: i32) -> Option<Opcode> {
        usize::try_from(word)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Look up an opcode by its (case-insensitive) mnemonic.
    pub fn from_mnemonic(name: &str) -> Option<Opcode> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Number of operand words following the opcode word.
    pub const fn arity(self) -> usize {
        match self {
            Opcode::Const | Opcode::Var => 1,
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Pop | Opcode::Swap => 0,
        }
    }

    /// Net change in stack height.
    pub const fn stack_effect(self) -> isize {
        match self {
            Opcode::Const | Opcode::Var => 1,
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Pop => -1,
            Opcode::Swap => 0,
        }
    }

    /// Number of values that must already be on the stack.
    ///
    /// For `Var` this is the minimum (offset 0); the actual requirement is
    /// `offset + 1`, see [`Instruction::required_depth`].
    pub const fn required_depth(self) -> usize {
        match self {
            Opcode::Const => 0,
            Opcode::Var | Opcode::Pop => 1,
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Swap => 2,
        }
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Const => "CONST",
            Opcode::Var => "VAR",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Pop => "POP",
            Opcode::Swap => "SWAP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction, carrying its operand if it has one.
///
/// The `#[repr(C, u8)]` layout keeps the record at two words: a one-byte tag
/// (padded) followed by the `i32` operand.
#[repr(C, u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Push literal
    Const(i32),
    /// Push the value at the given depth below the top
    Var(i32),
    Add,
    Sub,
    Mul,
    Pop,
    Swap,
}

assert_eq_size!(Instruction, u64);

impl Instruction {
    /// Build an instruction from an opcode and the operand words that follow it.
    ///
    /// `operands` must hold exactly `opcode.arity()` words.
    pub(crate) fn from_parts(opcode: Opcode, operands: &[i32]) -> Instruction {
        debug_assert_eq!(operands.len(), opcode.arity());
        match opcode {
            Opcode::Const => Instruction::Const(operands[0]),
            Opcode::Var => Instruction::Var(operands[0]),
            Opcode::Add => Instruction::Add,
            Opcode::Sub => Instruction::Sub,
            Opcode::Mul => Instruction::Mul,
            Opcode::Pop => Instruction::Pop,
            Opcode::Swap => Instruction::Swap,
        }
    }

    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Const(_) => Opcode::Const,
            Instruction::Var(_) => Opcode::Var,
            Instruction::Add => Opcode::Add,
            Instruction::Sub => Opcode::Sub,
            Instruction::Mul => Opcode::Mul,
            Instruction::Pop => Opcode::Pop,
            Instruction::Swap => Opcode::Swap,
        }
    }

    pub const fn operand(&self) -> Option<i32> {
        match self {
            Instruction::Const(value) | Instruction::Var(value) => Some(*value),
            _ => None,
        }
    }

    /// Number of words this instruction occupies in the stream.
    pub const fn width(&self) -> usize {
        1 + self.opcode().arity()
    }

    /// Number of values that must be on the stack for this instruction to run.
    ///
    /// Negative `Var` offsets are not covered here; the machine rejects them
    /// separately.
    pub fn required_depth(&self) -> usize {
        match self {
            Instruction::Var(offset) if *offset > 0 => *offset as usize + 1,
            _ => self.opcode().required_depth(),
        }
    }

    /// Append the encoded words of this instruction to `out`.
    pub fn encode(&self, out: &mut Vec<i32>) {
        out.push(self.opcode().code());
        if let Some(operand) = self.operand() {
            out.push(operand);
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(operand) => write!(f, "{} {}", self.opcode(), operand),
            None => write!(f, "{}", self.opcode()),
        }
    }
}

/// Encode a sequence of instructions into a word stream.
pub fn encode_all(instructions: &[Instruction]) -> Vec<i32> {
    let mut out = Vec::with_capacity(instructions.len() * 2);
    for instruction in instructions {
        instruction.encode(&mut out);
    }
    out
}
