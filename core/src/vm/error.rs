//! Errors raised while decoding or executing a program.

use thiserror::Error;

use super::Opcode;

/// A fatal execution failure.
///
/// Every variant carries the address of the opcode word of the instruction
/// that failed, so callers can point at it in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The word at `position` is not one of the defined opcodes.
    #[error("illegal instruction {opcode} at address {position}")]
    IllegalInstruction { opcode: i32, position: usize },

    /// The stream ended before the operand of an instruction.
    #[error("missing operand for {opcode} at address {position}")]
    MissingOperand { opcode: Opcode, position: usize },

    /// A push would exceed the fixed stack capacity.
    #[error("stack overflow at address {position}: capacity of {capacity} exceeded")]
    StackOverflow { position: usize, capacity: usize },

    /// An instruction needed more values than the stack holds.
    ///
    /// Also reported at `position == code.len()` when the program finishes
    /// with an empty stack.
    #[error(
        "stack underflow at address {position}: {needed} value(s) required, {available} available"
    )]
    StackUnderflow {
        position: usize,
        needed: usize,
        available: usize,
    },

    /// `VAR` with a negative offset, which would address above the top.
    #[error("negative variable offset {offset} at address {position}")]
    NegativeOffset { offset: i32, position: usize },
}

impl ExecutionError {
    /// Address of the opcode word of the failing instruction.
    pub fn position(&self) -> usize {
        match *self {
            ExecutionError::IllegalInstruction { position, .. }
            | ExecutionError::MissingOperand { position, .. }
            | ExecutionError::StackOverflow { position, .. }
            | ExecutionError::StackUnderflow { position, .. }
            | ExecutionError::NegativeOffset { position, .. } => position,
        }
    }

    /// Short label for the failing location, used by diagnostic renderers.
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionError::IllegalInstruction { .. } => "not a valid opcode",
            ExecutionError::MissingOperand { .. } => "operand missing",
            ExecutionError::StackOverflow { .. } => "pushes past the stack capacity",
            ExecutionError::StackUnderflow { .. } => "not enough values on the stack",
            ExecutionError::NegativeOffset { .. } => "offset must not be negative",
        }
    }
}
