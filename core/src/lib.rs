#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
//! Core of the intvm stack machine.
//!
//! The machine executes a flat stream of 32-bit words against a fixed-size
//! integer stack and produces a single integer:
//!
//! ```
//! use intvm_core::execute;
//!
//! // CONST 2, CONST 3, CONST 4, MUL, ADD  =>  2 + 3 * 4
//! let code = [0, 2, 0, 3, 0, 4, 4, 2];
//! assert_eq!(execute(&code), Ok(14));
//! ```
//!
//! Besides the machine itself this crate carries the pieces around it: a word
//! [`loader`], a text [`assembler`], a disassembly [`vm::Listing`] and the
//! companion [`expr`] tree evaluator.

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that dependent crates share a single vocabulary.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod assembler;
pub mod error;
pub mod expr;
pub mod loader;
pub mod vm;

pub use error::Error;
pub use vm::{ExecutionError, Instruction, Opcode, VM, VmOptions};

/// Execute `code` with the default stack capacity and return the value left
/// on top of the stack.
pub fn execute(code: &[i32]) -> Result<i32, ExecutionError> {
    VM::execute(code)
}

/// Execute `code` with explicit machine options.
pub fn execute_with(options: VmOptions, code: &[i32]) -> Result<i32, ExecutionError> {
    VM::new(options, code).run()
}
