//! intvm - A minimal integer stack machine
//!
//! # Overview
//!
//! intvm executes a flat stream of 32-bit words on a fixed-size evaluation
//! stack. Seven instructions (`CONST`, `VAR`, `ADD`, `SUB`, `MUL`, `POP`,
//! `SWAP`) are enough to evaluate arithmetic with let-bound variables
//! addressed by their depth in the stack.
//!
//! # Quick Start
//!
//! ```
//! use intvm::{execute, Opcode};
//!
//! let code = [
//!     Opcode::Const as i32, 2,
//!     Opcode::Const as i32, 3,
//!     Opcode::Const as i32, 4,
//!     Opcode::Mul as i32,
//!     Opcode::Add as i32,
//! ];
//! assert_eq!(execute(&code), Ok(14));
//! ```
//!
//! # Errors
//!
//! Malformed programs never touch memory outside the stack: unknown opcodes,
//! missing operands, overflow and underflow all come back as
//! [`ExecutionError`] with the address of the faulting instruction.
//! [`render_error_to`] turns any [`Error`] into a report that points at that
//! instruction in a disassembly:
//!
//! ```
//! use intvm::{execute, render_error_to, Error, RenderConfig};
//!
//! let code = [0, 1, 99];
//! let err: Error = execute(&code).unwrap_err().into();
//!
//! let mut buf = Vec::new();
//! let config = RenderConfig { color: false, program: Some(&code), ..Default::default() };
//! render_error_to(&err, &mut buf, &config).unwrap();
//! assert!(String::from_utf8_lossy(&buf).contains("illegal instruction 99 at address 2"));
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from intvm_core
pub use intvm_core::{
    Error, ExecutionError, Instruction, Opcode, VM, VmOptions, assembler, execute, execute_with,
    expr, loader, vm,
};
