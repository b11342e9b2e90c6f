//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod asm;
pub mod disasm;
pub mod eval;
pub mod run;
