//! Workspace-wide error type.
//!
//! Each component has its own error enum; [`Error`] wraps them so front ends
//! (the CLI, the diagnostic renderer) deal with a single type.

use thiserror::Error;

use crate::assembler::AssemblyError;
use crate::expr::EvalError;
use crate::vm::ExecutionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
