mod code;
mod decoder;
mod error;
mod instruction_set;
mod listing;
mod stack;
mod vm;

pub use code::Code;
pub use decoder::{Decoded, Decoder};
pub use error::ExecutionError;
pub use instruction_set::{Instruction, Opcode, encode_all};
pub use listing::Listing;
pub use vm::{DEFAULT_STACK_CAPACITY, VM, VmOptions};

pub(crate) use stack::Stack;
