//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use intvm::loader::Endianness;
use intvm::vm::DEFAULT_STACK_CAPACITY;

/// intvm - A minimal integer stack machine
#[derive(Parser, Debug)]
#[command(name = "intvm", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a program file, execute it and print the result
    Run(RunArgs),

    /// Execute instruction words given on the command line
    Eval(EvalArgs),

    /// Print a listing of a program file and its maximum stack depth
    Disasm(DisasmArgs),

    /// Assemble mnemonics into a program file
    Asm(AsmArgs),
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Program file to run (use - for stdin)
    pub file: String,

    #[command(flatten)]
    pub encoding: EncodingArgs,

    #[command(flatten)]
    pub machine: MachineArgs,
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Instruction words, e.g. `0 2 0 3 2` for CONST 2, CONST 3, ADD
    #[arg(required = true, allow_negative_numbers = true)]
    pub words: Vec<i32>,

    #[command(flatten)]
    pub machine: MachineArgs,
}

/// Arguments for the `disasm` command.
#[derive(Args, Debug)]
pub struct DisasmArgs {
    /// Program file to disassemble (use - for stdin)
    pub file: String,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

/// Arguments for the `asm` command.
#[derive(Args, Debug)]
pub struct AsmArgs {
    /// Assembly source (use - for stdin)
    pub file: String,

    /// Where to write the program (use - for stdout)
    #[arg(short, long)]
    pub output: String,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

/// How program words are stored on disk.
#[derive(Args, Debug)]
pub struct EncodingArgs {
    /// Byte order of program words
    #[arg(long, default_value = "big")]
    pub endian: Endian,
}

/// Machine limits.
#[derive(Args, Debug)]
pub struct MachineArgs {
    /// Number of stack slots available to the program
    #[arg(long, default_value_t = DEFAULT_STACK_CAPACITY)]
    pub stack_size: usize,
}

/// Byte order of program words.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Endian {
    /// Most significant byte first
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

impl From<Endian> for Endianness {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Big => Endianness::Big,
            Endian::Little => Endianness::Little,
        }
    }
}
