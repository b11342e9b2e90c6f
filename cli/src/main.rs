//! intvm CLI - run, inspect and author integer stack machine programs.

use std::process::ExitCode;

use clap::Parser;
use intvm_cli::cli::{Cli, Command};
use intvm_cli::commands;

fn main() -> ExitCode {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => commands::run::run(args, cli.no_color),
        Command::Eval(args) => commands::eval::run(args, cli.no_color),
        Command::Disasm(args) => commands::disasm::run(args, cli.no_color),
        Command::Asm(args) => commands::asm::run(args, cli.no_color),
    }
}
