//! The `eval` command - execute words given as arguments.

use std::process::ExitCode;

use intvm::{VmOptions, execute_with};

use crate::cli::EvalArgs;
use crate::common::error::{Origin, report};

/// Run the eval command.
pub fn run(args: EvalArgs, no_color: bool) -> ExitCode {
    let options = VmOptions {
        stack_capacity: args.machine.stack_size,
    };
    match execute_with(options, &args.words) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => report(
            e,
            Origin {
                display_name: "<args>",
                program: Some(&args.words),
                source: None,
            },
            no_color,
        ),
    }
}
