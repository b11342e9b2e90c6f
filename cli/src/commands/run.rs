//! The `run` command - load a program file and execute it.

use std::process::ExitCode;

use intvm::loader::decode_words;
use intvm::{VmOptions, execute_with};

use crate::cli::RunArgs;
use crate::common::error::{Origin, report, report_io};
use crate::common::input::read_bytes;

/// Run the run command.
pub fn run(args: RunArgs, no_color: bool) -> ExitCode {
    let (bytes, display_name) = match read_bytes(&args.file) {
        Ok(c) => c,
        Err(e) => return report_io(&e),
    };

    let words = decode_words(&bytes, args.encoding.endian.into());
    tracing::debug!(file = %display_name, words = words.len(), "Loaded program");

    let options = VmOptions {
        stack_capacity: args.machine.stack_size,
    };
    match execute_with(options, &words) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => report(
            e,
            Origin {
                display_name: &display_name,
                program: Some(&words),
                source: None,
            },
            no_color,
        ),
    }
}
