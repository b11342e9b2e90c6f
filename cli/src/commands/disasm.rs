//! The `disasm` command - print a program listing.

use std::process::ExitCode;

use intvm::loader::decode_words;
use intvm::vm::{Code, Listing};

use crate::cli::DisasmArgs;
use crate::common::error::{Origin, report, report_io};
use crate::common::input::read_bytes;

/// Run the disasm command.
///
/// The listing is printed even for programs that would fail; the failure is
/// reported afterwards.
pub fn run(args: DisasmArgs, no_color: bool) -> ExitCode {
    let (bytes, display_name) = match read_bytes(&args.file) {
        Ok(c) => c,
        Err(e) => return report_io(&e),
    };

    let words = decode_words(&bytes, args.encoding.endian.into());
    print!("{}", Listing::new(&words));

    match Code::decode(&words).and_then(|code| code.max_stack_depth()) {
        Ok(depth) => {
            println!("; max stack depth: {}", depth);
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
