//! The `asm` command - assemble mnemonics into a program file.

use std::process::ExitCode;

use intvm::assembler::assemble;
use intvm::loader::encode_words;

use crate::cli::AsmArgs;
use crate::common::error::{Origin, report, report_io};
use crate::common::input::{read_text, write_bytes};

/// Run the asm command.
pub fn run(args: AsmArgs, no_color: bool) -> ExitCode {
    let (source, display_name) = match read_text(&args.file) {
        Ok(c) => c,
        Err(e) => return report_io(&e),
    };

    let words = match assemble(&source) {
        Ok(words) => words,
        Err(e) => {
            return report(
                e,
                Origin {
                    display_name: &display_name,
                    program: None,
                    source: Some(&source),
                },
                no_color,
            );
        }
    };

    let bytes = encode_words(&words, args.encoding.endian.into());
    if let Err(e) = write_bytes(&args.output, &bytes) {
        return report_io(&e);
    }
    tracing::debug!(output = %args.output, words = words.len(), "Wrote program");
    ExitCode::SUCCESS
}
