//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;
use intvm::loader::{Endianness, encode_words};
use std::io::Write;

/// Create a new command for the intvm binary.
pub fn intvm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_intvm"))
}

/// Create a temporary file with the given content.
pub fn temp_file(content: &[u8], suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file
}

/// Create a temporary program file holding `words` in big-endian order.
pub fn program_file(words: &[i32]) -> tempfile::NamedTempFile {
    temp_file(&encode_words(words, Endianness::Big), ".bin")
}

/// Create a temporary assembly source file.
pub fn source_file(source: &str) -> tempfile::NamedTempFile {
    temp_file(source.as_bytes(), ".asm")
}

/// Path of a temporary file as a command-line argument.
pub fn arg(file: &tempfile::NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

/// Run a command and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], stdin: Option<&[u8]>, expected: Expect) {
    let mut cmd = intvm();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}
