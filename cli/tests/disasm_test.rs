//! Integration tests for the `disasm` command.

mod common;

use common::{arg, check_stdout, intvm, program_file};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn disasm_listing() {
    let file = program_file(&[0, 2, 0, 3, 0, 4, 4, 2]);
    check_stdout(
        &["disasm", arg(&file)],
        None,
        expect![[r#"
            0000  CONST 2
            0002  CONST 3
            0004  CONST 4
            0006  MUL
            0007  ADD
            ; max stack depth: 3
        "#]],
    );
}

#[test]
fn disasm_variables() {
    let file = program_file(&[0, 5, 0, 7, 1, 1, 6, 5]);
    check_stdout(
        &["disasm", arg(&file)],
        None,
        expect![[r#"
            0000  CONST 5
            0002  CONST 7
            0004  VAR 1
            0006  SWAP
            0007  POP
            ; max stack depth: 3
        "#]],
    );
}

#[test]
fn disasm_illegal_tail() {
    let file = program_file(&[0, 1, 42, 0]);

    intvm()
        .args(["--no-color", "disasm", arg(&file)])
        .assert()
        .failure()
        .stdout("0000  CONST 1\n0002  .word 42\n0003  .word 0\n")
        .stderr(predicate::str::contains("illegal instruction 42 at address 2"));
}

#[test]
fn disasm_reports_underflow() {
    let file = program_file(&[0, 1, 3]);

    intvm()
        .args(["--no-color", "disasm", arg(&file)])
        .assert()
        .failure()
        .stdout("0000  CONST 1\n0002  SUB\n")
        .stderr(predicate::str::contains("stack underflow at address 2"));
}

#[test]
fn disasm_output_assembles_back() {
    let words = [0, 10, 0, 4, 3, 0, 7, 4];
    let file = program_file(&words);
    let listing = intvm().args(["disasm", arg(&file)]).output().unwrap().stdout;

    intvm()
        .args(["asm", "-", "-o", "-"])
        .write_stdin(listing)
        .assert()
        .success()
        .stdout(intvm::loader::encode_words(&words, intvm::loader::Endianness::Big));
}
