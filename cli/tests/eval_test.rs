//! Integration tests for the `eval` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn intvm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_intvm"))
}

#[test]
fn eval_constant() {
    intvm()
        .args(["eval", "0", "7"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn eval_nested_arithmetic() {
    intvm()
        .args(["eval", "0", "2", "0", "3", "0", "4", "4", "2"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn eval_negative_operand() {
    intvm()
        .args(["eval", "0", "-5", "0", "3", "4"])
        .assert()
        .success()
        .stdout("-15\n");
}

#[test]
fn eval_swap_and_pop() {
    // CONST 1, CONST 2, SWAP, POP leaves 2
    intvm()
        .args(["eval", "0", "1", "0", "2", "6", "5"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn eval_wraps_on_overflow() {
    intvm()
        .args(["eval", "0", "2147483647", "0", "1", "2"])
        .assert()
        .success()
        .stdout("-2147483648\n");
}

#[test]
fn eval_missing_operand() {
    intvm()
        .args(["--no-color", "eval", "0", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing operand for VAR at address 2"))
        .stderr(predicate::str::contains("<args>"));
}

#[test]
fn eval_negative_offset() {
    intvm()
        .args(["--no-color", "eval", "0", "1", "1", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative variable offset -1 at address 2"));
}

#[test]
fn eval_huge_stack_size() {
    intvm()
        .args(["eval", "--stack-size", "18446744073709551615", "0", "1"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn eval_requires_words() {
    intvm().args(["eval"]).assert().failure();
}

#[test]
fn eval_rejects_non_numbers() {
    intvm()
        .args(["eval", "CONST", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
