//! Integration tests for the public API.
//!
//! These tests drive the machine only through what the crate exports: raw
//! words, the loader, the assembler and the listing.

use intvm_core::assembler::assemble;
use intvm_core::loader::{Endianness, decode_words, encode_words};
use intvm_core::vm::{Code, Listing};
use intvm_core::{Error, ExecutionError, Instruction, Opcode, VM, VmOptions, execute, execute_with};

const CONST: i32 = Opcode::Const as i32;
const VAR: i32 = Opcode::Var as i32;
const ADD: i32 = Opcode::Add as i32;
const SUB: i32 = Opcode::Sub as i32;
const MUL: i32 = Opcode::Mul as i32;
const POP: i32 = Opcode::Pop as i32;
const SWAP: i32 = Opcode::Swap as i32;

#[test]
fn test_single_constant() {
    for c in [0, 7, -7, i32::MAX, i32::MIN] {
        assert_eq!(execute(&[CONST, c]), Ok(c));
    }
}

#[test]
fn test_binary_operators() {
    let cases = [(3, 4), (-10, 2), (0, -1), (123_456, 789)];
    for (a, b) in cases {
        assert_eq!(execute(&[CONST, a, CONST, b, ADD]), Ok(a + b));
        assert_eq!(execute(&[CONST, a, CONST, b, SUB]), Ok(a - b));
        assert_eq!(execute(&[CONST, a, CONST, b, MUL]), Ok(a * b));
    }
}

#[test]
fn test_swap_is_self_inverse() {
    let prefix = [CONST, 8, CONST, 3];
    let plain: Vec<i32> = prefix.iter().copied().chain([SUB]).collect();
    let swapped_twice: Vec<i32> = prefix.iter().copied().chain([SWAP, SWAP, SUB]).collect();
    assert_eq!(execute(&plain), execute(&swapped_twice));
    assert_eq!(execute(&swapped_twice), Ok(5));
}

#[test]
fn test_var_addressing() {
    assert_eq!(execute(&[CONST, 5, CONST, 7, VAR, 1]), Ok(5));
    assert_eq!(execute(&[CONST, 5, CONST, 7, VAR, 0]), Ok(7));
}

#[test]
fn test_pop_removes_one_value() {
    assert_eq!(execute(&[CONST, 1, CONST, 2, POP]), Ok(1));
}

#[test]
fn test_illegal_opcode() {
    assert_eq!(
        execute(&[99]),
        Err(ExecutionError::IllegalInstruction {
            opcode: 99,
            position: 0
        })
    );
}

#[test]
fn test_execution_is_repeatable() {
    let code = vec![CONST, 2, CONST, 3, CONST, 4, MUL, ADD];
    let first = execute(&code);
    let second = execute(&code);
    assert_eq!(first, second);
    assert_eq!(first, Ok(14));
}

#[test]
fn test_overflow_wraps() {
    assert_eq!(
        execute(&[CONST, 2_147_483_000, CONST, 1_000, ADD]),
        Ok(-2_147_483_296)
    );
}

#[test]
fn test_end_to_end() {
    // 2 + (3 * 4)
    assert_eq!(execute(&[CONST, 2, CONST, 3, CONST, 4, MUL, ADD]), Ok(14));
}

#[test]
fn test_concurrent_machines() {
    let programs: Vec<Vec<i32>> = (0..8)
        .map(|i| vec![CONST, i, CONST, i, MUL])
        .collect();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = programs
            .iter()
            .map(|code| scope.spawn(move || execute(code)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, result) in results.into_iter().enumerate() {
        let i = i as i32;
        assert_eq!(result, Ok(i * i));
    }
}

#[test]
fn test_custom_capacity() {
    let code = [CONST, 1, CONST, 2, ADD];
    assert_eq!(execute_with(VmOptions { stack_capacity: 2 }, &code), Ok(3));
    assert_eq!(
        execute_with(VmOptions { stack_capacity: 1 }, &code),
        Err(ExecutionError::StackOverflow {
            position: 2,
            capacity: 1
        })
    );
}

#[test]
fn test_unbounded_capacity() {
    let options = VmOptions {
        stack_capacity: usize::MAX,
    };
    assert_eq!(execute_with(options, &[CONST, 1]), Ok(1));
    assert_eq!(
        execute_with(options, &[CONST, 6, VAR, 0, MUL, CONST, 1, SUB]),
        Ok(35)
    );
}

#[test]
fn test_vm_reuse() {
    let code = [CONST, 6, VAR, 0, MUL];
    let mut vm = VM::new(VmOptions::default(), &code);
    assert_eq!(vm.run(), Ok(36));
    assert_eq!(vm.run(), Ok(36));
}

#[test]
fn test_load_assemble_execute() {
    let source = "\
; (10 - 4) * 7
CONST 10
CONST 4
SUB
CONST 7
MUL
";
    let words = assemble(source).expect("assembly should succeed");
    let bytes = encode_words(&words, Endianness::Big);
    let loaded = decode_words(&bytes, Endianness::Big);
    assert_eq!(loaded, words);
    assert_eq!(execute(&loaded), Ok(42));
}

#[test]
fn test_listing_and_code_agree() {
    let words = [CONST, 2, CONST, 3, VAR, 1, MUL, ADD];
    let code = Code::decode(&words).unwrap();
    let instructions: Vec<Instruction> = code.instructions.iter().map(|d| d.instruction).collect();
    assert_eq!(
        instructions,
        vec![
            Instruction::Const(2),
            Instruction::Const(3),
            Instruction::Var(1),
            Instruction::Mul,
            Instruction::Add
        ]
    );
    assert_eq!(code.max_stack_depth(), Ok(3));

    let listing = Listing::new(&words);
    assert_eq!(listing.len(), instructions.len());
    assert_eq!(execute(&words), Ok(8));
}

#[test]
fn test_unified_error() {
    let err: Error = execute(&[ADD]).unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "stack underflow at address 0: 2 value(s) required, 0 available"
    );
    let err: Error = assemble("NOPE").unwrap_err().into();
    assert_eq!(err.to_string(), "line 1: unknown mnemonic `NOPE`");
}
