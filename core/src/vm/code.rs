use core::fmt;

use super::{Decoded, Decoder, ExecutionError, Instruction};
use crate::Vec;

/// A fully decoded program.
///
/// The machine does not need this (it decodes while it runs), but tools that
/// inspect programs ahead of time do.
#[derive(Clone, PartialEq, Eq)]
pub struct Code {
    pub instructions: Vec<Decoded>,
    /// Length of the source stream in words.
    pub len: usize,
}

impl Code {
    /// Decode every instruction of `words`, failing at the first bad word.
    pub fn decode(words: &[i32]) -> Result<Code, ExecutionError> {
        let instructions = Decoder::new(words).collect::<Result<Vec<_>, _>>()?;
        Ok(Code {
            instructions,
            len: words.len(),
        })
    }

    /// Peak stack height reached by the program.
    ///
    /// There is no control flow, so heights can be computed without running
    /// anything. Fails with the same underflow the machine would report,
    /// including the final check for an empty stack.
    pub fn max_stack_depth(&self) -> Result<usize, ExecutionError> {
        let mut height: usize = 0;
        let mut max = 0;

        for Decoded {
            position,
            instruction,
        } in &self.instructions
        {
            if let Instruction::Var(offset @ i32::MIN..0) = *instruction {
                return Err(ExecutionError::NegativeOffset {
                    offset,
                    position: *position,
                });
            }
            let needed = instruction.required_depth();
            if height < needed {
                return Err(ExecutionError::StackUnderflow {
                    position: *position,
                    needed,
                    available: height,
                });
            }
            height = height.saturating_add_signed(instruction.opcode().stack_effect());
            max = max.max(height);
        }

        if height == 0 {
            return Err(ExecutionError::StackUnderflow {
                position: self.len,
                needed: 1,
                available: 0,
            });
        }
        Ok(max)
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code ({} words) {{", self.len)?;
        for decoded in &self.instructions {
            writeln!(f, "  {:04}: {}", decoded.position, decoded.instruction)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format, vec};

    #[test]
    fn test_max_stack_depth() {
        // 2 + 3 * 4 peaks at three values.
        let code = Code::decode(&[0, 2, 0, 3, 0, 4, 4, 2]).unwrap();
        assert_eq!(code.instructions.len(), 5);
        assert_eq!(code.max_stack_depth(), Ok(3));
    }

    #[test]
    fn test_max_stack_depth_var() {
        let code = Code::decode(&[0, 5, 0, 7, 1, 1]).unwrap();
        assert_eq!(code.max_stack_depth(), Ok(3));
    }

    #[test]
    fn test_max_stack_depth_underflow() {
        let code = Code::decode(&[0, 1, 2]).unwrap();
        assert_eq!(
            code.max_stack_depth(),
            Err(ExecutionError::StackUnderflow {
                position: 2,
                needed: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_max_stack_depth_var_out_of_range() {
        let code = Code::decode(&[0, 1, 1, 1]).unwrap();
        assert_eq!(
            code.max_stack_depth(),
            Err(ExecutionError::StackUnderflow {
                position: 2,
                needed: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_max_stack_depth_negative_offset() {
        let code = Code::decode(&[0, 1, 1, -1]).unwrap();
        assert_eq!(
            code.max_stack_depth(),
            Err(ExecutionError::NegativeOffset {
                offset: -1,
                position: 2
            })
        );
    }

    #[test]
    fn test_max_stack_depth_empty_result() {
        let code = Code::decode(&[0, 1, 5]).unwrap();
        assert_eq!(
            code.max_stack_depth(),
            Err(ExecutionError::StackUnderflow {
                position: 3,
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_decode_fails_on_illegal_word() {
        assert_eq!(
            Code::decode(&[0, 1, 7]),
            Err(ExecutionError::IllegalInstruction {
                opcode: 7,
                position: 2
            })
        );
    }

    #[test]
    fn test_debug_output() {
        let code = Code::decode(&[0, 1, 0, 2, 3]).unwrap();
        let expected = vec!["Code (5 words) {", "  0000: CONST 1", "  0002: CONST 2", "  0004: SUB", "}"];
        assert_eq!(format!("{:?}", code), expected.join("\n"));
    }
}
