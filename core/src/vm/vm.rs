use super::stack::StackError;
use super::{Decoded, Decoder, ExecutionError, Instruction, Stack};

/// Stack capacity used when none is configured.
pub const DEFAULT_STACK_CAPACITY: usize = 1000;

/// Machine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmOptions {
    /// Maximum number of values on the evaluation stack.
    pub stack_capacity: usize,
}

impl Default for VmOptions {
    fn default() -> Self {
        VmOptions {
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

/// Stack machine over a borrowed word stream.
///
/// A `VM` owns its stack for the duration of one run. Independent machines
/// share nothing and can run concurrently on different threads.
pub struct VM<'code> {
    code: &'code [i32],
    stack: Stack<i32>,
}

impl<'code> VM<'code> {
    /// Create a new VM.
    ///
    /// # Arguments
    /// * `options` - Machine configuration (stack capacity)
    /// * `code` - The word stream to execute
    pub fn new(options: VmOptions, code: &'code [i32]) -> Self {
        VM {
            code,
            stack: Stack::new(options.stack_capacity),
        }
    }

    /// Run `code` on a fresh machine with default options.
    pub fn execute(code: &'code [i32]) -> Result<i32, ExecutionError> {
        let mut vm = VM::new(VmOptions::default(), code);
        vm.run()
    }

    /// Run the program from the first word and return the final top of stack.
    ///
    /// The stack is cleared afterwards, so calling `run` again starts over.
    pub fn run(&mut self) -> Result<i32, ExecutionError> {
        let result = self.run_main_loop();
        match &result {
            Ok(value) => {
                tracing::debug!(result = *value, depth = self.stack.len(), "Program finished");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Program aborted");
            }
        }
        self.stack.clear();
        result
    }

    fn run_main_loop(&mut self) -> Result<i32, ExecutionError> {
        for decoded in Decoder::new(self.code) {
            let Decoded {
                position,
                instruction,
            } = decoded?;
            tracing::trace!(position, %instruction, depth = self.stack.len());
            self.step(instruction)
                .map_err(|e| Self::stack_fault(e, position))?;
        }

        self.stack
            .top()
            .map_err(|e| Self::stack_fault(e, self.code.len()))
    }

    /// Execute one instruction. The caller attaches the address to any fault.
    #[inline(always)]
    fn step(&mut self, instruction: Instruction) -> Result<(), Fault> {
        use Instruction::*;
        match instruction {
            Const(value) => {
                self.stack.push(value)?;
            }
            Var(offset) => {
                let depth = usize::try_from(offset).map_err(|_| Fault::NegativeOffset(offset))?;
                let value = self.stack.peek_at(depth)?;
                self.stack.push(value)?;
            }
            Add => self.stack.reduce(i32::wrapping_add)?,
            Sub => self.stack.reduce(i32::wrapping_sub)?,
            Mul => self.stack.reduce(i32::wrapping_mul)?,
            Pop => {
                self.stack.pop()?;
            }
            Swap => self.stack.swap_top()?,
        }
        Ok(())
    }

    fn stack_fault(fault: impl Into<Fault>, position: usize) -> ExecutionError {
        match fault.into() {
            Fault::Stack(StackError::Overflow { capacity }) => {
                ExecutionError::StackOverflow { position, capacity }
            }
            Fault::Stack(StackError::Underflow { needed, available }) => {
                ExecutionError::StackUnderflow {
                    position,
                    needed,
                    available,
                }
            }
            Fault::NegativeOffset(offset) => ExecutionError::NegativeOffset { offset, position },
        }
    }
}

/// Failure of a single step, before the address is known.
enum Fault {
    Stack(StackError),
    NegativeOffset(i32),
}

impl From<StackError> for Fault {
    fn from(e: StackError) -> Self {
        Fault::Stack(e)
    }
}
