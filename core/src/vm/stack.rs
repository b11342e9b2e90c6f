//! Fixed-capacity evaluation stack.
//!
//! The capacity is a logical limit enforced by [`Stack::push`]. Up to
//! [`DEFAULT_STACK_CAPACITY`] slots are reserved up front; a larger stack grows
//! on demand, so an oversized capacity costs nothing until it is used. Every
//! access is checked against the current height, so a malformed program
//! surfaces as a [`StackError`] instead of reading or writing out of bounds.

use super::DEFAULT_STACK_CAPACITY;
use crate::Vec;

/// Failure of a single stack access.
///
/// The machine turns these into an [`ExecutionError`](super::ExecutionError)
/// tagged with the address of the faulting instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    Overflow { capacity: usize },
    Underflow { needed: usize, available: usize },
}

pub struct Stack<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T: Copy> Stack<T> {
    pub fn new(capacity: usize) -> Self {
        Stack {
            values: Vec::with_capacity(capacity.min(DEFAULT_STACK_CAPACITY)),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), StackError> {
        if self.values.len() < needed {
            return Err(StackError::Underflow {
                needed,
                available: self.values.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.values.len() >= self.capacity {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.values.pop().ok_or(StackError::Underflow {
            needed: 1,
            available: 0,
        })
    }

    #[inline]
    pub fn top(&self) -> Result<T, StackError> {
        self.peek_at(0)
    }

    /// Value `depth` slots below the top (0 = top).
    #[inline]
    pub fn peek_at(&self, depth: usize) -> Result<T, StackError> {
        let needed = depth.saturating_add(1);
        self.ensure(needed)?;
        Ok(self.values[self.values.len() - needed])
    }

    /// Pop the top value and combine it with the one below, which is replaced
    /// by the result: `[..., a, b] -> [..., f(a, b)]`.
    #[inline]
    pub fn reduce(&mut self, f: impl FnOnce(T, T) -> T) -> Result<(), StackError> {
        self.ensure(2)?;
        let len = self.values.len();
        let b = self.values[len - 1];
        let a = self.values[len - 2];
        self.values[len - 2] = f(a, b);
        self.values.truncate(len - 1);
        Ok(())
    }

    /// Exchange the two topmost values.
    #[inline]
    pub fn swap_top(&mut self) -> Result<(), StackError> {
        self.ensure(2)?;
        let len = self.values.len();
        self.values.swap(len - 1, len - 2);
        Ok(())
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}
