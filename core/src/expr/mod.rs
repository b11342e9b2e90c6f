//! Integer expression trees.
//!
//! A small recursive representation of arithmetic over named variables, with
//! a tree-walking evaluator, precedence-aware printing and algebraic
//! simplification. It is independent of the stack machine.
//!
//! ## Example
//!
//! ```
//! use intvm_core::expr::{Env, Expr};
//!
//! let e = Expr::mul(Expr::int(2), Expr::sub(Expr::var("v"), Expr::add(Expr::var("w"), Expr::int(0))));
//! assert_eq!(e.to_string(), "2 * (v - (w + 0))");
//! assert_eq!(e.simplify().to_string(), "2 * (v - w)");
//!
//! let mut env = Env::default();
//! env.insert("v".into(), 10);
//! env.insert("w".into(), 4);
//! assert_eq!(e.eval(&env), Ok(12));
//! ```

mod eval;
mod simplify;


pub use eval::{Env, EvalError};

use core::fmt;

use crate::{Box, String};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul => 2,
        }
    }

    /// Wrapping 32-bit arithmetic, same as the stack machine.
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            BinaryOp::Add => a.wrapping_add(b),
            BinaryOp::Sub => a.wrapping_sub(b),
            BinaryOp::Mul => a.wrapping_mul(b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Int(i32),
    Var(String),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

/// Precedence of literals and variables: they never need parentheses.
const ATOM_PRECEDENCE: u8 = u8::MAX;

impl Expr {
    pub fn int(value: i32) -> Expr {
        Expr::Int(value)
    }

    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn add(left: Expr, right: Expr) -> Expr {
        Expr::binary(BinaryOp::Add, left, right)
    }

    pub fn sub(left: Expr, right: Expr) -> Expr {
        Expr::binary(BinaryOp::Sub, left, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Expr {
        Expr::binary(BinaryOp::Mul, left, right)
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Int(_) | Expr::Var(_) => ATOM_PRECEDENCE,
            Expr::Binary(op, ..) => op.precedence(),
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Expr::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Var(name) => f.write_str(name),
            Expr::Binary(op, left, right) => {
                let prec = op.precedence();
                // All operators associate to the left, so an operand of equal
                // precedence only needs parentheses on the right.
                write_operand(f, left, left.precedence() < prec)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, right, right.precedence() <= prec)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}
