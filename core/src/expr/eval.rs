use thiserror::Error;

use super::Expr;
use crate::String;

/// Variable bindings for [`Expr::eval`].
pub type Env = hashbrown::HashMap<String, i32>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("variable `{0}` not found")]
    UnboundVariable(String),
}

impl Expr {
    /// Evaluate the expression, looking variables up in `env`.
    pub fn eval(&self, env: &Env) -> Result<i32, EvalError> {
        match self {
            Expr::Int(value) => Ok(*value),
            Expr::Var(name) => env
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Expr::Binary(op, left, right) => {
                let a = left.eval(env)?;
                let b = right.eval(env)?;
                Ok(op.apply(a, b))
            }
        }
    }
}
