use super::{BinaryOp, Expr};

impl Expr {
    /// Apply the identities below bottom-up and return the simplified tree.
    ///
    /// ```text
    /// 0 + e = e      e + 0 = e
    /// e - 0 = e      e - e = 0
    /// 0 * e = 0      e * 0 = 0
    /// 1 * e = e      e * 1 = e
    /// ```
    ///
    /// `e - e = 0` compares the simplified operands structurally.
    pub fn simplify(&self) -> Expr {
        let Expr::Binary(op, left, right) = self else {
            return self.clone();
        };
        let left = left.simplify();
        let right = right.simplify();

        match (op, left.as_int(), right.as_int()) {
            (BinaryOp::Add, Some(0), _) => right,
            (BinaryOp::Add, _, Some(0)) => left,
            (BinaryOp::Sub, _, Some(0)) => left,
            (BinaryOp::Sub, ..) if left == right => Expr::Int(0),
            (BinaryOp::Mul, Some(0), _) | (BinaryOp::Mul, _, Some(0)) => Expr::Int(0),
            (BinaryOp::Mul, Some(1), _) => right,
            (BinaryOp::Mul, _, Some(1)) => left,
            _ => Expr::binary(*op, left, right),
        }
    }
}
