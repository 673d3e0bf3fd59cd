use crate::expression::ast::{BinaryOp, Expression, UnaryOp};
use crate::expression::errors::EvalError;
use crate::utils::{add, divide, multiply, subtract};

impl Expression {
    /// Evaluates the expression tree, left operand before right.
    ///
    /// The left spine of an operator chain is walked in a loop, so recursion
    /// only follows parenthesised or signed operands.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when the right side of a
    /// division evaluates to exactly zero.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        let mut pending = Vec::new();
        let mut node = self;

        let mut acc = loop {
            match node {
                Expression::Number(n) => break *n,
                Expression::Unary { op, operand } => {
                    let value = operand.evaluate()?;
                    break match op {
                        UnaryOp::Plus => value,
                        UnaryOp::Minus => -value,
                    };
                }
                Expression::Binary { op, left, right } => {
                    pending.push((*op, right.as_ref()));
                    node = left;
                }
            }
        };

        for (op, right) in pending.into_iter().rev() {
            let right = right.evaluate()?;
            acc = match op {
                BinaryOp::Add => add(acc, right),
                BinaryOp::Sub => subtract(acc, right),
                BinaryOp::Mul => multiply(acc, right),
                BinaryOp::Div => divide(acc, right)?,
            };
        }

        Ok(acc)
    }
}
