use std::fmt;

use crate::expression::ast::{BinaryOp, Expression};

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Binary {
            op: BinaryOp::Add | BinaryOp::Sub,
            ..
        } => 1,
        Expression::Binary {
            op: BinaryOp::Mul | BinaryOp::Div,
            ..
        } => 2,
        Expression::Unary { .. } => 3,
        Expression::Number(n) if n.is_sign_negative() => 3,
        Expression::Number(_) => 4,
    }
}

fn write_with_parens(f: &mut fmt::Formatter, expr: &Expression, need_parens: bool) -> fmt::Result {
    if need_parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Writes the expression with the fewest parentheses that still parse back
/// into the same tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Collect the left spine so long chains print without deep recursion.
        let mut chain = Vec::new();
        let mut node = self;
        let mut head_parens = false;
        while let Expression::Binary { op, left, right } = node {
            let own = precedence(node);
            chain.push((*op, right.as_ref(), own));
            node = left;
            if precedence(node) < own {
                head_parens = true;
                break;
            }
        }

        match node {
            _ if head_parens => write_with_parens(f, node, true)?,
            Expression::Number(n) => write!(f, "{}", n)?,
            Expression::Unary { op, operand } => {
                write!(f, "{}", op.symbol())?;
                write_with_parens(f, operand, precedence(operand) < 3)?;
            }
            // the spine loop only stops on a binary node that needs parentheses
            Expression::Binary { .. } => write_with_parens(f, node, true)?,
        }

        // left-associative: an equal-precedence right operand keeps its parens
        for (op, right, own) in chain.into_iter().rev() {
            write!(f, " {} ", op.symbol())?;
            write_with_parens(f, right, precedence(right) <= own)?;
        }
        Ok(())
    }
}
