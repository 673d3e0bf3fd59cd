use std::mem;

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Prefix sign operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Represents a parsed arithmetic expression
///
/// Only numbers, the four binary operators and a leading sign have a variant,
/// so nothing outside that set can ever reach evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

impl UnaryOp {
    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
        }
    }
}

/// Children are detached onto a heap stack so that dropping a long operator
/// chain does not recurse once per node.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(self, &mut stack);
        while let Some(mut child) = stack.pop() {
            detach_children(&mut child, &mut stack);
        }
    }
}

fn detach_children(expr: &mut Expression, stack: &mut Vec<Box<Expression>>) {
    match expr {
        Expression::Number(_) => {}
        Expression::Binary { left, right, .. } => {
            stack.push(mem::replace(left, Box::new(Expression::Number(0.0))));
            stack.push(mem::replace(right, Box::new(Expression::Number(0.0))));
        }
        Expression::Unary { operand, .. } => {
            stack.push(mem::replace(operand, Box::new(Expression::Number(0.0))));
        }
    }
}
