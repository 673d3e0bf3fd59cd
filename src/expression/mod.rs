//! Expression tree, evaluation and formatting

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{BinaryOp, Expression, UnaryOp};
pub use errors::EvalError;
