//! safecalc - Evaluate basic arithmetic expressions from untrusted text
//!
//! Input is parsed by a grammar that only knows numbers, `+ - * /`, a leading
//! sign and parentheses. Names, calls, strings and every other operator are
//! rejected before anything is evaluated.

pub mod evaluator;
pub mod expression;
pub mod parser;
pub mod utils;

// Re-export the main public API
pub use evaluator::{CalcError, ErrorKind, Evaluator, EvaluatorConfig};
pub use expression::{BinaryOp, EvalError, Expression, UnaryOp};
pub use parser::{ParseError, parse};
pub use utils::format_result;

/// Evaluate an arithmetic expression with the default limits
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty or not well-formed arithmetic (`ErrorKind::Syntax`)
/// * The input uses names, calls, strings or operators other than `+ - * /`
///   (`ErrorKind::Unsupported`)
/// * A division has a right operand equal to zero (`ErrorKind::DivisionByZero`)
///
/// # Examples
///
/// ```
/// use safecalc::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("(2 + 3) * 4").ok(), Some(20.0));
/// assert_eq!(evaluate("9 / 0").map_err(|e| e.kind()), Err(ErrorKind::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    Evaluator::new().evaluate(expression)
}
