use log::debug;

use crate::expression::EvalError;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// # Errors
///
/// Returns [`EvalError::DivisionByZero`] if `b` is exactly zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        debug!("Division by zero attempted: {} / {}", a, b);
        return Err(EvalError::DivisionByZero);
    }
    Ok(a / b)
}
