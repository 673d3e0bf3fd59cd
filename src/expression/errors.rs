use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
