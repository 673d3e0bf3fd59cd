use thiserror::Error;

use crate::expression::EvalError;
use crate::parser::ParseError;

/// Cause of a failed evaluation, for callers that branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Unsupported,
    DivisionByZero,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Parse(ParseError::Syntax { .. }) => ErrorKind::Syntax,
            CalcError::Parse(ParseError::Unsupported { .. }) => ErrorKind::Unsupported,
            CalcError::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
        }
    }
}
