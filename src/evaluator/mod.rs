mod core;
mod errors;

pub use self::core::{Evaluator, EvaluatorConfig};
pub use errors::{CalcError, ErrorKind};

#[cfg(test)]
mod tests;
