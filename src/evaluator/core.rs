use log::{debug, info};

use crate::evaluator::errors::CalcError;
use crate::parser::{DEFAULT_MAX_DEPTH, parse_with_depth};

/// Limits applied while evaluating untrusted input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Deepest parenthesis or sign nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parses and evaluates arithmetic expressions.
///
/// Holds no state between calls, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Parse `input` and evaluate the resulting tree.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Parse`] when the input is malformed or uses
    /// syntax outside plain arithmetic, and [`CalcError::Eval`] on division
    /// by zero.
    pub fn evaluate(&self, input: &str) -> Result<f64, CalcError> {
        info!("Evaluating '{}'", input);

        let tree = parse_with_depth(input, self.config.max_depth)?;
        let value = tree.evaluate()?;

        debug!("'{}' = {}", input, value);
        Ok(value)
    }
}
