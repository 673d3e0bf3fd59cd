use thiserror::Error;

/// Errors raised while turning input text into an expression tree.
///
/// `position` is the byte offset of the offending token in the input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid syntax: {message} (at position {position})")]
    Syntax { message: String, position: usize },
    #[error("Unsupported expression: {construct} (at position {position})")]
    Unsupported { construct: String, position: usize },
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        ParseError::Syntax {
            message: message.into(),
            position,
        }
    }

    pub(crate) fn unsupported(construct: impl Into<String>, position: usize) -> Self {
        ParseError::Unsupported {
            construct: construct.into(),
            position,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::Syntax { position, .. } | ParseError::Unsupported { position, .. } => {
                *position
            }
        }
    }
}
