//! Safe-grammar parser for arithmetic expressions

mod core;
mod errors;
mod lexer;

pub use self::core::{DEFAULT_MAX_DEPTH, ParseResult, parse, parse_with_depth};
pub use errors::ParseError;
pub use lexer::Token;
