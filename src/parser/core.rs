use std::ops::Range;

use log::{debug, warn};
use logos::Logos;

use crate::expression::{BinaryOp, Expression, UnaryOp};
use crate::parser::errors::ParseError;
use crate::parser::lexer::Token;

/// Default bound on parenthesis and sign nesting.
///
/// Flat operator chains (`1 + 1 + ...`) do not count towards it.
pub const DEFAULT_MAX_DEPTH: usize = 256;

pub type ParseResult<T> = Result<T, ParseError>;

type Spanned = (Token, Range<usize>);

/// Parses `input` with the default depth bound.
///
/// Grammar:
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := ('+' | '-') factor | NUMBER | '(' expr ')'
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Unsupported`] for names, strings, calls and
/// operators outside `+ - * /`, and [`ParseError::Syntax`] for anything else
/// that does not fit the grammar.
pub fn parse(input: &str) -> ParseResult<Expression> {
    parse_with_depth(input, DEFAULT_MAX_DEPTH)
}

/// Parses `input`, rejecting parentheses or signs nested deeper than
/// `max_depth`.
///
/// # Errors
///
/// Same as [`parse`]; exceeding `max_depth` is a [`ParseError::Syntax`].
pub fn parse_with_depth(input: &str, max_depth: usize) -> ParseResult<Expression> {
    debug!("Parsing expression: '{}'", input);

    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        debug!("Expression is empty");
        return Err(ParseError::syntax("empty expression", 0));
    }

    let mut parser = Parser {
        source: input,
        tokens: &tokens,
        pos: 0,
        nesting: 0,
        max_depth,
    };
    let tree = parser.parse_expr()?;
    if let Some((token, span)) = parser.peek() {
        return Err(parser.unexpected_after_operand(token, span));
    }

    debug!("Parsed '{}' as {}", input, tree);
    Ok(tree)
}

fn tokenize(input: &str) -> ParseResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let text = input.get(span.clone()).unwrap_or_default();
                debug!("Unrecognised input '{}' at {}", text, span.start);
                return Err(ParseError::syntax(
                    format!("unrecognised input '{}'", text),
                    span.start,
                ));
            }
        }
    }

    // `1e`, `1_000`, `2x`: a literal running straight into a name
    for pair in tokens.windows(2) {
        if let [(Token::Number(_), number), (Token::Name(_), name)] = pair
            && number.end == name.start
        {
            let text = input.get(number.start..name.end).unwrap_or_default();
            debug!("Invalid numeric literal '{}' at {}", text, number.start);
            return Err(ParseError::syntax(
                format!("invalid numeric literal '{}'", text),
                number.start,
            ));
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Spanned],
    pos: usize,
    nesting: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Spanned> {
        let next = self.tokens.get(self.pos);
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn text(&self, span: &Range<usize>) -> &'a str {
        self.source.get(span.clone()).unwrap_or_default()
    }

    fn parse_expr(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_term()?;
        while let Some((token, _)) = self.peek() {
            let op = match token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_factor()?;
        while let Some((token, _)) = self.peek() {
            let op = match token {
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_factor()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> ParseResult<Expression> {
        let Some((token, span)) = self.advance() else {
            return Err(ParseError::syntax(
                "unexpected end of input",
                self.source.len(),
            ));
        };
        if self.nesting >= self.max_depth {
            return Err(self.too_deep(span.start));
        }

        self.nesting += 1;
        let result = self.parse_operand(token, span);
        self.nesting -= 1;
        result
    }

    fn parse_operand(&mut self, token: &'a Token, span: &'a Range<usize>) -> ParseResult<Expression> {
        match token {
            Token::Number(n) => Ok(Expression::Number(*n)),
            Token::Plus | Token::Minus => {
                let op = if *token == Token::Plus {
                    UnaryOp::Plus
                } else {
                    UnaryOp::Minus
                };
                let operand = self.parse_factor()?;
                Ok(Expression::unary(op, operand))
            }
            Token::LParen => {
                let inner = self.parse_expr()?;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((next, next_span)) => Err(self.unexpected_after_operand(next, next_span)),
                    None => Err(ParseError::syntax("'(' was never closed", span.start)),
                }
            }
            token if token.is_foreign() => Err(self.unsupported(token, span)),
            _ => Err(ParseError::syntax(
                format!("unexpected '{}'", self.text(span)),
                span.start,
            )),
        }
    }

    /// Classifies a token found where an operator or `)` was expected.
    fn unexpected_after_operand(&self, token: &Token, span: &Range<usize>) -> ParseError {
        match token {
            // `f(x)`, `(2)(3)`
            Token::LParen => {
                warn!("Rejected call syntax at position {}", span.start);
                ParseError::unsupported("function call", span.start)
            }
            token if token.is_foreign() => self.unsupported(token, span),
            _ => ParseError::syntax(format!("unexpected '{}'", self.text(span)), span.start),
        }
    }

    fn unsupported(&self, token: &Token, span: &Range<usize>) -> ParseError {
        let construct = match token {
            Token::Name(name) => format!("name '{}'", name),
            Token::Text(_) => "string literal".to_string(),
            _ => format!("operator '{}'", self.text(span)),
        };
        warn!("Rejected {} at position {}", construct, span.start);
        ParseError::unsupported(construct, span.start)
    }

    fn too_deep(&self, position: usize) -> ParseError {
        debug!("Nesting limit of {} exceeded", self.max_depth);
        ParseError::syntax(
            format!("too many nested parentheses (limit {})", self.max_depth),
            position,
        )
    }
}
