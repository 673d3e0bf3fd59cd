use logos::Logos;

/// Tokens recognised in calculator input.
///
/// Besides the arithmetic tokens the lexer also recognises the shapes of
/// general-purpose expression syntax (names, strings, other operators) so the
/// parser can reject them as unsupported rather than as garbage.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literals such as `42`, `3.14`, `.5`, `2.` or `1e-3`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    /// Identifiers and keywords, e.g. `__import__`, `lambda`, `x`, `π`.
    #[regex(r"[\p{XID_Start}_][\p{XID_Continue}]*", |lex| lex.slice().to_string())]
    Name(String),
    /// Quoted string literals.
    #[regex(r#"'([^'\\\n]|\\.)*'"#, |lex| lex.slice().to_string())]
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice().to_string())]
    Text(String),
    /// Operators and punctuation with no meaning in arithmetic.
    #[token("**", |lex| lex.slice().to_string())]
    #[token("//", |lex| lex.slice().to_string())]
    #[token("%", |lex| lex.slice().to_string())]
    #[token("@", |lex| lex.slice().to_string())]
    #[token("^", |lex| lex.slice().to_string())]
    #[token("&", |lex| lex.slice().to_string())]
    #[token("|", |lex| lex.slice().to_string())]
    #[token("~", |lex| lex.slice().to_string())]
    #[token("<<", |lex| lex.slice().to_string())]
    #[token(">>", |lex| lex.slice().to_string())]
    #[token("<", |lex| lex.slice().to_string())]
    #[token(">", |lex| lex.slice().to_string())]
    #[token("<=", |lex| lex.slice().to_string())]
    #[token(">=", |lex| lex.slice().to_string())]
    #[token("==", |lex| lex.slice().to_string())]
    #[token("!=", |lex| lex.slice().to_string())]
    #[token(".", |lex| lex.slice().to_string())]
    #[token(",", |lex| lex.slice().to_string())]
    #[token(":", |lex| lex.slice().to_string())]
    #[token("[", |lex| lex.slice().to_string())]
    #[token("]", |lex| lex.slice().to_string())]
    #[token("{", |lex| lex.slice().to_string())]
    #[token("}", |lex| lex.slice().to_string())]
    Foreign(String),
}

impl Token {
    /// Whether the token belongs to syntax outside plain arithmetic.
    pub fn is_foreign(&self) -> bool {
        matches!(self, Token::Name(_) | Token::Text(_) | Token::Foreign(_))
    }
}

fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
