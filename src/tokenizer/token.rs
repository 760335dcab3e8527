//! # JSON Token
//!
//! Defines possible tokens lexed from a JSON document.
use std::fmt::Display;

/// Represents a single lexical unit of a JSON document. The token stream is
/// flat; nesting is reconstructed by the parser from the delimiter tokens.
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Token {
    /* Delimiters */
    /// Opening curly brace
    LCurly,

    /// Closing curly brace
    RCurly,

    /// Opening square bracket
    LSquare,

    /// Closing square bracket
    RSquare,

    /// Colon character
    Colon,

    /// Comma character
    Comma,

    /* Values */
    /// Nil value
    Null,

    /// Boolean value
    Bool(bool),

    /// String value with escape sequences already shallow-decoded (the
    /// character following a backslash is kept literally)
    Str(String),

    /// Integer value
    Int(i64),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LCurly => write!(f, "{{"),
            Token::RCurly => write!(f, "}}"),
            Token::LSquare => write!(f, "["),
            Token::RSquare => write!(f, "]"),
            Token::Colon => write!(f, ":"),
            Token::Comma => write!(f, ","),
            Token::Null => write!(f, "null"),
            Token::Bool(val) => write!(f, "{val}"),
            Token::Str(val) => write!(f, "{val}"),
            Token::Int(val) => write!(f, "{val}"),
        }
    }
}
