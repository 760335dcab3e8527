//! # JSON Lexer
//!
//! Scans an input JSON document into a flat sequence of tokens in a single
//! left-to-right pass. Literal scans (`null`/`true`/`false`/numbers) are
//! delimiter-based: they consume up to the next structural delimiter (`,`,
//! `]`, `}`) rather than the next whitespace, then trim and compare. String
//! escape decoding is shallow: the character following a backslash is copied
//! into the token literally and not reinterpreted.
use std::error::Error;
use std::fmt;

use crate::tokenizer::Token;

/// Characters skipped between tokens.
const WHITESPACE: [char; 5] = [' ', '\r', '\t', '\n', '\u{0008}'];

/// Represents errors that can occur while lexing a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input text was empty.
    EmptyInput,
    /// An `n` started a literal that is not exactly `null`.
    InvalidNull,
    /// A `t` or `f` started a literal that is not exactly `true`/`false`.
    InvalidBool,
    /// The input ended before a closing quote was found.
    UnterminatedString,
    /// A multi-digit number started with `0`.
    LeadingZero,
    /// A number scan consumed text that is not a valid integer literal.
    InvalidNumber,
    /// A character that cannot start any token.
    UnexpectedCharacter(char),
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no input received"),
            Self::InvalidNull => write!(f, "invalid null token"),
            Self::InvalidBool => write!(f, "invalid bool token"),
            Self::UnterminatedString => write!(f, "missing closing quote"),
            Self::LeadingZero => {
                write!(f, "invalid number token, leading zeros")
            }
            Self::InvalidNumber => write!(f, "invalid number token"),
            Self::UnexpectedCharacter(c) => {
                write!(f, "invalid json token: {c}")
            }
        }
    }
}

/// A lexer over the characters of a JSON document.
struct Lexer {
    /// The input character sequence to tokenize
    input: Vec<char>,
    /// Current position (index of the character under examination)
    position: usize,
}

impl Lexer {
    fn new(text: &str) -> Self {
        Self {
            input: text.chars().collect(),
            position: 0,
        }
    }

    /// Scans the entire input into tokens, failing fast on the first
    /// malformed construct.
    fn lex(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(&c) = self.input.get(self.position) {
            match c {
                c if WHITESPACE.contains(&c) => self.position += 1,
                'n' => tokens.push(self.lex_null()?),
                't' | 'f' => tokens.push(self.lex_bool()?),
                '"' => tokens.push(self.lex_string()?),
                '0'..='9' => tokens.push(self.lex_number()?),
                '{' => tokens.push(self.lex_delimiter(Token::LCurly)),
                '}' => tokens.push(self.lex_delimiter(Token::RCurly)),
                '[' => tokens.push(self.lex_delimiter(Token::LSquare)),
                ']' => tokens.push(self.lex_delimiter(Token::RSquare)),
                ',' => tokens.push(self.lex_delimiter(Token::Comma)),
                ':' => tokens.push(self.lex_delimiter(Token::Colon)),
                other => return Err(LexError::UnexpectedCharacter(other)),
            }
        }

        Ok(tokens)
    }

    fn lex_delimiter(&mut self, token: Token) -> Token {
        self.position += 1;
        token
    }

    /// Consumes characters from the current position up to (but not
    /// including) the next structural delimiter or the end of input,
    /// returning the consumed text and its length in characters.
    fn scan_to_delimiter(&self) -> (String, usize) {
        let mut raw = String::new();
        let mut consumed = 0;
        for &c in &self.input[self.position..] {
            if matches!(c, ',' | ']' | '}') {
                break;
            }
            raw.push(c);
            consumed += 1;
        }
        (raw, consumed)
    }

    /// Scans a `null` literal. The consumed run may carry trailing
    /// whitespace before the delimiter, so the comparison is on the trimmed
    /// text.
    fn lex_null(&mut self) -> Result<Token, LexError> {
        let (raw, consumed) = self.scan_to_delimiter();
        if raw.trim() != "null" {
            return Err(LexError::InvalidNull);
        }
        self.position += consumed;
        Ok(Token::Null)
    }

    /// Scans a `true`/`false` literal, trimmed like [`Self::lex_null`].
    fn lex_bool(&mut self) -> Result<Token, LexError> {
        let (raw, consumed) = self.scan_to_delimiter();
        let token = match raw.trim() {
            "true" => Token::Bool(true),
            "false" => Token::Bool(false),
            _ => return Err(LexError::InvalidBool),
        };
        self.position += consumed;
        Ok(token)
    }

    /// Scans a quoted string, shallow-decoding escapes: a backslash causes
    /// the following character to be copied verbatim and both to be skipped,
    /// so `\"` yields `"` and `\n` yields `n`.
    fn lex_string(&mut self) -> Result<Token, LexError> {
        let mut content = String::new();

        // Skip the opening quote
        let mut i = self.position + 1;
        while i < self.input.len() {
            let c = self.input[i];

            if c == '\\' {
                match self.input.get(i + 1) {
                    Some(&escaped) => {
                        content.push(escaped);
                        i += 2;
                    }
                    // dangling backslash at end of input
                    None => break,
                }
                continue;
            }

            if c == '"' {
                self.position = i + 1;
                return Ok(Token::Str(content));
            }

            content.push(c);
            i += 1;
        }

        Err(LexError::UnterminatedString)
    }

    /// Scans an integer literal. Only unsigned digit-led forms reach this
    /// point; fractional, exponent, and signed forms are out of grammar and
    /// fail the integer parse.
    fn lex_number(&mut self) -> Result<Token, LexError> {
        let (raw, consumed) = self.scan_to_delimiter();
        let text = raw.trim();

        if text.len() > 1 && text.starts_with('0') {
            return Err(LexError::LeadingZero);
        }

        let value = text.parse::<i64>().map_err(|_| LexError::InvalidNumber)?;
        self.position += consumed;
        Ok(Token::Int(value))
    }
}

/// Tokenize a JSON document into a flat token sequence.
///
/// # Errors
///
/// Returns a [`LexError`] describing the first malformed construct
/// encountered; an empty input is itself a [`LexError::EmptyInput`].
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    if text.is_empty() {
        return Err(LexError::EmptyInput);
    }

    let tokens = Lexer::new(text).lex()?;
    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(tokenize(""), Err(LexError::EmptyInput));
    }

    #[test]
    fn whitespace_only_input_yields_no_tokens() {
        let tokens = tokenize(" \t\n\r").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn null_literal() {
        assert_eq!(tokenize("null").unwrap(), vec![Token::Null]);
    }

    #[test]
    fn invalid_null_literals() {
        for input in ["nall", "n", "nully"] {
            assert_eq!(tokenize(input), Err(LexError::InvalidNull), "{input}");
        }
    }

    #[test]
    fn bool_literals() {
        assert_eq!(tokenize("true").unwrap(), vec![Token::Bool(true)]);
        assert_eq!(tokenize("false").unwrap(), vec![Token::Bool(false)]);
    }

    #[test]
    fn bool_with_trailing_whitespace_before_delimiter() {
        // the delimiter-based scan consumes the space, the trim rescues it
        let tokens = tokenize("[true ,false]").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LSquare,
                Token::Bool(true),
                Token::Comma,
                Token::Bool(false),
                Token::RSquare,
            ]
        );
    }

    #[test]
    fn invalid_bool_literals() {
        for input in ["tree", "t", "tr", "treef", "float", "f", "flo"] {
            assert_eq!(tokenize(input), Err(LexError::InvalidBool), "{input}");
        }
    }

    #[test]
    fn strings() {
        let cases = [
            (r#""""#, ""),
            (r#" "one""#, "one"),
            (r#" " two ""#, " two "),
            (r#""\"three\"""#, "\"three\""),
        ];
        for (input, expected) in cases {
            assert_eq!(
                tokenize(input).unwrap(),
                vec![Token::Str(expected.to_string())],
                "{input}"
            );
        }
    }

    #[test]
    fn escape_decoding_is_shallow() {
        // `\n` keeps the literal `n`, `\\` collapses to one backslash
        let tokens = tokenize(r#""a\nb\\c""#).unwrap();
        assert_eq!(tokens, vec![Token::Str("anb\\c".to_string())]);
    }

    #[test]
    fn unterminated_string() {
        assert_eq!(tokenize("\""), Err(LexError::UnterminatedString));
        assert_eq!(tokenize("\"abc"), Err(LexError::UnterminatedString));
        // dangling backslash right before end of input
        assert_eq!(tokenize("\"abc\\"), Err(LexError::UnterminatedString));
    }

    #[test]
    fn numbers() {
        let cases = [(" 0", 0), ("1", 1), ("10", 10), ("69", 69), ("420", 420)];
        for (input, expected) in cases {
            assert_eq!(
                tokenize(input).unwrap(),
                vec![Token::Int(expected)],
                "{input}"
            );
        }
    }

    #[test]
    fn leading_zero_rejected() {
        assert_eq!(tokenize("01"), Err(LexError::LeadingZero));
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(tokenize("4x5"), Err(LexError::InvalidNumber));
        assert_eq!(tokenize("1.5"), Err(LexError::InvalidNumber));
        assert_eq!(tokenize("1e3"), Err(LexError::InvalidNumber));
    }

    #[test]
    fn interior_whitespace_is_consumed_into_the_number_run() {
        // the scan only stops at structural delimiters, so `1 2` is one
        // run and fails the integer parse rather than lexing as two tokens
        assert_eq!(tokenize("1 2"), Err(LexError::InvalidNumber));
    }

    #[test]
    fn negative_numbers_are_out_of_grammar() {
        // `-` is not a number-scan trigger
        assert_eq!(tokenize("-1"), Err(LexError::UnexpectedCharacter('-')));
    }

    #[test]
    fn flat_array() {
        let tokens = tokenize("[ 1, 69, 420 ]").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LSquare,
                Token::Int(1),
                Token::Comma,
                Token::Int(69),
                Token::Comma,
                Token::Int(420),
                Token::RSquare,
            ]
        );
    }

    #[test]
    fn flat_object() {
        let tokens =
            tokenize(r#"{"a": null,"b": true,"c": 360,"d": "Dog"}"#).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LCurly,
                Token::Str("a".to_string()),
                Token::Colon,
                Token::Null,
                Token::Comma,
                Token::Str("b".to_string()),
                Token::Colon,
                Token::Bool(true),
                Token::Comma,
                Token::Str("c".to_string()),
                Token::Colon,
                Token::Int(360),
                Token::Comma,
                Token::Str("d".to_string()),
                Token::Colon,
                Token::Str("Dog".to_string()),
                Token::RCurly,
            ]
        );
    }

    #[test]
    fn invalid_literal_nested_in_object() {
        let input = r#"{"a": n,"b": {"c": 420}}"#;
        assert_eq!(tokenize(input), Err(LexError::InvalidNull));
    }

    #[test]
    fn single_quote_is_unexpected_character() {
        let input = r#"{"key": "value","key-l": ['list']}"#;
        assert_eq!(tokenize(input), Err(LexError::UnexpectedCharacter('\'')));
    }
}
