/*!
# JSON Parser

Recursive-descent parser over the flat token stream produced by
[`crate::tokenizer::tokenize`]. Each helper returns how many tokens it
consumed alongside the value it built, so the cursor is threaded explicitly
with no shared mutable index state across recursive calls.

The grammar is deliberately lax in two places, matching the accepted corpus:
arrays skip every comma they see (a leading or doubled comma is tolerated),
and objects silently advance past tokens that cannot start a member. See the
per-function docs.

## Errors

A structurally invalid arrangement aborts the whole parse with a
[`ParseError`]; no partial tree is ever returned.
*/
use indexmap::IndexMap;
use std::error::Error;
use std::fmt;

use crate::tokenizer::Token;
use crate::value::Value;

/// Represents errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token stream was empty.
    EmptyInput,
    /// An array was still open when the tokens ran out.
    UnmatchedBracket,
    /// An object was still open when the tokens ran out.
    UnmatchedBrace,
    /// An object key was not immediately followed by a colon.
    MissingColon,
    /// An object comma was not followed by the next key.
    TrailingComma,
    /// A token that cannot start a value.
    InvalidToken(Token),
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty token stream passed to parser"),
            Self::UnmatchedBracket => write!(f, "no closing bracket"),
            Self::UnmatchedBrace => write!(f, "no closing brace"),
            Self::MissingColon => {
                write!(f, "invalid object, expected colon after key")
            }
            Self::TrailingComma => write!(f, "invalid object, trailing comma"),
            Self::InvalidToken(token) => {
                write!(f, "unable to parse json, invalid token {token}")
            }
        }
    }
}

/// Parse a token stream into a single [`Value`] tree.
///
/// Parsing starts at token index 0; tokens trailing a complete top-level
/// value are not validated.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first structural violation
/// encountered.
pub fn parse(tokens: &[Token]) -> Result<Value, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (_, value) = parse_value(tokens, 0)?;
    log::debug!("parsed top-level {}", value.kind());
    Ok(value)
}

/// Parse the value starting at `position`, returning the number of tokens
/// consumed and the constructed value. A scalar consumes exactly one token;
/// an opening delimiter hands off to the matching container rule.
fn parse_value(
    tokens: &[Token],
    position: usize,
) -> Result<(usize, Value), ParseError> {
    match &tokens[position] {
        Token::Null => Ok((1, Value::Null)),
        Token::Bool(b) => Ok((1, Value::Bool(*b))),
        Token::Int(n) => Ok((1, Value::Int(*n))),
        Token::Str(s) => Ok((1, Value::Str(s.clone()))),
        Token::LSquare => {
            let (consumed, arr) = parse_array(tokens, position + 1)?;
            Ok((consumed + 1, arr))
        }
        Token::LCurly => {
            let (consumed, obj) = parse_object(tokens, position + 1)?;
            Ok((consumed + 1, obj))
        }
        other => Err(ParseError::InvalidToken(other.clone())),
    }
}

/// Parse the members of an array whose `[` sits just before `position`.
///
/// Commas are skipped wherever they appear, so `[,1]` and `[1,,2]` are
/// accepted; the loop only distinguishes commas, the closing bracket, and
/// value starts.
fn parse_array(
    tokens: &[Token],
    position: usize,
) -> Result<(usize, Value), ParseError> {
    let mut items = Vec::new();

    let mut i = position;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Comma => i += 1,
            Token::RSquare => {
                return Ok((i - position + 1, Value::Array(items)));
            }
            _ => {
                let (consumed, value) = parse_value(tokens, i)?;
                items.push(value);
                i += consumed;
            }
        }
    }

    Err(ParseError::UnmatchedBracket)
}

/// Parse the members of an object whose `{` sits just before `position`.
///
/// A string at member position is a key and must be followed by a colon and
/// a value; a duplicate key overwrites the earlier entry. After a comma the
/// next token must be the next key. Tokens that fit none of the member
/// positions are silently skipped.
fn parse_object(
    tokens: &[Token],
    position: usize,
) -> Result<(usize, Value), ParseError> {
    let mut members = IndexMap::new();

    let mut i = position;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Str(key) => {
                let key = key.clone();
                i += 1;
                if tokens.get(i) != Some(&Token::Colon) {
                    return Err(ParseError::MissingColon);
                }
                i += 1;
                if i >= tokens.len() {
                    return Err(ParseError::UnmatchedBrace);
                }
                let (consumed, value) = parse_value(tokens, i)?;
                i += consumed;
                // last write wins for duplicate keys
                members.insert(key, value);
            }
            Token::Comma => {
                i += 1;
                match tokens.get(i) {
                    Some(Token::Str(_)) => {}
                    Some(_) => return Err(ParseError::TrailingComma),
                    None => return Err(ParseError::UnmatchedBrace),
                }
            }
            Token::RCurly => {
                return Ok((i - position + 1, Value::Object(members)));
            }
            _ => i += 1,
        }
    }

    Err(ParseError::UnmatchedBrace)
}
