/*!
# Validator

Boundary collaborator over the two-phase pipeline: feed a ready-made text
buffer through the lexer and the parser, and either hand back the fully-built
value tree or the first stage error untranslated. Also provides the report
writer used by the CLI, which renders only the direct children of the
top-level value.
*/
use anyhow::Context as _;
use colored::Colorize;
use std::error::Error;
use std::fmt;
use std::io::{self, ErrorKind, Write};

use crate::parser::{self, ParseError};
use crate::tokenizer::{self, LexError};
use crate::value::Value;

/// A failure from either stage of the pipeline, carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The lexer rejected the raw text.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
}

impl Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => err.fmt(f),
            Self::Parse(err) => err.fmt(f),
        }
    }
}

impl From<LexError> for ValidationError {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ParseError> for ValidationError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Run the full pipeline on an in-memory document: lex, then parse.
///
/// The returned [`Value`] reports which top-level shape the document held,
/// so callers dispatch on the enum rather than guessing.
///
/// # Errors
///
/// Returns the first [`ValidationError`] either stage produced; a malformed
/// document has exactly one outcome, rejection.
pub fn validate(text: &str) -> Result<Value, ValidationError> {
    let tokens = tokenizer::tokenize(text)?;
    let value = parser::parse(&tokens)?;
    log::debug!("document is valid, top-level shape: {}", value.kind());
    Ok(value)
}

/// Write a flattened view of a parsed document to `writer`: one line per
/// direct child of the top-level container, or the scalar itself. Nested
/// containers are shown compactly on their parent's line, not expanded.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    value: &Value,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    writeln!(writer, "{} : {}", key.cyan(), val)?;
                }
            }
            Value::Array(arr) => {
                for item in arr {
                    writeln!(writer, "{item}")?;
                }
            }
            scalar => writeln!(writer, "{scalar}")?,
        }
        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write report to stdout"),
    }
}
