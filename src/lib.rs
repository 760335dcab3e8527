/*!
# `jsonvet` Library

Decides whether a JSON document is syntactically valid through a two-phase
pipeline: a lexer that flattens the text into tokens, and a recursive-descent
parser that rebuilds the nesting into a [`value::Value`] tree.
*/

pub mod commands;
pub mod parser;
pub mod tokenizer;
pub mod validator;
pub mod value;

// Re-exports
pub use validator::validate;
