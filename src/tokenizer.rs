//! # Tokenizer/ Lexer
//!
//! Scans an input JSON document into a flat token stream.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{LexError, tokenize};
pub use token::Token;
