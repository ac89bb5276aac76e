//! Lexer module for the sprig language
//!
//! This module contains the tokenization logic for sprig source text,
//! including token definitions and the lexer implementation.
//!
//! String literals and comments
//!
//! A quote-delimited string literal is produced as a single token, spaces
//! and escaped quotes included, so the downstream parser never has to
//! reassemble one. A quote that opens no well-formed string literal is NOT
//! a lexing error: the character is legal inside the catch-all atom rule,
//! so the malformed run lexes as an atom and classification rejects it with
//! the standard invalid-atom message. Together with the whitespace and
//! comment rules this gives the lexer total character coverage, and every
//! malformed input surfaces through the single syntax error kind.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{token_texts, tokenize, tokenize_with_spans};
pub use tokens::Token;
