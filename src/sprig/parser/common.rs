//! Common parser module
//!
//! This module contains the error type shared by atom classification and
//! structural parsing.

use std::fmt;

/// Errors that can occur during parsing
///
/// There is a single reported kind: a syntax error with a human-readable
/// message naming the offending token or bracket. Parsing is all-or-nothing,
/// so no partial results ever accompany an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Malformed atom or unbalanced bracket
    SyntaxError(String),
}

impl ParseError {
    /// The bare message, without the display prefix
    pub fn message(&self) -> &str {
        match self {
            ParseError::SyntaxError(message) => message,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::SyntaxError(message) => write!(f, "Syntax error: {message}"),
        }
    }
}

impl std::error::Error for ParseError {}
