//! Token definitions for the sprig language
//!
//! This module defines all the tokens that can be produced by the sprig
//! lexer. The tokens are defined using the logos derive macro for efficient
//! tokenization.

use logos::Logos;

/// All possible tokens in sprig source text
#[derive(Logos, Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    // Structural brackets
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // A complete quote-delimited string literal, escapes and spaces included
    #[regex(r#""(\\.|[^"\\])*""#, priority = 3)] // must win over Atom at equal match length
    StringLit,

    // Line comments run to the end of the line
    #[regex(r";[^\n]*", allow_greedy = true)]
    Comment,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // Catch-all for atomic tokens; a quote that opens no well-formed string
    // literal lands here and is rejected later by the classifier
    #[regex(r"[^\s();]+")]
    Atom,
}

impl Token {
    /// Check if this token is a structural bracket
    pub fn is_bracket(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }

    /// Check if this token participates in parsing
    pub fn is_significant(&self) -> bool {
        !matches!(self, Token::Comment | Token::Whitespace)
    }
}
