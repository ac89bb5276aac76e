//! # sprig
//!
//! A parser front end for the sprig language, a small Lisp dialect.
//!
//! The crate turns sprig source text into abstract syntax trees in two
//! stages: a lexer that splits the text into tokens, and a parser that
//! classifies atomic tokens into typed literals and folds parenthesized
//! runs into nested list expressions.
//!
//! ```text
//! (define (double n) (* n 2))
//! (double 21)
//! ```
//!
//! Parsing yields one expression per top-level form, in source order.

pub mod sprig;
