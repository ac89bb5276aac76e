//! Parser module for the sprig language
//!
//! Parsing has two layers. The atom classifier turns a single non-bracket
//! token into a typed literal by trying a fixed-priority pattern table. The
//! structural engine walks the token sequence once with a stack of open
//! list frames and folds parenthesized runs into nested list expressions.
//! Both layers share one error kind, and the first failure anywhere aborts
//! the whole parse.

pub mod ast;
pub mod atoms;
pub mod common;
pub mod engine;

pub use ast::{Expr, Literal};
pub use atoms::classify;
pub use common::ParseError;
pub use engine::{parse, parse_source};
