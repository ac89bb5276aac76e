//! Expression tree produced by the parser
//!
//! A parsed sprig program is a sequence of expressions, one per top-level
//! form. Each expression is either a classified leaf atom or a parenthesized
//! list of sub-expressions:
//!
//! ```text
//! (define (double n) (* n 2))
//! ```
//!
//! parses to one `List` whose first element is the `define` variable atom.
//! The `Display` implementations render the canonical s-expression text, and
//! the serde derives serialize the tree for the JSON output format.

use std::fmt;

/// A classified atomic value
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Literal {
    /// Integer literal, 64-bit signed
    Int(i64),
    /// Floating-point literal; no exponent forms exist in the source syntax
    Float(f64),
    /// `#t` or `#f`
    Bool(bool),
    /// String literal, raw token text with both delimiting quotes kept
    Str(String),
    /// Identifier, raw token text
    Var(String),
}

/// A single parsed expression
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Expr {
    /// A leaf value
    Atom(Literal),
    /// A parenthesized, possibly empty sequence of sub-expressions in
    /// left-to-right source order
    List(Vec<Expr>),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{value}"),
            // Exponent forms do not exist in the syntax, so render without
            // scientific notation and keep the decimal point for whole values
            Literal::Float(value) => {
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{text}")
                } else {
                    write!(f, "{text}.0")
                }
            }
            Literal::Bool(true) => write!(f, "#t"),
            Literal::Bool(false) => write!(f, "#f"),
            Literal::Str(text) => write!(f, "{text}"),
            Literal::Var(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(literal) => write!(f, "{literal}"),
            Expr::List(items) => {
                write!(f, "(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
