//! Atom classification for the sprig language
//!
//! Every non-bracket token is an atomic token and must classify into exactly
//! one literal category. Classification runs a fixed-priority pattern table;
//! the first matching pattern wins and builds the typed literal value.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sprig::parser::ast::Literal;
use crate::sprig::parser::common::ParseError;

/// The literal categories, in classification order
#[derive(Debug, Clone, Copy)]
enum AtomKind {
    Integer,
    Float,
    Boolean,
    StringLit,
    Variable,
}

/// Atomic token patterns, tried in declaration order.
///
/// Declaration order is the classification priority: a token shaped like
/// several categories resolves to the first match (`-5` fits both the
/// integer and the identifier pattern and must classify as an integer).
const ATOM_PATTERNS: &[(AtomKind, &str)] = &[
    (AtomKind::Integer, r"^-?[0-9]+$"),
    (AtomKind::Float, r"^-?[0-9]+\.[0-9]+$"),
    (AtomKind::Boolean, r"^#[tf]$"),
    (AtomKind::StringLit, r#"^"(\\.|[^"\\])*"$"#),
    (
        AtomKind::Variable,
        r"^[A-Za-z!@$%&*_=+|<>/?-][A-Za-z0-9!@$%&*_=+|<>/?-]*$",
    ),
];

static ATOM_MATCHERS: Lazy<Vec<(AtomKind, Regex)>> = Lazy::new(|| {
    ATOM_PATTERNS
        .iter()
        .map(|(kind, pattern)| (*kind, Regex::new(pattern).unwrap()))
        .collect()
});

/// Classify one atomic token into its literal category.
///
/// Total over all input strings: every token yields either a literal or a
/// syntax error naming the token.
pub fn classify(token: &str) -> Result<Literal, ParseError> {
    for (kind, matcher) in ATOM_MATCHERS.iter() {
        if matcher.is_match(token) {
            return build_literal(*kind, token);
        }
    }
    Err(invalid_atom(token))
}

/// Build the typed literal for a pattern-matched token.
///
/// Numeric conversion can still fail (digit runs beyond the 64-bit range)
/// and reports the same invalid-atom message as a pattern miss.
fn build_literal(kind: AtomKind, token: &str) -> Result<Literal, ParseError> {
    match kind {
        AtomKind::Integer => token
            .parse::<i64>()
            .map(Literal::Int)
            .map_err(|_| invalid_atom(token)),
        AtomKind::Float => token
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|_| invalid_atom(token)),
        AtomKind::Boolean => match token {
            "#t" => Ok(Literal::Bool(true)),
            "#f" => Ok(Literal::Bool(false)),
            _ => Err(invalid_atom(token)),
        },
        AtomKind::StringLit => Ok(Literal::Str(token.to_string())),
        AtomKind::Variable => Ok(Literal::Var(token.to_string())),
    }
}

fn invalid_atom(token: &str) -> ParseError {
    ParseError::SyntaxError(format!("Invalid atomic symbol `{token}`"))
}
