//! Structural parsing engine
//!
//! The parser is a single-pass stack automaton over the token sequence. An
//! opening bracket pushes an empty list frame; a closing bracket pops the
//! top frame and merges it into the enclosing frame, or into the top-level
//! results when no frame remains open. Atomic tokens go through the
//! classifier and land the same way. The stack depth always equals the
//! number of still-open brackets, so a close on an empty stack and a
//! non-empty stack at end of input are the two structural failure cases.

use crate::sprig::lexer::token_texts;
use crate::sprig::parser::ast::Expr;
use crate::sprig::parser::atoms::classify;
use crate::sprig::parser::common::ParseError;

/// Parse an ordered token sequence into top-level expressions.
///
/// Single pass, left to right, fail-fast: the first malformed atom or
/// unbalanced bracket aborts the whole parse and nothing partial is
/// returned.
pub fn parse<T: AsRef<str>>(tokens: &[T]) -> Result<Vec<Expr>, ParseError> {
    let mut stack: Vec<Vec<Expr>> = Vec::new();
    let mut outputs: Vec<Expr> = Vec::new();

    for token in tokens {
        match token.as_ref() {
            "(" => stack.push(Vec::new()),
            ")" => {
                let frame = match stack.pop() {
                    Some(frame) => frame,
                    None => return Err(ParseError::SyntaxError("Extra )".to_string())),
                };
                emit(&mut stack, &mut outputs, Expr::List(frame));
            }
            atom => {
                let literal = classify(atom)?;
                emit(&mut stack, &mut outputs, Expr::Atom(literal));
            }
        }
    }

    // One report covers any number of still-open frames
    if !stack.is_empty() {
        return Err(ParseError::SyntaxError("Missing )".to_string()));
    }

    Ok(outputs)
}

/// Route a completed expression into the innermost open frame, or into the
/// top-level results when no frame is open.
fn emit(stack: &mut [Vec<Expr>], outputs: &mut Vec<Expr>, expr: Expr) {
    match stack.last_mut() {
        Some(frame) => frame.push(expr),
        None => outputs.push(expr),
    }
}

/// Parse sprig source text end to end (tokenize, then parse).
pub fn parse_source(source: &str) -> Result<Vec<Expr>, ParseError> {
    let tokens = token_texts(source);
    parse(&tokens)
}
