//! Implementation of the sprig lexer
//!
//! This module provides convenience functions for tokenizing sprig source
//! text. The actual tokenization is handled entirely by logos.

use crate::sprig::lexer::tokens::Token;
use logos::Logos;

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Source slices of the significant tokens, in order.
///
/// This is the feed for the structural parser: brackets arrive as separate
/// tokens, and whitespace and comments are already stripped.
pub fn token_texts(source: &str) -> Vec<String> {
    tokenize_with_spans(source)
        .into_iter()
        .filter(|(token, _)| token.is_significant())
        .map(|(_, span)| source[span].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("(add 1 2)");
        assert_eq!(
            tokens,
            vec![
                Token::OpenParen,
                Token::Atom,
                Token::Whitespace,
                Token::Atom,
                Token::Whitespace,
                Token::Atom,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_with_spans() {
        let spans = tokenize_with_spans("(x)");
        assert_eq!(
            spans,
            vec![
                (Token::OpenParen, 0..1),
                (Token::Atom, 1..2),
                (Token::CloseParen, 2..3),
            ]
        );
    }

    #[test]
    fn test_token_texts_strips_whitespace() {
        let texts = token_texts("(add 1 2)");
        assert_eq!(texts, vec!["(", "add", "1", "2", ")"]);
    }

    #[test]
    fn test_token_texts_strips_comments() {
        let texts = token_texts("x ; trailing note\ny");
        assert_eq!(texts, vec!["x", "y"]);
    }

    #[test]
    fn test_string_with_spaces_is_one_text() {
        let texts = token_texts(r#"("a b c")"#);
        assert_eq!(texts, vec!["(", r#""a b c""#, ")"]);
    }

    #[test]
    fn test_unterminated_string_text_is_kept() {
        // The malformed run is not dropped; classification rejects it later
        let texts = token_texts(r#""a b"#);
        assert_eq!(texts, vec![r#""a"#, "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(token_texts(""), Vec::<String>::new());
    }

    #[test]
    fn test_multiline_source() {
        let texts = token_texts("(define x 1)\n(double x)\n");
        assert_eq!(
            texts,
            vec!["(", "define", "x", "1", ")", "(", "double", "x", ")"]
        );
    }
}
