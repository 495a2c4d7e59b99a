pub mod token;

use crate::parser::error::{kind, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Any character that is not part of the expression syntax is reported as an
/// [`UnrecognizedCharacter`](kind::UnrecognizedCharacter) error pointing at its offset.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        match result {
            Ok(TokenKind::Symbol) | Err(()) => {
                let character = lexeme.chars().next().unwrap_or_default();
                return Err(Error::new_fatal(span, kind::UnrecognizedCharacter { character }));
            },
            Ok(kind) => tokens.push(Token { span, kind, lexeme }),
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "3.5x_1 - sin(.25)^2/y",
            [
                (TokenKind::Float, "3.5"),
                (TokenKind::Name, "x_1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Float, ".25"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
                (TokenKind::Div, "/"),
                (TokenKind::Name, "y"),
            ],
        );
    }

    #[test]
    fn unrecognized_character() {
        let err = tokenize_complete("2 + $x").unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
        assert!(err.fatal);
        assert_eq!(
            err.kind.as_any().downcast_ref::<kind::UnrecognizedCharacter>(),
            Some(&kind::UnrecognizedCharacter { character: '$' }),
        );
    }

    #[test]
    fn complete_skips_nothing() {
        let tokens = tokenize_complete("2 x").unwrap();
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Whitespace, TokenKind::Name]);
        assert_eq!(tokens[2].span, 2..3);
    }
}
