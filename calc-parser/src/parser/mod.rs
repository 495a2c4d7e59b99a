pub mod ast;
pub mod error;
pub mod token;

use calc_error::ErrorKind;
use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value, and is returned from
/// the enclosing function.
///
/// Fatal errors immediately short-circuit the parsing process. If every parsing function fails
/// with a non-fatal error, execution continues after the macro.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser
                Err(_) => {},
            }
        )+
    }};
}

/// The deepest the parser recurses into nested parentheses, calls, unary operators and chains of
/// `^` before giving up with [`kind::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 64;

/// A high-level parser for math expressions. This is the type to use to parse an arbitrary piece
/// of input into a syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// How many nested constructs are currently being parsed.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    ///
    /// Returns an error if the source contains characters that are not part of the expression
    /// syntax.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
            depth: 0,
        })
    }

    /// Runs the given parsing function one nesting level deeper.
    ///
    /// Returns a fatal [`kind::NestingTooDeep`] error pointing at the current token if the
    /// function would run deeper than [`MAX_NESTING_DEPTH`]. The depth is restored whether or not
    /// the function succeeds.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_fatal(kind::NestingTooDeep { limit: MAX_NESTING_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(self.span(), kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(self.span(), kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next non-whitespace token without moving the cursor. Returns [`None`] if there
    /// are no more tokens.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Parses a value from the given stream of tokens without consuming any of them. Returns
    /// [`None`] if the value could not be parsed.
    pub fn peek<T: Parse>(&mut self) -> Option<T> {
        let start = self.cursor;
        let value = T::parse(self).ok();
        self.cursor = start;
        value
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    self.cursor = start;
                    return Err(err);
                },
            }

            if self.peek_token().is_some_and(|token| token.kind == delimiter) {
                // the delimiter is known to be there
                let _ = self.next_token();
            } else {
                return Ok(values);
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;

        match self.peek_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(Error::new_fatal(token.span.clone(), kind::UnclosedParenthesis { opening: false }))
            },
            Some(token) => Err(Error::new_fatal(token.span.clone(), kind::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)` (the operators appear to the
    /// left of the operand).
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors. Implicit
    /// multiplication (`2x`) shares this precedence.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::{Literal, LitFloat, LitInt, LitSym},
        paren::Paren,
        unary::Unary,
    };
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    /// Parses the given source into an expression, panicking on failure.
    fn parse(source: &str) -> Expr {
        Parser::new(source).unwrap().try_parse_full::<Expr>().unwrap()
    }

    /// Parses the given source, expecting a failure, and returns the error.
    fn parse_err(source: &str) -> Error {
        match Parser::new(source) {
            Ok(mut parser) => parser.try_parse_full::<Expr>().unwrap_err(),
            Err(err) => err,
        }
    }

    fn int(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Integer(LitInt { value: value.to_string(), span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn bin(lhs: Expr, kind: BinOpKind, op_span: Range<usize>, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: BinOp { kind, implicit: false, span: op_span },
            rhs: Box::new(rhs),
            span,
        })
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16"), int("16", 0..2));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14"), Expr::Literal(Literal::Float(LitFloat {
            value: "3.14".to_string(),
            span: 0..4,
        })));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("  var_2 "), sym("var_2", 2..7));
    }

    #[test]
    fn binary_left_associative() {
        // (1 - 2) - 3
        assert_eq!(parse("1 - 2 - 3"), bin(
            bin(int("1", 0..1), BinOpKind::Sub, 2..3, int("2", 4..5)),
            BinOpKind::Sub,
            6..7,
            int("3", 8..9),
        ));
    }

    #[test]
    fn binary_precedence() {
        // 1 + (2 * 3)
        assert_eq!(parse("1+2*3"), bin(
            int("1", 0..1),
            BinOpKind::Add,
            1..2,
            bin(int("2", 2..3), BinOpKind::Mul, 3..4, int("3", 4..5)),
        ));
    }

    #[test]
    fn power_right_associative() {
        // 2 ^ (3 ^ 4)
        assert_eq!(parse("2^3^4"), bin(
            int("2", 0..1),
            BinOpKind::Exp,
            1..2,
            bin(int("3", 2..3), BinOpKind::Exp, 3..4, int("4", 4..5)),
        ));
    }

    #[test]
    fn power_binds_tighter_than_neg() {
        // -(x ^ 2)
        assert_eq!(parse("-x^2"), Expr::Unary(Unary {
            operand: Box::new(bin(sym("x", 1..2), BinOpKind::Exp, 2..3, int("2", 3..4))),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
    }

    #[test]
    fn negative_exponent() {
        // 2 ^ (-1)
        assert_eq!(parse("2^-1"), bin(
            int("2", 0..1),
            BinOpKind::Exp,
            1..2,
            Expr::Unary(Unary {
                operand: Box::new(int("1", 3..4)),
                op: UnaryOp { kind: UnaryOpKind::Neg, span: 2..3 },
                span: 2..4,
            }),
        ));
    }

    #[test]
    fn implicit_multiplication() {
        let expr = parse("2x^2");
        let Expr::Binary(binary) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(binary.op.kind, BinOpKind::Mul);
        assert!(binary.op.implicit);
        assert_eq!(*binary.lhs, int("2", 0..1));
        assert_eq!(*binary.rhs, bin(sym("x", 1..2), BinOpKind::Exp, 2..3, int("2", 3..4)));
    }

    #[test]
    fn implicit_multiplication_is_not_subtraction() {
        let Expr::Binary(binary) = parse("2 -3") else {
            panic!("expected a binary expression");
        };
        assert_eq!(binary.op.kind, BinOpKind::Sub);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("(1 + x)"), Expr::Paren(Paren {
            expr: Box::new(bin(int("1", 1..2), BinOpKind::Add, 3..4, sym("x", 5..6))),
            span: 0..7,
        }));
    }

    #[test]
    fn function_call() {
        assert_eq!(parse("sin(x)"), Expr::Call(Call {
            name: LitSym { name: "sin".to_string(), span: 0..3 },
            args: vec![sym("x", 4..5)],
            span: 0..6,
            paren_span: 3..6,
        }));
    }

    #[test]
    fn function_call_many_args() {
        let Expr::Call(call) = parse("f(1, 2, x + 3)") else {
            panic!("expected a function call");
        };
        assert_eq!(call.args.len(), 3);
    }

    #[test]
    fn whole_input_once() {
        // no silent truncation of the trailing input
        assert!(parse_err("1 + 2 3 )").is::<kind::UnclosedParenthesis>());
        assert!(parse_err("1 + 2,").is::<kind::ExpectedEof>());
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse_err("(1 + 2");
        assert!(err.is::<kind::UnclosedParenthesis>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn empty_parenthesis() {
        assert!(parse_err("3 * ()").is::<kind::EmptyParenthesis>());
    }

    #[test]
    fn dangling_operator() {
        assert!(parse_err("1 +").is::<kind::UnexpectedEof>());
        assert!(parse_err("* 2").is::<kind::ExpectedExpr>());
    }

    #[test]
    fn unrecognized_character() {
        let err = parse_err("x = 2");
        assert!(err.is::<kind::UnrecognizedCharacter>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn empty_input() {
        assert!(parse_err("   ").is::<kind::UnexpectedEof>());
    }

    #[test]
    fn nesting_within_limit() {
        let depth = MAX_NESTING_DEPTH - 2;
        let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&source).span(), 0..source.len());
    }

    #[test]
    fn nesting_too_deep() {
        let source = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
        let err = parse_err(&source);
        assert_eq!(err.kind.as_any().downcast_ref::<kind::NestingTooDeep>(), Some(&kind::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        }));
        assert_eq!(err.spans, vec![MAX_NESTING_DEPTH..MAX_NESTING_DEPTH + 1]);

        assert!(parse_err(&format!("sin({}x", "sin(".repeat(5000))).is::<kind::NestingTooDeep>());
        assert!(parse_err(&format!("{}x", "-".repeat(5000))).is::<kind::NestingTooDeep>());
        assert!(parse_err(&format!("{}2", "2^".repeat(5000))).is::<kind::NestingTooDeep>());
    }

    #[test]
    fn depth_is_restored_after_backtracking() {
        // every operand here is shallow, but there are many of them
        let source = vec!["(-x)^2"; MAX_NESTING_DEPTH * 4].join(" + ");
        assert_eq!(parse(&source).span(), 0..source.len());
    }
}
