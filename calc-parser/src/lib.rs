//! Lexer and parser for the textual math expression syntax accepted by the calculator.
//!
//! The [`tokenizer`] turns source text into a stream of [`Token`](tokenizer::Token)s, and the
//! [`parser`] builds a span-carrying syntax tree ([`parser::ast::Expr`]) from those tokens.
//!
//! ```
//! use calc_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("2x^2 + 3").unwrap();
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..8);
//! ```

pub mod parser;
pub mod tokenizer;
