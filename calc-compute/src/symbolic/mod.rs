//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions are represented as a tree of [`Expr`] nodes. The tree is similar to the
//! [`calc_parser::parser::ast::Expr`] produced by the parser, with two differences: it carries no
//! span information, and unparenthesized chains of the same operator are **flattened** into a
//! single node. `x + y + z` is one [`Expr::Add`] with three terms, while `x + (y + z)` keeps the
//! grouping as written.
//!
//! Flat chains make it easy to find and combine "like terms" (e.g. `x + x = 2x`), since the terms
//! in question all sit at the same level of the tree.
//!
//! ```
//! use calc_compute::symbolic::expr::{Expr, ExprKind};
//!
//! let expr = calc_compute::parse("x + (y + z)").unwrap();
//! assert_eq!(expr.kind(), ExprKind::Add);
//! assert_eq!(expr.operand_count(), 2);
//! assert_eq!(expr.operand(1).map(Expr::kind), Some(ExprKind::Add));
//! ```
//!
//! # Simplification
//!
//! The [`simplify()`] function accepts an expression and returns a simplified version of it, by
//! applying a set of rewriting rules until none of them apply. See the [`mod@simplify`] module.
//!
//! ```
//! use calc_compute::{parse, simplify};
//!
//! // `x + x + x = 3x`
//! let simplified = simplify(parse("x + x + x").unwrap());
//! assert!(simplified.is_identical_to(&parse("3x").unwrap()));
//! ```

pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use expr::Expr;
pub use simplify::{simplify, simplify_with_steps, Simplifier};
pub use step_collector::StepCollector;
