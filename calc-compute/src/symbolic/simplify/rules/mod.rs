//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies **at the root** of
//! the given expression, or `None` if the rule does not apply. Rules never look at, or rewrite,
//! deeper nodes; the [`Simplifier`](super::Simplifier) is responsible for finding the node to
//! rewrite.
//!
//! Every rule strictly decreases [`Expr::measure`], which guarantees that simplification
//! terminates.

pub mod add;
pub mod multiply;
pub mod negate;

use super::{Rule, Step};
use crate::symbolic::expr::Expr;

/// If the expression is an add expression, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Add(terms) = expr {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a multiplication expression, calls the given transformation function with
/// the factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Mul(factors) = expr {
        f(factors)
    } else {
        None
    }
}

/// Returns the default, ordered list of rules.
///
/// The order matters: the simplifier always tries the rules in this order, and restarts from the
/// first rule after every rewrite.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(Step::MultiplyZero, multiply::multiply_zero),
        Rule::new(Step::FoldIntegers, add::fold_integers),
        Rule::new(Step::CombineLikeTerms, add::combine_like_terms),
        Rule::new(Step::FlattenAdd, add::flatten_add),
        Rule::new(Step::FlattenMul, multiply::flatten_mul),
        Rule::new(Step::AddZero, add::add_zero),
        Rule::new(Step::MultiplyOne, multiply::multiply_one),
        Rule::new(Step::FoldIntegerFactors, multiply::fold_integer_factors),
        Rule::new(Step::FoldNegation, negate::fold_negated_literal),
    ]
}
