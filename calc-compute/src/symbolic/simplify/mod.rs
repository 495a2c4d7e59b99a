//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a simpler,
//! mathematically equivalent one. It does this by repeatedly applying rewriting [`Rule`]s to the
//! expression until no more rules apply.
//!
//! # Algorithm
//!
//! A [`Simplifier`] holds an ordered list of rules. Starting from the first rule, the simplifier
//! searches the tree in pre-order for the first node where the rule applies. When it finds one,
//! that subtree is replaced in place by the rewritten subtree and the search restarts from the
//! first rule. When no rule applies anywhere in the tree, the expression is returned.
//!
//! The simplifier owns the tree it works on. Only the rewritten subtree is replaced (and the old
//! subtree dropped); the rest of the tree is left untouched, and an expression that no rule
//! applies to is returned as-is.
//!
//! Every rule strictly decreases [`Expr::measure`], so simplification always terminates.

pub mod rules;
pub mod step;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use once_cell::sync::Lazy;
use std::fmt;
use tracing::{debug, trace};

pub use step::Step;

/// A rewriting rule.
///
/// The rewrite function must only look at the root of the given expression, must return [`None`]
/// if it does not apply, and must strictly decrease [`Expr::measure`] if it does.
#[derive(Clone, Copy)]
pub struct Rule {
    /// The step this rule performs, reported to step collectors.
    pub step: Step,

    /// The rewrite function.
    pub rewrite: fn(&Expr) -> Option<Expr>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(step: Step, rewrite: fn(&Expr) -> Option<Expr>) -> Self {
        Self { step, rewrite }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("step", &self.step).finish_non_exhaustive()
    }
}

/// Applies an ordered list of [`Rule`]s to expressions until none of them apply.
#[derive(Debug, Clone)]
pub struct Simplifier {
    rules: Vec<Rule>,
}

impl Default for Simplifier {
    /// Creates a simplifier with the [default rules](rules::default_rules).
    fn default() -> Self {
        Self::new(rules::default_rules())
    }
}

/// The simplifier used by the free [`simplify`] functions.
static DEFAULT_SIMPLIFIER: Lazy<Simplifier> = Lazy::new(Simplifier::default);

/// Searches the tree in pre-order for the first node where the rule applies, and replaces that
/// node with the rewritten expression.
///
/// Returns true if a rewrite happened.
fn rewrite_first(expr: &mut Expr, rule: &Rule) -> bool {
    if let Some(rewritten) = (rule.rewrite)(expr) {
        trace!(step = ?rule.step, from = %expr, to = %rewritten, "applying rewrite");
        *expr = rewritten;
        return true;
    }

    match expr {
        Expr::Primary(_) => false,
        Expr::Add(operands) | Expr::Mul(operands) => {
            operands.iter_mut().any(|operand| rewrite_first(operand, rule))
        },
        Expr::Sub(lhs, rhs) | Expr::Div(lhs, rhs) | Expr::Pow(lhs, rhs) => {
            rewrite_first(lhs, rule) || rewrite_first(rhs, rule)
        },
        Expr::Neg(operand) | Expr::Call(_, operand) => rewrite_first(operand, rule),
    }
}

impl Simplifier {
    /// Creates a simplifier that applies the given rules, in order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Returns the rules of this simplifier, in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Simplify the given expression, reporting every applied rewrite to the step collector.
    pub fn simplify_with(&self, mut expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
        let mut rewrites = 0usize;

        'pass: loop {
            for rule in &self.rules {
                if rewrite_first(&mut expr, rule) {
                    step_collector.push(rule.step);
                    rewrites += 1;
                    continue 'pass;
                }
            }

            // a full pass without any rewrite
            break;
        }

        debug!(rewrites, "simplified expression");
        expr
    }

    /// Simplify the given expression.
    pub fn simplify(&self, expr: Expr) -> Expr {
        self.simplify_with(expr, &mut ())
    }

    /// Simplify the given expression. The steps taken by the simplifier will also be collected
    /// and returned, in the order they were applied.
    pub fn simplify_with_steps(&self, expr: Expr) -> (Expr, Vec<Step>) {
        let mut steps = Vec::new();
        let expr = self.simplify_with(expr, &mut steps);
        (expr, steps)
    }
}

/// Simplify the given expression with the default rules.
pub fn simplify(expr: Expr) -> Expr {
    DEFAULT_SIMPLIFIER.simplify(expr)
}

/// Simplify the given expression with the default rules. The steps taken by the simplifier will
/// also be collected and returned. This is useful for debugging, and also for displaying the steps
/// taken to the user.
pub fn simplify_with_steps(expr: Expr) -> (Expr, Vec<Step>) {
    DEFAULT_SIMPLIFIER.simplify_with_steps(expr)
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    fn parse_expr(input: &str) -> Expr {
        parse(input).unwrap()
    }

    #[test]
    fn product_zero() {
        assert!(simplify(parse_expr("3*x*0")).is_identical_to(&simplify(parse_expr("0"))));
        assert_eq!(simplify(parse_expr("0*(1/0)")), Expr::integer(0));
    }

    #[test]
    fn integer_addition() {
        assert!(simplify(parse_expr("2+3+x")).is_identical_to(&parse_expr("5+x")));
    }

    #[test]
    fn like_terms() {
        assert_eq!(simplify(parse_expr("x + x")), parse_expr("2x"));
        assert_eq!(simplify(parse_expr("x*y + 4*x*y")), parse_expr("5*x*y"));
        assert_eq!(simplify(parse_expr("2x + 1 + 3x + 4")), parse_expr("5x + 5"));
        assert_eq!(simplify(parse_expr("x - x")), parse_expr("x - x"));
        assert_eq!(simplify(parse_expr("x + -x + y")), parse_expr("y"));
    }

    #[test]
    fn add_rules() {
        assert_eq!(simplify(parse_expr("0+0*(3x+5b^2)+0+(3a)")), parse_expr("3a"));
    }

    #[test]
    fn multiply_rules() {
        assert_eq!(simplify(parse_expr("0*(3x+5b^2)*1*(3a)")), Expr::integer(0));
        assert_eq!(simplify(parse_expr("1*3*1*1*1*(1+(x^2+5x+6)*0)*1*1")), Expr::integer(3));
        assert_eq!(simplify(parse_expr("2*(3*x)*y*1")), parse_expr("6*x*y"));
    }

    #[test]
    fn nested_and_mixed() {
        assert_eq!(simplify(parse_expr("(1 + 2) + (x + 0)")), parse_expr("3 + x"));
        assert_eq!(simplify(parse_expr("sin(2 + 2)^(x*1)")), parse_expr("sin(4)^x"));
        assert_eq!(simplify(parse_expr("-(1 + 1) / (y + y)")), parse_expr("-2 / (2y)"));
        assert_eq!(simplify(parse_expr("-(3 + 4) + x")), parse_expr("-7 + x"));
    }

    #[test]
    fn restarts_from_first_rule() {
        // after flattening, the integers can be folded
        let (expr, steps) = simplify_with_steps(parse_expr("(x + 2) + 3"));
        assert_eq!(expr, parse_expr("x + 5"));
        assert_eq!(steps, vec![Step::FlattenAdd, Step::FoldIntegers]);
    }

    #[test]
    fn one_step_per_opportunity() {
        // three independent integer additions
        let (expr, steps) = simplify_with_steps(parse_expr("sin(1 + 1) + cos(2 + 2) * tan(3 + 3)"));
        assert_eq!(expr, parse_expr("sin(2) + cos(4) * tan(6)"));
        assert_eq!(steps, vec![Step::FoldIntegers; 3]);
    }

    #[test]
    fn normal_form_is_untouched() {
        let expr = parse_expr("x + 2*y + sin(z)");
        let Expr::Add(terms) = &expr else {
            panic!("expected an addition");
        };
        let terms_ptr = terms.as_ptr();

        let (simplified, steps) = simplify_with_steps(expr);
        assert!(steps.is_empty());

        // the same allocation came back
        let Expr::Add(terms) = &simplified else {
            panic!("expected an addition");
        };
        assert_eq!(terms.as_ptr(), terms_ptr);
    }

    #[test]
    fn deep_nesting_terminates() {
        // ((((1 + 1) + 1) + 1) ... + 1), 500 levels deep
        let mut expr = Expr::integer(1);
        for _ in 0..500 {
            expr = Expr::Add(vec![expr, Expr::integer(1)]);
        }

        let (expr, steps) = simplify_with_steps(expr);
        assert_eq!(expr, Expr::integer(501));
        assert_eq!(steps.len(), 500);
    }

    #[test]
    fn custom_rule_list() {
        let simplifier = Simplifier::new(vec![Rule::new(Step::AddZero, rules::add::add_zero)]);
        assert_eq!(simplifier.rules().len(), 1);

        // integers are not folded without the folding rule
        assert_eq!(simplifier.simplify(parse_expr("0 + 2 + 3")), parse_expr("2 + 3"));
        assert_eq!(simplifier.simplify(parse_expr("0 + 0")), Expr::integer(0));
    }

    #[test]
    fn idempotent() {
        for input in ["x + x + 2 + 3", "0*y + (a*b)*(c*1)", "2x + 3x - (4 + 0)"] {
            let once = simplify(parse_expr(input));
            let twice = simplify(once.clone());
            assert!(once.is_identical_to(&twice), "{}", input);
        }
    }

    /// Generates arbitrary expressions over a few symbols and small integers.
    fn arb_expr() -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![
            (-3i32..6).prop_map(Expr::integer),
            prop::sample::select(vec!["x", "y", "z"]).prop_map(Expr::symbol),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::Add),
                prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::Mul),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::Sub(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::Div(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::Pow(Box::new(a), Box::new(b))),
                inner.clone().prop_map(|a| Expr::Neg(Box::new(a))),
                inner.prop_map(|a| Expr::Call(crate::symbolic::expr::Func::Sin, Box::new(a))),
            ]
        })
    }

    proptest! {
        #[test]
        fn every_rewrite_decreases_measure(expr in arb_expr()) {
            let rules = rules::default_rules();
            let mut current = expr;

            // apply one rewrite at a time, in the same order as the simplifier
            loop {
                let mut next = current.clone();
                if !rules.iter().any(|rule| rewrite_first(&mut next, rule)) {
                    break;
                }
                prop_assert!(next.measure() < current.measure(), "{} -> {}", current, next);
                current = next;
            }
        }

        #[test]
        fn simplify_is_idempotent(expr in arb_expr()) {
            let once = simplify(expr);
            let twice = simplify(once.clone());
            prop_assert!(once.is_identical_to(&twice), "{} -> {}", once, twice);
        }

        #[test]
        fn simplified_form_round_trips(expr in arb_expr()) {
            let simplified = simplify(expr);
            let printed = simplified.to_string();
            let reparsed = parse(&printed);
            prop_assert!(reparsed.is_ok(), "could not parse {}", printed);
            if let Ok(reparsed) = reparsed {
                let resimplified = simplify(reparsed);
                prop_assert!(simplified.is_identical_to(&resimplified), "{} became {}", printed, resimplified);
            }
        }
    }
}
