//! Simplification rules for expressions involving multiplication.

use crate::primitive::int;
use crate::symbolic::{expr::{Expr, Primary}, simplify::rules::do_multiply};

/// `0*a = 0`
/// `a*0 = 0`
///
/// Only the integer literal `0` collapses a product, and it does so regardless of the other
/// factors: `0*(1/0)` is `0` as well.
pub fn multiply_zero(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        if factors.iter().any(|factor| factor.is_integer_value(0)) {
            Some(Expr::integer(0))
        } else {
            None
        }
    })
}

/// `(ab)c = abc`
pub fn flatten_mul(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, Expr::Mul(_))) {
            return None;
        }

        let mut new_factors = Vec::new();
        for factor in factors {
            match factor {
                Expr::Mul(inner) => new_factors.extend(inner.iter().cloned()),
                factor => new_factors.push(factor.clone()),
            }
        }

        Some(Expr::Mul(new_factors).downgrade())
    })
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            // keep all non-one factors
            .filter(|factor| !factor.is_integer_value(1))
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })
}

/// `2*3*x = 6x`
///
/// All integer literal factors are multiplied together. The product takes the place of the first
/// integer factor.
pub fn fold_integer_factors(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        if factors.iter().filter(|factor| factor.is_integer()).count() < 2 {
            return None;
        }

        let product = factors.iter()
            .filter_map(Expr::as_integer)
            .fold(int(1), |product, n| product * n);
        let mut product = Some(product);
        let new_factors = factors.iter()
            .filter_map(|factor| {
                if factor.is_integer() {
                    product.take().map(|product| Expr::Primary(Primary::Integer(product)))
                } else {
                    Some(factor.clone())
                }
            })
            .collect::<Vec<_>>();

        Some(Expr::Mul(new_factors).downgrade())
    })
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse_expr(input: &str) -> Expr {
        parse(input).unwrap()
    }

    #[test]
    fn zero_collapses_everything() {
        assert_eq!(multiply_zero(&parse_expr("3*x*0")), Some(Expr::integer(0)));
        assert_eq!(multiply_zero(&parse_expr("0*(1/0)")), Some(Expr::integer(0)));
        assert_eq!(multiply_zero(&parse_expr("0.0*x")), None);
        assert_eq!(multiply_zero(&parse_expr("x*y")), None);
    }

    #[test]
    fn flatten() {
        assert_eq!(flatten_mul(&parse_expr("(a*b)*c")), Some(parse_expr("a*b*c")));
        assert_eq!(flatten_mul(&parse_expr("a*(b+c)")), None);
    }

    #[test]
    fn one() {
        assert_eq!(multiply_one(&parse_expr("1*x*1")), Some(parse_expr("x")));
        assert_eq!(multiply_one(&parse_expr("1*1")), Some(Expr::integer(1)));
        assert_eq!(multiply_one(&parse_expr("2*x")), None);
    }

    #[test]
    fn fold_factors() {
        assert_eq!(fold_integer_factors(&parse_expr("x*2*y*3")), Some(parse_expr("x*6*y")));
        assert_eq!(fold_integer_factors(&parse_expr("2*3")), Some(Expr::integer(6)));
        assert_eq!(fold_integer_factors(&parse_expr("2*x")), None);
    }
}
