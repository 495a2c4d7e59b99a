//! Simplification rules for negation.

use crate::symbolic::expr::{Expr, Primary};

/// `-(2) = -2`
///
/// Negating a numeric literal produces the negative literal. This is the form the parser produces
/// for `-2`, so the printed form of a simplified expression reads back identically.
pub fn fold_negated_literal(expr: &Expr) -> Option<Expr> {
    let Expr::Neg(operand) = expr else {
        return None;
    };

    match operand.as_ref() {
        Expr::Primary(Primary::Integer(_) | Primary::Float(_)) => Some(-(**operand).clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn literals() {
        let neg = |expr| Expr::Neg(Box::new(expr));
        assert_eq!(fold_negated_literal(&neg(Expr::integer(2))), Some(Expr::integer(-2)));
        assert_eq!(fold_negated_literal(&neg(Expr::integer(-2))), Some(Expr::integer(2)));
        assert_eq!(fold_negated_literal(&neg(Expr::float(0.5))), Some(Expr::float(-0.5)));
        assert_eq!(fold_negated_literal(&neg(Expr::symbol("x"))), None);
        assert_eq!(fold_negated_literal(&Expr::integer(2)), None);
    }
}
