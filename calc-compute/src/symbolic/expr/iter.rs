use super::Expr;

/// An iterator that traverses the tree of expressions in left-to-right pre-order: a node is
/// yielded before its operands.
///
/// This iterator is created by [`Expr::pre_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right pre-order.
    pub fn new(expr: &'a Expr) -> Self {
        Self { stack: vec![expr] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        match expr {
            Expr::Primary(_) => {},
            Expr::Add(operands) | Expr::Mul(operands) => {
                self.stack.extend(operands.iter().rev());
            },
            Expr::Sub(lhs, rhs) | Expr::Div(lhs, rhs) | Expr::Pow(lhs, rhs) => {
                self.stack.push(rhs);
                self.stack.push(lhs);
            },
            Expr::Neg(operand) | Expr::Call(_, operand) => self.stack.push(operand),
        }
        Some(expr)
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use pretty_assertions::assert_eq;
    use super::super::ExprKind;

    #[test]
    fn pre_order() {
        let expr = parse("a*b + c^d - -e").unwrap();
        let kinds = expr.pre_order_iter().map(|expr| expr.kind()).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            ExprKind::Sub,
            ExprKind::Add,
            ExprKind::Mul,
            ExprKind::Symbol,
            ExprKind::Symbol,
            ExprKind::Pow,
            ExprKind::Symbol,
            ExprKind::Symbol,
            ExprKind::Neg,
            ExprKind::Symbol,
        ]);

        let symbols = expr.pre_order_iter().filter_map(|expr| expr.as_symbol()).collect::<String>();
        assert_eq!(symbols, "abcde");
    }
}
