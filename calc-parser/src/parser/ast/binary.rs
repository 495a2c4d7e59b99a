use crate::parser::{
    ast::{expr::{Expr, Primary}, unary::Unary},
    error::Error,
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operator, including implicit multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BinOpExt {
    /// A binary operator, such as `+` or `*`.
    Op(BinOp),

    /// Implicit multiplication, such as `2x` or `x(x + 1)`.
    ///
    /// This is not a real operator, but it is treated as one for the purposes of parsing.
    ImplicitMultiplication,
}

impl BinOpExt {
    /// Returns the precedence of the binary operator.
    fn precedence(&self) -> Precedence {
        match self {
            BinOpExt::Op(op) => op.precedence(),
            BinOpExt::ImplicitMultiplication => Precedence::Factor,
        }
    }
}

impl From<BinOp> for BinOpExt {
    fn from(op: BinOp) -> Self {
        BinOpExt::Op(op)
    }
}

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

/// Returns true if the next token can begin the right-hand side of an implicit multiplication.
fn implicit_mul_follows(input: &Parser) -> bool {
    input.peek_token().is_some_and(|token| token.kind.starts_primary())
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing the expression `1 + 2 * 3`, we will first parse the left-hand-side `1`,
    /// then the operator `+`, then the right-hand-side `2`. However, before we build the
    /// corresponding AST node, we should check if the operator after `2` has higher precedence
    /// than `+` (if it exists).
    ///
    /// If it does, we should parse the expression starting with `2` first, so that we get `2 * 3`
    /// as the right-hand-side to the `1 +` node. This works by calling into [`Self::parse_expr`]
    /// again, but with `rhs` (`2` in this case) as the `lhs` argument.
    ///
    /// If it does not (such as in the expression `3 * 2 + 1`), we build the AST node `3 * 2`
    /// first. Then, [`Self::parse_expr`] will pick up the `+ 1` part of the expression, and
    /// build the AST node `3 * 2 + 1`.
    ///
    /// Implicit multiplication is also handled here. In an expression such as `1 + 2x`, there is
    /// no operator after `2`, but a primary expression follows it, so we assume an implicit
    /// multiplication operator. Since we're creating multiplication out of thin air, we must stop
    /// once [`Self::parse_expr`] returns its input unchanged, otherwise we would loop forever.
    fn complete_rhs(
        input: &mut Parser,
        lhs: Expr,
        op: BinOpExt,
        mut rhs: Expr,
    ) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, we should check the precedence of the
            // following operator, if any
            if let Some(next_op) = input.peek::<BinOp>() {
                if next_op.precedence() > precedence || next_op.associativity() == Associativity::Right {
                    // this operator has a higher precedence or it is right associative, so we
                    // should parse its expression starting with `rhs` first
                    rhs = input.nested(|input| Self::parse_expr(input, rhs, next_op.precedence()))?.0;
                } else {
                    // lower precedence, or equal precedence and left-associativity, as in
                    // `1 * 2 + 3` or `1 * 2 * 3`
                    //
                    // let `lhs` become `1 * 2`; the outer loop picks up this operator
                    break;
                }
            } else if precedence < Precedence::Factor && implicit_mul_follows(input) {
                let (expr, changed) = Self::parse_expr(input, rhs, Precedence::Factor)?;

                // `rhs = expr;` must happen in all cases, even if `changed` is false, otherwise it
                // would've been moved into `Self::parse_expr` above
                rhs = expr;

                if !changed {
                    break;
                }
            } else {
                break;
            }
        }

        // create the binary node representing `lhs op rhs`
        let (start_span, end_span) = (lhs.span().start, rhs.span().end);
        let op = match op {
            BinOpExt::Op(op) => op,
            BinOpExt::ImplicitMultiplication => BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: lhs.span().end..rhs.span().start,
            },
        };

        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span: start_span..end_span,
        }))
    }

    /// After parsing the left-hand-side of a potential binary expression, parse ahead to see if
    /// there is a binary operator of at least the given precedence and a right-hand-side.
    ///
    /// Returns the resulting expression, and whether anything was parsed after `lhs`.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<(Expr, bool), Error> {
        let mut changed = false;
        loop {
            if let Some(op) = input.peek::<BinOp>() {
                if op.precedence() < precedence {
                    break;
                }

                // the operator was just peeked
                input.try_parse::<BinOp>()?;

                // an operator must be followed by its right-hand side
                let rhs = Unary::parse_or_lower(input).map_err(Error::into_fatal)?;
                lhs = Self::complete_rhs(input, lhs, op.into(), rhs)?;
            } else if Precedence::Factor >= precedence && implicit_mul_follows(input) {
                let rhs = input.try_parse::<Primary>()?;
                lhs = Self::complete_rhs(input, lhs, BinOpExt::ImplicitMultiplication, rhs.into())?;
            } else {
                break;
            }

            changed = true;
        }

        Ok((lhs, changed))
    }
}
