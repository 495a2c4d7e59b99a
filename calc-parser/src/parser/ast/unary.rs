use crate::parser::{
    ast::{binary::Binary, expr::{Expr, Primary}},
    error::Error,
    token::op::UnaryOp,
    Parser,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a right-associative unary expression, such as `-x` or `--x`.
    ///
    /// The operand extends over every operator that binds tighter than the unary operator, so
    /// `-x^2` is parsed as `-(x^2)`.
    pub fn parse_right(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;

        // after the operator, there must be an operand
        let operand = input.nested(|input| {
            let operand = Self::parse_or_lower(input).map_err(Error::into_fatal)?;
            Ok(Binary::parse_expr(input, operand, op.precedence())?.0)
        })?;

        Ok(Self {
            span: op.span.start..operand.span().end,
            operand: Box::new(operand),
            op,
        })
    }

    /// Parses a unary expression, or below if there is no unary operator.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        match input.try_parse_with_fn(Self::parse_right) {
            Ok(unary) => return Ok(Expr::Unary(unary)),
            Err(err) if err.fatal => return Err(err),
            Err(_) => {},
        }

        input.try_parse::<Primary>().map(Expr::from)
    }
}
