//! Conversion from the span-carrying syntax tree into an [`Expr`].

use calc_error::Error;
use calc_parser::parser::{
    ast::{call::Call, expr::Expr as AstExpr, literal::Literal},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::primitive::{float_from_str, int_from_str};
use super::{error::{InvalidNumber, UnknownFunction, WrongArgumentCount}, Expr, Func, Primary};

/// Converts every operand of an unparenthesized chain of the same operator, in order.
///
/// `a + b + c` is parsed as `(a + b) + c`; the chain is read back as `[a, b, c]`. Parenthesized
/// operands end the chain, so `(a + b) + c` is read as `[(a + b), c]`.
fn collect_chain(expr: AstExpr, kind: BinOpKind, operands: &mut Vec<Expr>) -> Result<(), Error> {
    match expr {
        AstExpr::Binary(binary) if binary.op.kind == kind => {
            collect_chain(*binary.lhs, kind, operands)?;
            collect_chain(*binary.rhs, kind, operands)
        },
        expr => {
            operands.push(Expr::try_from(expr)?);
            Ok(())
        },
    }
}

/// Resolves a call against the builtin functions.
fn convert_call(call: Call) -> Result<Expr, Error> {
    let Ok(func) = call.name.name.parse::<Func>() else {
        return Err(Error::new(vec![call.name.span.clone()], UnknownFunction {
            suggestions: Func::similar_to(&call.name.name),
            name: call.name.name,
        }));
    };

    let outer_span = call.outer_span();
    let given = call.args.len();
    match <[AstExpr; 1]>::try_from(call.args) {
        Ok([arg]) => Ok(Expr::Call(func, Box::new(Expr::try_from(arg)?))),
        Err(_) => Err(Error::new(outer_span.to_vec(), WrongArgumentCount {
            name: call.name.name,
            expected: func.arity(),
            given,
        })),
    }
}

impl TryFrom<AstExpr> for Expr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(Literal::Integer(int)) => int_from_str(&int.value)
                .map(|n| Expr::Primary(Primary::Integer(n)))
                .map_err(|_| Error::new(vec![int.span], InvalidNumber { literal: int.value })),
            AstExpr::Literal(Literal::Float(float)) => match float_from_str(&float.value) {
                // literals too large for `f64` round to infinity, which has no literal form
                Ok(n) if n.is_finite() => Ok(Expr::Primary(Primary::Float(n))),
                _ => Err(Error::new(vec![float.span], InvalidNumber { literal: float.value })),
            },
            AstExpr::Literal(Literal::Symbol(sym)) => Ok(Expr::Primary(Primary::Symbol(sym.name))),
            AstExpr::Paren(paren) => Expr::try_from(paren.into_innermost()),
            AstExpr::Call(call) => convert_call(call),
            AstExpr::Unary(unary) => match unary.op.kind {
                // `-3` folds into the literal `-3`
                UnaryOpKind::Neg => Ok(-Expr::try_from(*unary.operand)?),
            },
            AstExpr::Binary(binary) => match binary.op.kind {
                kind @ (BinOpKind::Add | BinOpKind::Mul) => {
                    let mut operands = Vec::new();
                    collect_chain(AstExpr::Binary(binary), kind, &mut operands)?;
                    Ok(if kind == BinOpKind::Add {
                        Expr::Add(operands)
                    } else {
                        Expr::Mul(operands)
                    })
                },
                kind => {
                    let lhs = Box::new(Expr::try_from(*binary.lhs)?);
                    let rhs = Box::new(Expr::try_from(*binary.rhs)?);
                    Ok(match kind {
                        BinOpKind::Sub => Expr::Sub(lhs, rhs),
                        BinOpKind::Div => Expr::Div(lhs, rhs),
                        _ => Expr::Pow(lhs, rhs),
                    })
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use calc_error::Error;
    use calc_parser::parser::{ast::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn convert(input: &str) -> Result<Expr, Error> {
        let ast = Parser::new(input).unwrap().try_parse_full::<AstExpr>().unwrap();
        Expr::try_from(ast)
    }

    #[test]
    fn unknown_function() {
        let err = convert("2 * son(x)").unwrap_err();
        assert_eq!(err.spans, vec![4..7]);
        assert_eq!(err.downcast_ref::<UnknownFunction>(), Some(&UnknownFunction {
            name: "son".to_string(),
            suggestions: vec!["sin"],
        }));
    }

    #[test]
    fn implicit_call_of_symbol_is_unknown_function() {
        // a name directly followed by parentheses is always a call
        assert!(convert("x(x + 1)").unwrap_err().is::<UnknownFunction>());
    }

    #[test]
    fn wrong_argument_count() {
        let err = convert("sin(x, y)").unwrap_err();
        assert_eq!(err.spans, vec![0..4, 8..9]);
        assert_eq!(err.downcast_ref::<WrongArgumentCount>(), Some(&WrongArgumentCount {
            name: "sin".to_string(),
            expected: 1,
            given: 2,
        }));
        assert!(convert("cos()").unwrap_err().is::<WrongArgumentCount>());
    }

    #[test]
    fn big_integers() {
        let expr = convert("123456789012345678901234567890").unwrap();
        assert_eq!(expr.as_integer().map(|n| n.to_string()), Some("123456789012345678901234567890".to_string()));
    }

    #[test]
    fn float_out_of_range() {
        let literal = format!("{}.0", "1".repeat(400));
        let err = convert(&format!("x + {}", literal)).unwrap_err();
        assert_eq!(err.spans, vec![4..4 + literal.len()]);
        assert_eq!(err.downcast_ref::<InvalidNumber>(), Some(&InvalidNumber { literal }));
    }

    #[test]
    fn large_finite_float() {
        let expr = convert(&format!("{}.5", "9".repeat(300))).unwrap();
        assert!(matches!(expr, Expr::Primary(Primary::Float(n)) if n.is_finite()));
    }
}
