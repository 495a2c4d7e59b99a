use crate::numerical::{ctxt::Env, error::Error, eval::Eval};
use crate::symbolic::expr::Expr;
use super::call::eval_call;

impl Eval for Expr {
    fn eval_in(&self, env: &Env) -> Result<f64, Error> {
        match self {
            Expr::Primary(primary) => primary.eval_in(env),
            Expr::Add(terms) => terms.iter()
                .try_fold(0.0, |sum, term| Ok(sum + term.eval_in(env)?)),
            Expr::Mul(factors) => factors.iter()
                .try_fold(1.0, |product, factor| Ok(product * factor.eval_in(env)?)),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval_in(env)? - rhs.eval_in(env)?),
            Expr::Div(lhs, rhs) => Ok(lhs.eval_in(env)? / rhs.eval_in(env)?),
            Expr::Pow(base, exp) => Ok(base.eval_in(env)?.powf(exp.eval_in(env)?)),
            Expr::Neg(operand) => Ok(-operand.eval_in(env)?),
            Expr::Call(func, arg) => eval_call(*func, arg, env),
        }
    }
}
