use crate::numerical::{ctxt::Env, error::Error, eval::Eval};
use crate::symbolic::expr::{Expr, Func};

/// Evaluates a call to a builtin function, converting angles according to the trigonometric mode
/// of the context.
pub(crate) fn eval_call(func: Func, arg: &Expr, env: &Env) -> Result<f64, Error> {
    let trig_mode = env.ctxt().trig_mode;
    let mut value = arg.eval_in(env)?;

    if func.takes_angle() {
        value = trig_mode.to_radians(value);
    }

    let result = func.apply(value);
    if func.returns_angle() {
        Ok(trig_mode.from_radians(result))
    } else {
        Ok(result)
    }
}
