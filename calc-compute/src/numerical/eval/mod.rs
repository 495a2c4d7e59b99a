mod call;
mod expr;
mod primary;

use super::{ctxt::{Ctxt, Env}, error::Error};
use crate::symbolic::expr::Expr;
use tracing::trace;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given environment.
    fn eval_in(&self, env: &Env) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.eval_in(&Env::new(ctxt))
    }

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

/// Evaluates the expression using the variables bound in the context.
///
/// NaN and infinite results are values, not errors. Fails with
/// [`UndefinedVariable`](super::error::kind::UndefinedVariable) if the expression contains a
/// symbol that is not bound.
pub fn evaluate(expr: &Expr, ctxt: &Ctxt) -> Result<f64, Error> {
    expr.eval(ctxt)
}

/// Evaluates the expression with the context's abscissa symbol bound to `x`, shadowing any
/// binding of the same name in the context.
pub fn evaluate_at(expr: &Expr, x: f64, ctxt: &Ctxt) -> Result<f64, Error> {
    let value = expr.eval_in(&Env::at(ctxt, x));
    if let Ok(value) = value {
        trace!(%expr, x, value, "evaluated expression");
    }
    value
}

/// Returns the value if it is finite, or [`None`] if it is NaN or infinite.
///
/// Useful for callers that sample an expression at many points and must skip anomalous samples.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::numerical::{error::kind::UndefinedVariable, trig_mode::TrigMode};
    use crate::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval_str(input: &str) -> Result<f64, Error> {
        parse(input).unwrap().eval_default()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval_str("1 + 2").unwrap(), 3.0);
        assert_eq!(eval_str("1 + 2 * 3").unwrap(), 7.0);
        assert_eq!(eval_str("((1 + 9) / 5) * 3").unwrap(), 6.0);
        assert_eq!(eval_str("3 * -5 / 2 + 6").unwrap(), -1.5);
        assert_eq!(eval_str("10 - 4 - 3").unwrap(), 3.0);
    }

    #[test]
    fn power() {
        assert_eq!(eval_str("2^3^2").unwrap(), 512.0);
        assert_eq!(eval_str("-2^2").unwrap(), -4.0);
        assert_eq!(eval_str("2^-1").unwrap(), 0.5);
    }

    #[test]
    fn constants_and_functions() {
        assert_float_relative_eq!(eval_str("90 * 2 * pi / 360").unwrap(), std::f64::consts::FRAC_PI_2);
        assert_float_relative_eq!(eval_str("sqrt(2) * sqrt(2)").unwrap(), 2.0);
        assert_float_relative_eq!(eval_str("ln(e^3)").unwrap(), 3.0);
        assert_float_relative_eq!(eval_str("log(1000)").unwrap(), 3.0);
        assert_eq!(eval_str("floor(2.7) + ceil(0.2) + abs(-1)").unwrap(), 4.0);
    }

    #[test]
    fn anomalies_are_values() {
        let ctxt = Ctxt::default();
        assert_eq!(evaluate_at(&parse("1/0").unwrap(), 0.0, &ctxt).unwrap(), f64::INFINITY);
        assert!(evaluate_at(&parse("0/0").unwrap(), 0.0, &ctxt).unwrap().is_nan());
        assert!(eval_str("(-8)^(1/3)").unwrap().is_nan());
        assert!(eval_str("10^400").unwrap().is_infinite());
        assert!(eval_str("sqrt(-1)").unwrap().is_nan());
    }

    #[test]
    fn undefined_variable() {
        let err = evaluate_at(&parse("y").unwrap(), 0.0, &Ctxt::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>(), Some(&UndefinedVariable {
            name: "y".to_string(),
            suggestions: vec![],
        }));

        let err = eval_str("2 * tua").unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>(), Some(&UndefinedVariable {
            name: "tua".to_string(),
            suggestions: vec![],
        }));

        let err = eval_str("pj").unwrap_err();
        let suggestions = err.downcast_ref::<UndefinedVariable>().map(|kind| kind.suggestions.clone());
        assert_eq!(suggestions, Some(vec!["pi".to_string()]));
    }

    #[test]
    fn abscissa() {
        let expr = parse("x^2 + 1").unwrap();
        let mut ctxt = Ctxt::default();
        assert!(evaluate(&expr, &ctxt).unwrap_err().is::<UndefinedVariable>());
        assert_eq!(evaluate_at(&expr, 3.0, &ctxt).unwrap(), 10.0);

        // the evaluation point shadows the binding
        ctxt.add_var("x", 100.0);
        assert_eq!(evaluate(&expr, &ctxt).unwrap(), 10001.0);
        assert_eq!(evaluate_at(&expr, 2.0, &ctxt).unwrap(), 5.0);

        let ctxt = ctxt.with_abscissa("t");
        assert_eq!(evaluate_at(&parse("t * x").unwrap(), 2.0, &ctxt).unwrap(), 200.0);
    }

    #[test]
    fn trig_modes() {
        let radians = Ctxt::default();
        let degrees = Ctxt::default().with_trig_mode(TrigMode::Degrees);

        assert_float_relative_eq!(evaluate(&parse("sin(pi / 2)").unwrap(), &radians).unwrap(), 1.0);
        assert_float_relative_eq!(evaluate(&parse("sin(90)").unwrap(), &degrees).unwrap(), 1.0);
        assert_float_relative_eq!(evaluate(&parse("cos(60)").unwrap(), &degrees).unwrap(), 0.5);
        assert_float_relative_eq!(evaluate(&parse("atan(1)").unwrap(), &degrees).unwrap(), 45.0);
        assert_float_relative_eq!(evaluate(&parse("acos(0)").unwrap(), &radians).unwrap(), std::f64::consts::FRAC_PI_2);

        // hyperbolic functions do not take angles
        assert_float_relative_eq!(
            evaluate(&parse("sinh(1)").unwrap(), &degrees).unwrap(),
            evaluate(&parse("sinh(1)").unwrap(), &radians).unwrap()
        );
    }

    #[test]
    fn big_integers() {
        assert_float_relative_eq!(eval_str("123456789012345678901234567890").unwrap(), 1.2345678901234568e29);
        assert!(eval_str(&"1".repeat(400)).unwrap().is_infinite());
    }

    #[test]
    fn finite_samples() {
        let ctxt = Ctxt::default();
        let expr = parse("1 / x").unwrap();
        let samples = [-1.0, 0.0, 2.0]
            .into_iter()
            .filter_map(|x| evaluate_at(&expr, x, &ctxt).ok().and_then(finite))
            .collect::<Vec<_>>();
        assert_eq!(samples, vec![-1.0, 0.5]);
        assert_eq!(finite(f64::NAN), None);
    }
}
