use crate::numerical::{ctxt::Env, error::{kind::UndefinedVariable, Error}, eval::Eval};
use crate::symbolic::expr::Primary;

impl Eval for Primary {
    fn eval_in(&self, env: &Env) -> Result<f64, Error> {
        match self {
            // integers too large for `f64` become infinite
            Primary::Integer(n) => Ok(n.to_f64()),
            Primary::Float(n) => Ok(*n),
            Primary::Symbol(name) => env.get_var(name).ok_or_else(|| {
                Error::new(Vec::new(), UndefinedVariable {
                    name: name.clone(),
                    suggestions: env.ctxt()
                        .get_similar_vars(name)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                })
            }),
        }
    }
}
