use levenshtein::levenshtein;
use std::collections::HashMap;
use super::trig_mode::TrigMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// The name of the default abscissa symbol.
const DEFAULT_ABSCISSA: &str = "x";

/// A context to use when evaluating an expression, containing the variables that can be used
/// within the expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// The trigonometric mode of the context.
    pub trig_mode: TrigMode,

    /// The name of the symbol that [`evaluate_at`](super::evaluate_at) binds to the evaluation
    /// point.
    pub abscissa: String,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("e".to_string(), std::f64::consts::E),
                ("phi".to_string(), PHI),
                ("pi".to_string(), std::f64::consts::PI),
                ("tau".to_string(), std::f64::consts::TAU),
            ]),
            trig_mode: TrigMode::default(),
            abscissa: DEFAULT_ABSCISSA.to_string(),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// The empty context does not contain any variables, not even the usual constants. Consider
    /// using the [`Default`] implementation instead.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
            ..Default::default()
        }
    }

    /// Sets the trigonometric mode of the context.
    pub fn with_trig_mode(mut self, trig_mode: TrigMode) -> Self {
        self.trig_mode = trig_mode;
        self
    }

    /// Sets the name of the abscissa symbol.
    pub fn with_abscissa(mut self, abscissa: impl Into<String>) -> Self {
        self.abscissa = abscissa.into();
        self
    }

    /// Add a variable to the context, replacing any previous binding with the same name.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted by name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

/// The environment an expression is evaluated in: a [`Ctxt`], and optionally a value for the
/// abscissa symbol that shadows the context's own binding.
#[derive(Debug, Clone, Copy)]
pub struct Env<'a> {
    ctxt: &'a Ctxt,
    point: Option<f64>,
}

impl<'a> Env<'a> {
    /// Creates an environment that resolves symbols from the context alone.
    pub fn new(ctxt: &'a Ctxt) -> Self {
        Self { ctxt, point: None }
    }

    /// Creates an environment that binds the context's abscissa symbol to `x`.
    pub fn at(ctxt: &'a Ctxt, x: f64) -> Self {
        Self { ctxt, point: Some(x) }
    }

    /// Returns the underlying context.
    pub fn ctxt(&self) -> &'a Ctxt {
        self.ctxt
    }

    /// Returns the value bound to the given symbol.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        match self.point {
            Some(x) if name == self.ctxt.abscissa => Some(x),
            _ => self.ctxt.get_var(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_constants() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.get_var("pi"), Some(std::f64::consts::PI));
        assert_eq!(ctxt.get_var("phi"), Some(PHI));
        assert_eq!(ctxt.abscissa, "x");
        assert!(Ctxt::new().get_vars().is_empty());
    }

    #[test]
    fn similar_vars() {
        let mut ctxt = Ctxt::default();
        ctxt.add_var("pie", 3.0);
        assert_eq!(ctxt.get_similar_vars("pj"), vec!["pi"]);
        assert_eq!(ctxt.get_similar_vars("pi"), vec!["phi", "pi", "pie"]);
    }

    #[test]
    fn abscissa_shadows_binding() {
        let mut ctxt = Ctxt::new().with_abscissa("t");
        ctxt.add_var("t", 1.0);
        assert_eq!(Env::new(&ctxt).get_var("t"), Some(1.0));
        assert_eq!(Env::at(&ctxt, 5.0).get_var("t"), Some(5.0));
        assert_eq!(Env::at(&ctxt, 5.0).get_var("x"), None);
    }
}
