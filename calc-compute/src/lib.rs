//! The expression engine of the calculator: an owned expression tree, numerical evaluation, and
//! rule-based simplification.
//!
//! The usual flow is to [`parse`] some text into an [`Expr`], then [`evaluate`] it at a point, or
//! [`simplify`] it into a simpler, equivalent expression.
//!
//! ```
//! use calc_compute::{parse, simplify};
//!
//! let expr = parse("x + x + 2 + 3").unwrap();
//! let simplified = simplify(expr);
//! assert_eq!(simplified.to_string(), "2 * x + 5");
//! ```
//!
//! # Features
//!
//! - `numerical` (default): numerical evaluation of expressions.
//! - `serde`: derives [`Serialize`] and [`Deserialize`] for the expression tree and the
//!   evaluation context.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

#[cfg(feature = "numerical")]
pub mod numerical;
pub mod primitive;
pub mod symbolic;

use calc_error::Error;
use calc_parser::parser::{ast::Expr as AstExpr, Parser};

#[cfg(feature = "numerical")]
pub use numerical::{Ctxt, TrigMode};
pub use symbolic::{simplify, simplify_with_steps, Expr};

/// Parses the given text into an [`Expr`].
///
/// Fails with the first syntax error found (with the span of the offending input), or with a
/// conversion error such as an unknown function name. No partial tree is ever returned.
pub fn parse(text: &str) -> Result<Expr, Error> {
    let ast = Parser::new(text)?.try_parse_full::<AstExpr>()?;
    Expr::try_from(ast)
}

/// Evaluates the expression with the context's abscissa symbol (`x` by default) bound to `x`.
///
/// NaN and infinite results are values, not errors. Fails with
/// [`UndefinedVariable`](numerical::error::kind::UndefinedVariable) if the expression contains a
/// symbol that is not bound.
///
/// ```
/// use calc_compute::{evaluate, parse, Ctxt};
///
/// let expr = parse("x + x + 2 + 3").unwrap();
/// assert_eq!(evaluate(&expr, 1.5, &Ctxt::default()).unwrap(), 8.0);
/// ```
#[cfg(feature = "numerical")]
pub fn evaluate(expr: &Expr, x: f64, ctxt: &Ctxt) -> Result<f64, Error> {
    numerical::evaluate_at(expr, x, ctxt)
}
