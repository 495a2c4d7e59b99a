//! Numerical evaluation of expressions.
//!
//! An [`Expr`](crate::symbolic::Expr) is evaluated to an [`f64`] under a binding context
//! ([`Ctxt`]), which maps symbol names to values and holds the trigonometric mode and the name of
//! the abscissa symbol used when plotting.
//!
//! Numeric anomalies (`1/0`, `0/0`, overflow) are not errors; they are returned as NaN or infinite
//! values. The only way evaluation can fail is with a symbol that has no binding
//! ([`UndefinedVariable`](error::kind::UndefinedVariable)).
//!
//! ```
//! use calc_compute::{numerical::{evaluate_at, Ctxt}, parse};
//!
//! let expr = parse("x^2 + 1").unwrap();
//! assert_eq!(evaluate_at(&expr, 3.0, &Ctxt::default()).unwrap(), 10.0);
//! ```

#![cfg(feature = "numerical")]

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod trig_mode;

pub use ctxt::{Ctxt, Env};
pub use eval::{evaluate, evaluate_at, finite, Eval};
pub use trig_mode::TrigMode;
