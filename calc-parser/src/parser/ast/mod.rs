//! Syntax tree nodes produced by the [`Parser`](super::Parser).
//!
//! Every node remembers the region of the source it was parsed from, so that later stages can
//! point error reports at the exact part of the input that caused them.

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::{Expr, Primary};
pub use literal::{LitFloat, LitInt, LitSym, Literal};
pub use paren::Paren;
pub use unary::Unary;
