//! Errors that can occur while evaluating an expression.
//!
//! Evaluation reports errors with the same [`Error`] type as the rest of the crate, so they can be
//! rendered with [`Error::build_report`].

pub mod kind;

pub use calc_error::Error;
