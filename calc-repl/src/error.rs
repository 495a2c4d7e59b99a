use ariadne::{Fmt, Source};
use calc_attrs::ErrorKind;
use calc_error::{ErrorKind, EXPR};
use std::ops::Range;

/// An error, packaged with the input line its spans point into.
#[derive(Debug)]
pub struct Error {
    /// The input line that caused the error.
    input: String,

    /// The error itself.
    inner: calc_error::Error,
}

impl Error {
    /// Creates a new error for the given input line.
    pub fn new(input: &str, inner: calc_error::Error) -> Self {
        Self { input: input.to_string(), inner }
    }

    /// Creates a new error for the given input line, from an error whose spans point into the
    /// part of the line starting at `offset`.
    pub fn with_offset(input: &str, mut inner: calc_error::Error, offset: usize) -> Self {
        for span in &mut inner.spans {
            *span = span.start + offset..span.end + offset;
        }
        Self::new(input, inner)
    }

    /// Creates a new error with a single span and the given kind.
    pub fn from_kind(input: &str, span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self::new(input, calc_error::Error::new(vec![span], kind))
    }

    /// Returns the underlying error.
    pub fn inner(&self) -> &calc_error::Error {
        &self.inner
    }

    /// Report the error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self) {
        let report = self.inner().build_report("input");
        if let Err(err) = report.eprint(("input", Source::from(self.input.as_str()))) {
            eprintln!("failed to print error report: {}", err);
        }
    }
}

/// The command does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", self.name),
    labels = ["this command"],
    help = format!(
        "available commands: {}, {}, {}, {}",
        ":mode".fg(EXPR),
        ":steps".fg(EXPR),
        ":funcs".fg(EXPR),
        ":vars".fg(EXPR),
    ),
)]
pub struct UnknownCommand {
    /// The name of the command, without the leading `:`.
    pub name: String,
}

/// The trigonometric mode does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown trigonometric mode `{}`", self.mode),
    labels = ["this mode"],
    help = format!("the mode must be {} or {}", "degrees".fg(EXPR), "radians".fg(EXPR)),
)]
pub struct UnknownTrigMode {
    /// The requested mode.
    pub mode: String,
}

/// A command was given without its argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `:{}` command requires an argument", self.name),
    labels = ["this command"],
    help = format!("type: {}", self.usage.fg(EXPR)),
)]
pub struct MissingCommandArgument {
    /// The name of the command.
    pub name: &'static str,

    /// Example usage of the command.
    pub usage: &'static str,
}

/// The left-hand side of an assignment is not a valid variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid variable name", self.name),
    labels = ["this name"],
    help = "variable names start with a letter, and contain only letters, digits and underscores",
)]
pub struct InvalidVariableName {
    /// The name that was given.
    pub name: String,
}
