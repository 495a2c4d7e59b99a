pub mod kind;

use ariadne::Report;
use calc_error::ErrorKind;
use std::ops::Range;

/// A general parsing error.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// Whether the error is fatal. A fatal error stops backtracking parsers from trying other
    /// alternatives, and is returned to the caller immediately.
    pub fatal: bool,
}

impl Error {
    /// Creates a new non-fatal error with the given span and kind.
    pub fn new(span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans: vec![span], kind: Box::new(kind), fatal: false }
    }

    /// Creates a new fatal error with the given span and kind.
    pub fn new_fatal(span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans: vec![span], kind: Box::new(kind), fatal: true }
    }

    /// Marks this error as fatal. Used once a parser has consumed enough input that no other
    /// parser could make sense of it.
    pub fn into_fatal(self) -> Self {
        Self { fatal: true, ..self }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Parsing errors are reported to consumers of the library as generic [`calc_error::Error`]s; the
/// `fatal` flag only matters while parsing.
impl From<Error> for calc_error::Error {
    fn from(err: Error) -> Self {
        Self { spans: err.spans, kind: err.kind }
    }
}
