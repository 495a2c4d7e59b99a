use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::{ErrorKind, EXPR};

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = if self.suggestions.is_empty() {
        format!("to define it, type: {} = {}", (&self.name).fg(EXPR), "<expression>".fg(EXPR))
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` variable?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these variables? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// A list of similarly named variables bound in the context, if any.
    pub suggestions: Vec<String>,
}
