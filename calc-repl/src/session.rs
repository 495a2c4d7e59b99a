use calc_compute::{
    numerical::{self, error::kind::UndefinedVariable, Ctxt, TrigMode},
    parse,
    primitive::fmt_float,
    simplify,
    simplify_with_steps,
    symbolic::expr::{Func, Primary},
    Expr,
};
use crate::error::{
    Error,
    InvalidVariableName,
    MissingCommandArgument,
    UnknownCommand,
    UnknownTrigMode,
};
use tracing::debug;

/// The state of a REPL session: the binding context that assignments and `:mode` modify.
#[derive(Debug, Default)]
pub struct Session {
    ctxt: Ctxt,
}

/// Returns true if the given name can be bound as a variable. The accepted names are exactly
/// those the lexer reads as a single name token.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns the byte offset of `part` in `whole`. `part` must be a subslice of `whole`.
fn offset_of(whole: &str, part: &str) -> usize {
    part.as_ptr() as usize - whole.as_ptr() as usize
}

impl Session {
    /// Executes a single line of input, returning the text to print, if any.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if let Some(command) = line.strip_prefix(':') {
            self.command(line, command)
        } else if let Some((name, value)) = line.split_once('=') {
            self.assign(line, name, value)
        } else {
            self.show(line).map(Some)
        }
    }

    /// Parses the part of the line that contains an expression, adjusting the spans of any error
    /// to point into the whole line.
    fn parse_part(line: &str, part: &str) -> Result<Expr, Error> {
        parse(part).map_err(|err| Error::with_offset(line, err, offset_of(line, part)))
    }

    /// Runs a `:command`.
    fn command(&mut self, line: &str, command: &str) -> Result<Option<String>, Error> {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        let name_span = offset_of(line, name)..offset_of(line, name) + name.len();

        match name {
            "mode" if arg.is_empty() => Ok(Some(format!("trigonometric mode: {}", self.ctxt.trig_mode))),
            "mode" => {
                let trig_mode = arg.parse::<TrigMode>().map_err(|_| {
                    let start = offset_of(line, arg);
                    Error::from_kind(line, start..start + arg.len(), UnknownTrigMode {
                        mode: arg.to_string(),
                    })
                })?;
                self.ctxt.trig_mode = trig_mode;
                debug!(%trig_mode, "set trigonometric mode");
                Ok(Some(format!("trigonometric mode: {}", trig_mode)))
            },
            "steps" if arg.is_empty() => Err(Error::from_kind(line, name_span, MissingCommandArgument {
                name: "steps",
                usage: ":steps <expression>",
            })),
            "steps" => {
                let expr = Self::parse_part(line, arg)?;
                let (simplified, steps) = simplify_with_steps(expr);
                let mut output = steps.iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}\n", i + 1, step))
                    .collect::<String>();
                output.push_str(&format!("=> {}", simplified));
                Ok(Some(output))
            },
            "funcs" => Ok(Some(
                Func::ALL.iter().map(|func| func.name()).collect::<Vec<_>>().join(" "),
            )),
            "vars" => {
                let mut vars = self.ctxt.get_vars().iter().collect::<Vec<_>>();
                vars.sort_unstable_by(|a, b| a.0.cmp(b.0));
                Ok(Some(
                    vars.into_iter()
                        .map(|(name, value)| format!("{} = {}", name, fmt_float(*value)))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ))
            },
            _ => Err(Error::from_kind(line, name_span, UnknownCommand { name: name.to_string() })),
        }
    }

    /// Binds `name` to the value of the expression.
    fn assign(&mut self, line: &str, name: &str, value: &str) -> Result<Option<String>, Error> {
        let trimmed = name.trim();
        if !is_valid_name(trimmed) {
            let start = offset_of(line, name);
            return Err(Error::from_kind(line, start..start + name.len(), InvalidVariableName {
                name: trimmed.to_string(),
            }));
        }

        let expr = Self::parse_part(line, value)?;
        let value = numerical::evaluate(&expr, &self.ctxt).map_err(|err| Error::new(line, err))?;
        self.ctxt.add_var(trimmed, value);
        debug!(name = trimmed, value, "bound variable");
        Ok(Some(format!("{} = {}", trimmed, fmt_float(value))))
    }

    /// Prints the simplified form of the expression, and its value if every symbol in it is bound.
    fn show(&self, line: &str) -> Result<String, Error> {
        let expr = Self::parse_part(line, line)?;
        let value = match numerical::evaluate(&expr, &self.ctxt) {
            Ok(value) => Some(value),
            Err(err) if err.is::<UndefinedVariable>() => None,
            Err(err) => return Err(Error::new(line, err)),
        };

        let simplified = simplify(expr);
        Ok(match (value, &simplified) {
            (Some(_), Expr::Primary(Primary::Integer(_))) | (None, _) => simplified.to_string(),
            (Some(value), _) => format!("{} = {}", simplified, fmt_float(value)),
        })
    }
}
