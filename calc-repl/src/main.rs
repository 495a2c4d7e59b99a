mod error;
mod session;

use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Executes the given line in the session, printing the output or reporting the error.
fn execute_line(session: &mut Session, line: &str) {
    match session.execute(line) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (), // intentionally print nothing
        Err(err) => err.report_to_stderr(),
    }
}

/// Executes every line of the given input in a fresh session.
fn execute(input: &str) {
    let mut session = Session::default();
    for line in input.lines() {
        execute_line(&mut session, line);
    }
}

/// Runs the interactive mode, until the user exits with Ctrl-C or Ctrl-D.
fn run_interactive() -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::default();

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        execute_line(&mut session, &input);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        match fs::read_to_string(&filename) {
            Ok(input) => execute(&input),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                return ExitCode::FAILURE;
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }
        execute(&input);
    } else if let Err(err) = run_interactive() {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
