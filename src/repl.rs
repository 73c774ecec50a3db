use std::io::{self, BufRead, Write};

use crate::{interpreter::scope::Scope, run_source};

/// Printed before every line read in interactive mode.
pub const PROMPT: &str = ">>> ";

/// The input line that ends the session. Only the bare word counts; an
/// indented `exit` is evaluated like any other line.
pub const EXIT_COMMAND: &str = "exit";

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Every line is evaluated against one global [`Scope`] that lives for the
/// whole session. The value of each line is written to `output`; errors are
/// written to `errors` and the loop continues with the next line. Blank lines
/// are ignored.
///
/// # Errors
/// Only I/O failures on the given streams end the loop with an error.
///
/// # Example
/// ```
/// use ember::repl::run_repl;
///
/// let input = "let x = 10;\nx + 1\nexit\nx\n";
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
///
/// run_repl(input.as_bytes(), &mut output, &mut errors, false).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "10\n11\n");
/// assert!(errors.is_empty());
/// ```
pub fn run_repl<R, W, E>(mut input: R, mut output: W, mut errors: E, prompt: bool) -> io::Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut scope = Scope::global();
    let mut line = String::new();

    loop {
        if prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source == EXIT_COMMAND {
            break;
        }
        if source.trim().is_empty() {
            continue;
        }

        match run_source(source, &mut scope) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(e) => {
                tracing::debug!(error = ?e, "line failed");
                writeln!(errors, "{e}")?;
            },
        }
    }

    Ok(())
}
