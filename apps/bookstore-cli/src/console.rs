//! # Console
//!
//! Line-oriented prompt helper over any reader/writer pair.
//!
//! Stdin/stdout in the binary; `Cursor` / `Vec<u8>` in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use bookstore_core::validation::ValidationResult;
use bookstore_core::CoreError;

use crate::error::{operator_message, CliError, CliResult};

/// Prompt/reply channel to the operator.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `line` followed by a newline.
    pub fn say(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `text` as is.
    pub fn print(&mut self, text: &str) -> CliResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Shows `prompt` and reads one line without its line terminator.
    ///
    /// ## Errors
    /// [`CliError::InputClosed`] once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        self.print(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    /// Asks until `parse` accepts the reply, printing the reason after each
    /// rejection.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> CliResult<T> {
        loop {
            let reply = self.ask(prompt)?;
            match parse(&reply) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(&operator_message(&CoreError::from(err)))?,
            }
        }
    }

    /// Gives back the writer, for inspecting what was shown.
    pub fn into_output(self) -> W {
        self.output
    }
}
