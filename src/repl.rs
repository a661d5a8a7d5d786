//! Shell driver
//!
//! Reads one command per line, runs it against a session and writes the
//! rendered outcome.
//!
//! ## Output Lines
//! ```text
//! insert ok        → Executed.
//! select (empty)   → Empty table.  / Executed.
//! select (rows)    → (id, username, email) ... / N rows printed. / Executed.
//! .exit            → Bye.
//! error            → the error's Display line
//! ```

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::session::Session;
use crate::statement::ExecutionResult;

/// Prompt printed before each read
pub const PROMPT: &str = "db > ";

/// Write the lines for a successful result
pub fn render<W: Write>(result: &ExecutionResult, out: &mut W) -> Result<()> {
    match result {
        ExecutionResult::Inserted => writeln!(out, "Executed.")?,
        ExecutionResult::EmptyTable => {
            writeln!(out, "Empty table.")?;
            writeln!(out, "Executed.")?;
        }
        ExecutionResult::Rows(rows) => {
            for row in rows {
                row.write_to(out)?;
                out.write_all(b"\n")?;
            }
            writeln!(out, "{} rows printed.", rows.len())?;
            writeln!(out, "Executed.")?;
        }
        ExecutionResult::Exit => writeln!(out, "Bye.")?,
    }
    Ok(())
}

/// Line-oriented shell over any reader and writer
pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until `.exit` or end of input, then close the session
    ///
    /// Statement, capacity and I/O errors are printed and the loop continues.
    /// The session is closed however the loop ends, so cached rows are
    /// flushed even if reading input or writing output fails.
    pub fn run(&mut self, mut session: Session) -> Result<()> {
        let outcome = self.drive(&mut session);
        let closed = session.close();

        if let (Err(e), Err(close_err)) = (&outcome, &closed) {
            tracing::error!("Shell failed ({}) and close failed ({})", e, close_err);
        }
        outcome.and(closed)
    }

    fn drive(&mut self, session: &mut Session) -> Result<()> {
        let mut line = Vec::new();

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                tracing::warn!("Input ended without .exit; closing {}", session.name());
                return Ok(());
            }

            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            match session.execute(&line) {
                Ok(ExecutionResult::Exit) => {
                    render(&ExecutionResult::Exit, &mut self.output)?;
                    self.output.flush()?;
                    return Ok(());
                }
                Ok(result) => render(&result, &mut self.output)?,
                Err(e) => {
                    tracing::debug!("Command failed: {:?}", e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Consume the driver and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
