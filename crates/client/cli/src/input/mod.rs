//! Line-based decision source reading menu picks from a terminal.
use std::io::{BufRead, Write};

use battle_core::{ChoiceKind, DecisionError, DecisionSource};

/// Prints numbered options and reads a zero-based index per line.
///
/// Anything that is not an in-range index is answered with
/// `invalid input.` and asked again. End of input closes the source.
pub struct ConsoleDecisions<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDecisions<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, kind: ChoiceKind, options: &[String]) -> std::io::Result<()> {
        writeln!(self.output, "choose {kind}:")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  {index}: {option}")?;
        }
        write!(self.output, "> ")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> Result<String, DecisionError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| DecisionError::Io(e.to_string()))?;
        if read == 0 {
            return Err(DecisionError::Closed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> DecisionSource for ConsoleDecisions<R, W> {
    fn choose(&mut self, kind: ChoiceKind, options: &[String]) -> Result<usize, DecisionError> {
        self.prompt(kind, options)
            .map_err(|e| DecisionError::Io(e.to_string()))?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(index) if index < options.len() => {
                    tracing::debug!(%kind, index, choice = %options[index], "choice read");
                    return Ok(index);
                }
                _ => {
                    writeln!(self.output, "invalid input.")
                        .map_err(|e| DecisionError::Io(e.to_string()))?;
                }
            }
        }
    }
}
