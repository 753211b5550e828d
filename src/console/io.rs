use std::io::{self, BufRead, Write};

use crate::error::ConsoleError;

/// Line-oriented text I/O the game loop talks through.
pub trait TextIo {
    /// Show `prompt` and return the answer with surrounding whitespace removed.
    fn read_string(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Show `prompt` until the answer parses as an integer.
    fn read_number(&mut self, prompt: &str) -> Result<i64, ConsoleError>;

    fn writeln(&mut self, text: &str) -> Result<(), ConsoleError>;
}

/// [`TextIo`] over any reader/writer pair; [`Console::stdio`] for the terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        // Raw bytes: a line that is not UTF-8 is a bad answer, not an I/O failure.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TextIo for Console<R, W> {
    fn read_string(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.read_line(prompt)
    }

    fn read_number(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        loop {
            let answer = self.read_line(prompt)?;
            match answer.parse::<i64>() {
                Ok(number) => return Ok(number),
                Err(_) => {
                    tracing::warn!(answer = %answer, "non-numeric answer");
                    self.writeln("Please, enter a number")?;
                }
            }
        }
    }

    fn writeln(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
