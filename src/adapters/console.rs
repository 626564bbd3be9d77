use crate::domain::ports::Terminal;
use crate::utils::error::{MailerError, Result};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented terminal over any reader/writer pair.
pub struct ConsoleTerminal<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    closed: bool,
}

impl ConsoleTerminal<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(MailerError::TerminalClosed);
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.ensure_open()?;
        self.writer.write_all(question.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(MailerError::InputClosed {
                question: question.to_string(),
            });
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.ensure_open()?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.writer.flush() {
            tracing::warn!("Failed to flush console output on close: {}", e);
        }
        self.closed = true;
    }
}
