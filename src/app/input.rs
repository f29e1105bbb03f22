use crate::utils::error::{CatalogError, Result};
use crate::utils::text::{remove_quotes, trim};
use std::io::{BufRead, Write};

/// Line-oriented prompts over any reader/writer pair, so the menu can be
/// driven by a terminal or by a script in tests.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Next input line without its terminator. End of input is reported as
    /// `InputClosed`.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(CatalogError::InputClosed);
        }
        let line = buf.trim_end_matches('\n').trim_end_matches('\r');
        Ok(line.to_string())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Prompts until a line starting with an integer is entered. Anything
    /// after the integer is discarded; blank lines are skipped silently.
    pub fn prompt_number(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let mut line = self.ask(prompt)?;
            // keep waiting on blank lines, like a stream extraction would
            while line.trim().is_empty() {
                line = self.read_line()?;
            }
            match parse_leading_int(&line) {
                Some(value) => return Ok(value),
                None => {
                    tracing::debug!("non-numeric input: {:?}", line);
                    writeln!(self.writer, "Error: {}", CatalogError::NonNumericInput)?;
                }
            }
        }
    }

    pub fn prompt_text(&mut self, prompt: &str) -> Result<String> {
        let line = self.ask(prompt)?;
        Ok(trim(&line).to_string())
    }

    /// Reads a path, allowing spaces and one layer of surrounding quotes.
    pub fn prompt_filename(&mut self) -> Result<String> {
        let line = self.ask("Enter the filename: ")?;
        Ok(remove_quotes(trim(&line)).to_string())
    }

    /// The raw line must be non-empty; the returned number is trimmed.
    pub fn prompt_course_number(&mut self) -> Result<String> {
        let line = self.ask("Enter the course number: ")?;
        if line.is_empty() {
            return Err(CatalogError::EmptyCourseNumber);
        }
        Ok(trim(&line).to_string())
    }
}

/// Parses an optionally signed integer at the start of `input`, ignoring
/// leading whitespace and whatever follows the digits.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let sign_len = usize::from(rest.starts_with(['+', '-']));
    let digits = rest[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    rest[..sign_len + digits].parse().ok()
}
