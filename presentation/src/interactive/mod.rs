//! Interactive prompts for the question and the output format.
//!
//! Prompts are written to stderr so stdout carries only the result.

use std::io::{self, BufRead, Write};
use tutor_domain::OutputFormat;

pub const QUESTION_PROMPT: &str = "Enter your math question: ";
pub const FORMAT_PROMPT: &str = "Do you want the response in JSON format? (yes/no): ";

/// `yes` / `y` (trimmed, case-insensitive) select JSON; anything else is text.
pub fn parse_format_choice(answer: &str) -> OutputFormat {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

/// Line-based prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter reading stdin and prompting on stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for the question. Only the line terminator is removed.
    pub fn ask_question(&mut self) -> io::Result<String> {
        self.ask(QUESTION_PROMPT)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no question given on input")
        })
    }

    /// Ask whether to print JSON. End of input counts as "no".
    pub fn ask_format(&mut self) -> io::Result<OutputFormat> {
        Ok(self
            .ask(FORMAT_PROMPT)?
            .map(|answer| parse_format_choice(&answer))
            .unwrap_or_default())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
