//! Interactive console prompts.
//!
//! Every prompt loops until it receives a valid answer, printing an error
//! line for each rejected one. End of input ends the loop with
//! [`io::ErrorKind::UnexpectedEof`].

use std::io::{self, BufRead, Write};

use shelfwise_core::{Book, Rating, RatingSource};

const INVALID_RATING: &str = "Error: Invalid Rating!";
const INVALID_AMOUNT: &str = "Error: Invalid Amount!";
const INVALID_USER: &str = "Error: Invalid User Name!";

/// Line-oriented prompt over any reader and writer.
///
/// Production code wraps locked stdin/stdout; tests feed scripted input.
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Prompt on `output` and read answers from `input`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for the reader's name.
    ///
    /// # Errors
    /// Returns an I/O error when reading or writing fails, or input ends.
    pub fn ask_user_name(&mut self) -> io::Result<String> {
        loop {
            let answer = self.read_answer("Enter User Name: ")?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "{INVALID_USER}")?;
        }
    }

    /// Ask how many books to recommend, accepting `0..=max`.
    ///
    /// # Errors
    /// Returns an I/O error when reading or writing fails, or input ends.
    pub fn ask_amount(&mut self, max: usize) -> io::Result<usize> {
        loop {
            let answer = self.read_answer("How many books would you like? ")?;
            match answer.parse::<usize>() {
                Ok(amount) if amount <= max => return Ok(amount),
                _ => writeln!(self.output, "{INVALID_AMOUNT}")?,
            }
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before an answer was given",
            ));
        }
        Ok(line.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> RatingSource for ConsolePrompt<R, W> {
    fn request_rating(&mut self, _position: usize, book: &Book) -> io::Result<Rating> {
        let prompt = format!("Enter rating for {} ", book.title());
        loop {
            let answer = self.read_answer(&prompt)?;
            let rating = answer
                .parse::<i64>()
                .ok()
                .and_then(|value| Rating::elicited(value).ok());
            if let Some(valid) = rating {
                return Ok(valid);
            }
            writeln!(self.output, "{INVALID_RATING}")?;
        }
    }
}
