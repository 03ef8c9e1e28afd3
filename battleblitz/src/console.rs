//! The interactive boundary between players and the game.
//!
//! Game logic only talks to a [`Console`]. [`TerminalConsole`] implements it over any
//! line-oriented reader and writer, which is stdin and stdout in the binary and in-memory
//! buffers in tests.
use std::io::{self, BufRead, Write};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::board::Coordinate;

/// Error from the console itself, as opposed to invalid input.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    /// Input ended. The game is abandoned without a result.
    #[error("input closed")]
    Closed,
}

/// A request to place the current ship.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlacementInput {
    /// Place at `start` in the given direction. The direction text is not validated yet.
    At { start: Coordinate, direction: String },
    /// Place at any legal position.
    Random,
}

/// Source of player input and sink for game output.
pub trait Console {
    /// Prompt until the player enters a start coordinate and direction, or asks for a
    /// random placement.
    fn read_placement(&mut self, prompt: &str) -> Result<PlacementInput, ConsoleError>;

    /// Prompt until the player enters a pair of coordinates to shoot at. The coordinate is
    /// not checked against the board.
    fn read_target(&mut self, prompt: &str) -> Result<Coordinate, ConsoleError>;

    /// Write a line of output.
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;
}

/// Matcher for `<x> <y> <dir>`, where the coordinates may also be comma separated.
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)\s+
        (?P<dir>\S+)$",
    )
    .expect("placement pattern is valid")
});

/// Matcher for `<x> <y>`, where the coordinates may also be comma separated.
static TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$").expect("target pattern is valid")
});

/// Parse the `x` and `y` groups of a match.
fn coordinate(captures: &Captures) -> Result<Coordinate, String> {
    let x = captures["x"]
        .parse()
        .map_err(|_| format!("x value {} is too large", &captures["x"]))?;
    let y = captures["y"]
        .parse()
        .map_err(|_| format!("y value {} is too large", &captures["y"]))?;
    Ok(Coordinate::new(x, y))
}

/// [`Console`] over a buffered reader and a writer.
pub struct TerminalConsole<R, W> {
    read: R,
    write: W,
    buf: String,
}

impl<R, W> TerminalConsole<R, W> {
    pub fn new(read: R, write: W) -> Self {
        Self {
            read,
            write,
            buf: String::new(),
        }
    }

    /// Extract the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.read, self.write)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Repeatedly tries to read input until the checker returns `Ok`. Error messages from
    /// the checker are shown to the player before prompting again.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> Result<T, ConsoleError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            self.read_input_inner(prompt)?;
            match checker(self.buf.trim()) {
                Ok(val) => return Ok(val),
                Err(msg) => writeln!(self.write, "{}", msg)?,
            }
        }
    }

    /// Print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> Result<(), ConsoleError> {
        write!(self.write, "{} ", prompt)?;
        self.write.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.write)?;
            return Err(ConsoleError::Closed);
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_placement(&mut self, prompt: &str) -> Result<PlacementInput, ConsoleError> {
        self.read_input(prompt, |input| {
            if let Some(captures) = PLACE.captures(input) {
                Ok(PlacementInput::At {
                    start: coordinate(&captures)?,
                    direction: captures["dir"].to_owned(),
                })
            } else {
                match input.to_ascii_lowercase().as_str() {
                    "random" | "rand" => Ok(PlacementInput::Random),
                    _ => Err(format!(
                        "Invalid placement \"{}\". Enter \"x y H\" or \"x y V\" on one line, or \"random\".",
                        input
                    )),
                }
            }
        })
    }

    fn read_target(&mut self, prompt: &str) -> Result<Coordinate, ConsoleError> {
        self.read_input(prompt, |input| match TARGET.captures(input) {
            Some(captures) => coordinate(&captures),
            None => Err(format!("Invalid target \"{}\". Enter \"x y\".", input)),
        })
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.write, "{}", text)?;
        Ok(())
    }
}
