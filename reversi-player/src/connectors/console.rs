//! [`Connector`] for playing at a terminal, or over any line-based text stream.

use super::{Announcement, Connector};
use crate::command::Command;
use reversi_board::{Board, Location, LocationList};
use std::io::{self, BufRead, Write};

const HELP: &str = "Enter a square such as d3 to play, r to restart, or q to quit.";

pub struct ConsoleConnector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConnector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt and read one line, failing on end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Connector for ConsoleConnector<R, W> {
    fn show_board(
        &mut self,
        board: &Board,
        legal_moves: LocationList,
        last_move: Option<Location>,
    ) -> io::Result<()> {
        let (black, white) = board.count_stones();
        writeln!(self.output, "\n{}", board.annotated(legal_moves, last_move))?;
        writeln!(self.output, "X: {}  O: {}", black, white)
    }

    fn read_command(&mut self) -> io::Result<Command> {
        loop {
            let line = self.prompt_line("> ")?;
            match line.parse() {
                Ok(command) => return Ok(command),
                Err(e) => writeln!(self.output, "{}. {}", e, HELP)?,
            }
        }
    }

    fn announce(&mut self, announcement: Announcement) -> io::Result<()> {
        let out = &mut self.output;

        match announcement {
            Announcement::GameStart { human, depth } => {
                writeln!(out, "You play {} against a depth {} search.", human, depth)?;
                writeln!(out, "{}", HELP)
            }
            Announcement::Pass(side) => writeln!(out, "{} has no legal move and passes.", side),
            Announcement::IllegalMove(loc) => writeln!(out, "{} is not a legal move.", loc),
            Announcement::EngineThinking => writeln!(out, "Thinking..."),
            Announcement::EngineMove(loc) => writeln!(out, "Engine plays {}.", loc),
            Announcement::GameOver { black, white } => {
                let verdict = match black.cmp(&white) {
                    std::cmp::Ordering::Greater => "Black wins.",
                    std::cmp::Ordering::Less => "White wins.",
                    std::cmp::Ordering::Equal => "Draw.",
                };
                writeln!(out, "Game over: Black {}, White {}. {}", black, white, verdict)
            }
        }
    }

    fn ask_retry(&mut self) -> io::Result<bool> {
        loop {
            let line = match self.prompt_line("Play again? (y/n) ") {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(false),
                Err(e) => return Err(e),
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {}
            }
        }
    }
}
