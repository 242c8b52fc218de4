//! Typed player commands parsed from text.

use derive_more::{Display, Error, From};
use reversi_board::{Location, LocationList, ParseLocationError};

/// Something a human player asked for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Place(Location),
    Restart,
    Quit,
}

#[derive(Debug, Display, Error, From, PartialEq)]
pub enum ParseCommandError {
    #[display(fmt = "no command given")]
    #[from(ignore)]
    Empty,
    #[display(fmt = "unknown command")]
    #[from(ignore)]
    Unknown,
    #[display(fmt = "columns are a-h and rows are 1-8 (e.g. d3)")]
    InvalidLocation(ParseLocationError),
}

impl Command {
    /// Whether this is a placement on one of `legal_moves`.
    pub fn is_legal_in(self, legal_moves: LocationList) -> bool {
        match self {
            Command::Place(loc) => legal_moves.contains(loc),
            _ => false,
        }
    }
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "r" | "restart" => Ok(Command::Restart),
            "s" | "q" | "quit" => Ok(Command::Quit),
            text if text.chars().count() == 2 => Ok(Command::Place(text.parse()?)),
            _ => Err(ParseCommandError::Unknown),
        }
    }
}

impl From<Location> for Command {
    fn from(loc: Location) -> Self {
        Command::Place(loc)
    }
}
