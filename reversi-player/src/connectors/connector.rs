use crate::command::Command;
use reversi_board::{Board, Location, LocationList, Side};
use std::io;

/// Game events a [`Connector`] reports to the human player.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Announcement {
    GameStart { human: Side, depth: u8 },
    /// `Side` had no legal move and passed.
    Pass(Side),
    /// The human asked for a square that is not a legal move.
    IllegalMove(Location),
    EngineThinking,
    EngineMove(Location),
    GameOver { black: u8, white: u8 },
}

/// A player-facing abstract interface to a way of playing with "the outside world."
pub trait Connector {
    /// Draw the position, marking the side to move's legal moves and the last placement.
    fn show_board(
        &mut self,
        board: &Board,
        legal_moves: LocationList,
        last_move: Option<Location>,
    ) -> io::Result<()>;

    /// Block until the human enters a well-formed command.
    fn read_command(&mut self) -> io::Result<Command>;

    fn announce(&mut self, announcement: Announcement) -> io::Result<()>;

    /// Ask whether to play another game after one ends.
    fn ask_retry(&mut self) -> io::Result<bool>;
}
