//! Drives full games between a human at a [`Connector`] and the [`Engine`].

use crate::command::Command;
use crate::connectors::{Announcement, Connector};
use crate::engine::Engine;
use log::info;
use reversi_board::{Board, Location, Side};
use std::io;

/// How a single game ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameOutcome {
    Finished { black: u8, white: u8 },
    Restarted,
    Quit,
}

/// Owns the authoritative board and alternates turns between the human and the engine.
pub struct GameSequencer<C> {
    board: Board,
    engine: Engine,
    human: Side,
    connector: C,
    last_move: Option<Location>,
}

impl<C: Connector> GameSequencer<C> {
    /// The engine plays whichever side `human` does not.
    pub fn new(mut engine: Engine, human: Side, connector: C) -> Self {
        engine.set_evaluate_side(!human);
        Self {
            board: Board::new(),
            engine,
            human,
            connector,
            last_move: None,
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Play games until the human quits or declines another.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.play_game()? {
                GameOutcome::Quit => return Ok(()),
                GameOutcome::Restarted => continue,
                GameOutcome::Finished { .. } => {
                    if !self.connector.ask_retry()? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Play one game from the starting position. The board is reset afterwards.
    pub fn play_game(&mut self) -> io::Result<GameOutcome> {
        self.board.reset();
        self.last_move = None;

        let outcome = self.play_from_start();
        self.board.reset();
        self.last_move = None;
        outcome
    }

    fn play_from_start(&mut self) -> io::Result<GameOutcome> {
        self.connector.announce(Announcement::GameStart {
            human: self.human,
            depth: self.engine.search_depth(),
        })?;

        let mut side = Side::Black;
        while !self.board.is_finished() {
            let legal_moves = self.board.legal_moves(side);
            self.connector
                .show_board(&self.board, legal_moves, self.last_move)?;

            if legal_moves.is_empty() {
                info!("{} passes", side);
                self.connector.announce(Announcement::Pass(side))?;
                self.last_move = None;
                side = !side;
                continue;
            }

            let loc = if side == self.human {
                match self.read_human_move(side)? {
                    Ok(loc) => loc,
                    Err(outcome) => return Ok(outcome),
                }
            } else {
                self.connector.announce(Announcement::EngineThinking)?;
                match self.engine.make_best_move(&mut self.board) {
                    Some(loc) => {
                        info!("engine plays {}", loc);
                        self.connector.announce(Announcement::EngineMove(loc))?;
                        loc
                    }
                    // Unreachable while `legal_moves` is non-empty.
                    None => {
                        side = !side;
                        continue;
                    }
                }
            };

            self.board.place(loc, side);
            self.last_move = Some(loc);
            side = !side;
        }

        let (black, white) = self.board.count_stones();
        self.connector
            .show_board(&self.board, Default::default(), self.last_move)?;
        self.connector
            .announce(Announcement::GameOver { black, white })?;

        info!("game over: black {}, white {}", black, white);
        Ok(GameOutcome::Finished { black, white })
    }

    /// Read commands until one is a legal placement for `side`, or ends the game.
    fn read_human_move(&mut self, side: Side) -> io::Result<Result<Location, GameOutcome>> {
        let legal_moves = self.board.legal_moves(side);

        loop {
            match self.connector.read_command()? {
                Command::Quit => return Ok(Err(GameOutcome::Quit)),
                Command::Restart => {
                    info!("game restarted");
                    return Ok(Err(GameOutcome::Restarted));
                }
                Command::Place(loc) if legal_moves.contains(loc) => return Ok(Ok(loc)),
                Command::Place(loc) => self.connector.announce(Announcement::IllegalMove(loc))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use reversi_board::LocationList;
    use std::collections::VecDeque;

    /// Plays scripted commands, then the first legal move once the script runs out.
    #[derive(Default)]
    struct ScriptedConnector {
        script: VecDeque<Command>,
        retries: VecDeque<bool>,
        legal_moves: LocationList,
        boards_shown: usize,
        announcements: Vec<Announcement>,
    }

    impl ScriptedConnector {
        fn with_script(script: &[Command]) -> Self {
            Self {
                script: script.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Connector for ScriptedConnector {
        fn show_board(
            &mut self,
            _board: &Board,
            legal_moves: LocationList,
            _last_move: Option<Location>,
        ) -> io::Result<()> {
            self.legal_moves = legal_moves;
            self.boards_shown += 1;
            Ok(())
        }

        fn read_command(&mut self) -> io::Result<Command> {
            if let Some(command) = self.script.pop_front() {
                return Ok(command);
            }
            self.legal_moves
                .into_iter()
                .next()
                .map(Command::Place)
                .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "asked to move without a legal move"))
        }

        fn announce(&mut self, announcement: Announcement) -> io::Result<()> {
            self.announcements.push(announcement);
            Ok(())
        }

        fn ask_retry(&mut self) -> io::Result<bool> {
            Ok(self.retries.pop_front().unwrap_or(false))
        }
    }

    fn sequencer(human: Side, connector: ScriptedConnector) -> GameSequencer<ScriptedConnector> {
        let engine = Engine::new(EngineConfig::default().with_depth(1).with_workers(1));
        GameSequencer::new(engine, human, connector)
    }

    fn count<F: Fn(&Announcement) -> bool>(announcements: &[Announcement], f: F) -> usize {
        announcements.iter().filter(|a| f(*a)).count()
    }

    #[test]
    fn plays_a_full_game_to_completion() {
        let mut game = sequencer(Side::Black, ScriptedConnector::default());

        let outcome = game.play_game().unwrap();
        let (black, white) = match outcome {
            GameOutcome::Finished { black, white } => (black, white),
            other => panic!("unexpected outcome {:?}", other),
        };

        assert!(black + white <= 64);
        assert!(black + white > 4);

        let announcements = &game.connector().announcements;
        assert_eq!(
            announcements.first(),
            Some(&Announcement::GameStart {
                human: Side::Black,
                depth: 1
            })
        );
        assert_eq!(
            announcements.last(),
            Some(&Announcement::GameOver { black, white })
        );
        assert!(count(announcements, |a| matches!(a, Announcement::EngineMove(_))) > 0);
        assert_eq!(game.board, Board::new());
    }

    #[test]
    fn engine_moves_first_when_human_is_white() {
        let connector = ScriptedConnector::with_script(&[Command::Quit]);
        let mut game = sequencer(Side::White, connector);

        assert_eq!(game.play_game().unwrap(), GameOutcome::Quit);

        let announcements = &game.connector().announcements;
        assert_eq!(announcements[1], Announcement::EngineThinking);
        let opening = match announcements[2] {
            Announcement::EngineMove(loc) => loc.to_string(),
            other => panic!("unexpected announcement {:?}", other),
        };
        assert!(["d3", "c4", "f5", "e6"].contains(&opening.as_str()));
    }

    #[test]
    fn illegal_moves_are_rejected_before_quitting() {
        let a1: Location = "a1".parse().unwrap();
        let e4: Location = "e4".parse().unwrap();
        let connector = ScriptedConnector::with_script(&[Command::Place(a1), Command::Place(e4), Command::Quit]);
        let mut game = sequencer(Side::Black, connector);

        assert_eq!(game.play_game().unwrap(), GameOutcome::Quit);

        let announcements = &game.connector().announcements;
        assert!(announcements.contains(&Announcement::IllegalMove(a1)));
        assert!(announcements.contains(&Announcement::IllegalMove(e4)));
        assert_eq!(count(announcements, |a| matches!(a, Announcement::EngineMove(_))), 0);
        assert_eq!(game.board, Board::new());
    }

    #[test]
    fn restart_ends_the_game_and_resets_the_board() {
        let d3: Location = "d3".parse().unwrap();
        let connector = ScriptedConnector::with_script(&[Command::Place(d3), Command::Restart]);
        let mut game = sequencer(Side::Black, connector);

        assert_eq!(game.play_game().unwrap(), GameOutcome::Restarted);
        assert_eq!(game.board, Board::new());
        assert_eq!(game.last_move, None);
        assert_eq!(
            count(&game.connector().announcements, |a| matches!(a, Announcement::EngineMove(_))),
            1
        );
    }

    #[test]
    fn run_stops_on_quit_after_a_restart() {
        let connector = ScriptedConnector::with_script(&[Command::Restart, Command::Quit]);
        let mut game = sequencer(Side::Black, connector);

        game.run().unwrap();

        let starts = count(&game.connector().announcements, |a| {
            matches!(a, Announcement::GameStart { .. })
        });
        assert_eq!(starts, 2);
    }

    #[test]
    fn run_plays_again_only_when_asked() {
        let mut connector = ScriptedConnector::default();
        connector.retries = vec![true, false].into();
        let mut game = sequencer(Side::White, connector);

        game.run().unwrap();

        let finished = count(&game.connector().announcements, |a| {
            matches!(a, Announcement::GameOver { .. })
        });
        assert_eq!(finished, 2);
    }
}
