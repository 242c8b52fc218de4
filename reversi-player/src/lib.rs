//! `reversi-player` is a Reversi engine and a console front end for playing against it.
//!
//!  - [`Engine`] picks moves with a depth-limited alpha-beta search, optionally
//!    splitting the root moves across a pool of [`worker::SearchWorker`]s.
//!  - [`evaluator`] scores positions from one side's perspective.
//!  - [`GameSequencer`] runs games between a human at a [`connectors::Connector`]
//!    and the engine.

pub mod command;
pub mod config;
pub mod connectors;
pub mod engine;
pub mod evaluator;
pub mod search;
pub mod sequencer;
pub mod worker;

pub use command::{Command, ParseCommandError};
pub use config::EngineConfig;
pub use engine::Engine;
pub use search::SearchResult;
pub use sequencer::{GameOutcome, GameSequencer};
