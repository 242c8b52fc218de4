use anyhow::Context;
use clap::Parser;
use log::info;
use reversi_board::Side;
use reversi_player::config::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
use reversi_player::connectors::ConsoleConnector;
use reversi_player::{Engine, EngineConfig, GameSequencer};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "reversi", about = "Play Reversi against an alpha-beta engine")]
struct Args {
    /// Side you play: black (moves first) or white
    #[arg(long, default_value_t = Side::Black)]
    side: Side,

    /// Engine search depth in plies
    #[arg(
        long,
        default_value_t = DEFAULT_SEARCH_DEPTH,
        value_parser = clap::value_parser!(u8).range(MIN_SEARCH_DEPTH as i64..=MAX_SEARCH_DEPTH as i64)
    )]
    depth: u8,

    /// Search threads; defaults to one per hardware thread
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = EngineConfig::default().with_depth(args.depth);
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    info!("starting with {:?}, human plays {}", config, args.side);

    let stdin = io::stdin();
    let connector = ConsoleConnector::new(stdin.lock(), io::stdout());
    let mut sequencer = GameSequencer::new(Engine::new(config), args.side, connector);

    match sequencer.run() {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        result => result.context("console game failed"),
    }
}
