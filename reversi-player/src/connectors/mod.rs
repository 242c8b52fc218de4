//! Connectors let a human play against the engine through different interfaces.

mod connector;
mod console;

pub use connector::{Announcement, Connector};
pub use console::ConsoleConnector;
