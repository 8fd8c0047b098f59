//! Runtime protocol handling.
//!
//! The game runtime talks to the bot over line-delimited JSON: one game
//! config message at startup, then a stream of frames. Deploy frames carry
//! the board snapshot we plan a turn against; action frames carry the
//! combat events of the turn in progress. The bot answers each deploy
//! frame with two lines, a build list and a deploy list.

pub mod commands;
pub mod config;
pub mod frame;
pub mod parser;

pub use commands::CommandList;
pub use config::{GameConfig, UnitInformation, UpgradeInformation};
pub use frame::{BreachRecord, Frame, FramePhase};
pub use parser::{parse_message, Message};

use thiserror::Error;

/// Errors raised while decoding runtime messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game config lists {0} unit types, expected at least 8")]
    IncompleteCatalog(usize),

    #[error("turnInfo is missing or too short")]
    MissingTurnInfo,

    #[error("unknown frame phase {0}")]
    UnknownPhase(i64),

    #[error("malformed unit entry: {0}")]
    MalformedUnit(String),

    #[error("malformed breach entry: {0}")]
    MalformedBreach(String),

    #[error("player stats are missing or too short")]
    MissingStats,
}
