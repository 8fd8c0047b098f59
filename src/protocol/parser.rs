//! Incoming message classification.
//!
//! Every stdin line is a JSON object. A config message is recognised by its
//! `unitInformation` key, a frame by its `turnInfo` key. Anything else is
//! reported as `Unknown` so the caller can log and skip it.

use serde_json::Value;

use super::{Frame, FramePhase, GameConfig, ProtocolError};

/// A decoded runtime message.
#[derive(Debug, Clone)]
pub enum Message {
    Config(GameConfig),
    Deploy(Frame),
    Action(Frame),
    GameOver,
    Unknown,
}

/// Parses a single line of input into a `Message`.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_message(line: &str) -> Result<Option<Message>, ProtocolError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    if value.get("unitInformation").is_some() {
        let config: GameConfig = serde_json::from_value(value)?;
        return Ok(Some(Message::Config(config)));
    }
    if value.get("turnInfo").is_some() {
        let frame: Frame = serde_json::from_value(value)?;
        let message = match frame.phase()? {
            FramePhase::Deploy => Message::Deploy(frame),
            FramePhase::Action => Message::Action(frame),
            FramePhase::GameOver => Message::GameOver,
        };
        return Ok(Some(message));
    }
    Ok(Some(Message::Unknown))
}
