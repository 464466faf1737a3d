use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] serde_json::Error),
}

/// Sent once per session, before the first state message.
#[derive(Debug, Clone, Deserialize)]
pub struct InitMessage {
    pub init: InitBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InitBody {
    pub field: String,
    pub player_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateMessage {
    pub state: StateBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateBody {
    pub players: HashMap<String, String>,
    pub ap: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Init,
    State,
}

impl MessageKind {
    /// The engine always serializes the discriminating key first, so a
    /// prefix check classifies a message without parsing it.
    pub fn sniff(raw: &str) -> Option<Self> {
        if raw.starts_with("{\"init") {
            Some(Self::Init)
        } else if raw.starts_with("{\"state") {
            Some(Self::State)
        } else {
            None
        }
    }
}

pub fn decode_init(raw: &str) -> Result<InitMessage, ProtocolError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn decode_state(raw: &str) -> Result<StateMessage, ProtocolError> {
    Ok(serde_json::from_str(raw)?)
}

/// User intents forwarded to the engine as raw text tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Start,
}

impl Command {
    pub fn token(self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Left => "left",
            Command::Right => "right",
            Command::Start => "start",
        }
    }
}
