use std::collections::HashMap;

use crate::net::codec::{self, CodecError};
use crate::net::messages::StateBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// One player's occupied cells plus the cell it most recently vacated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityPath {
    pub body: Vec<Cell>,
    pub vacated_tail: Option<Cell>,
}

/// Complete world state at one instant. Replaced wholesale on every state
/// message; never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct WorldSnapshot {
    pub players: HashMap<String, EntityPath>,
    pub apple: Option<Cell>,
}

impl WorldSnapshot {
    /// Decodes a raw state message body into structured form. Any malformed
    /// token rejects the whole snapshot.
    pub fn from_state(state: &StateBody) -> Result<Self, CodecError> {
        let mut players = HashMap::with_capacity(state.players.len());
        for (id, serialized) in &state.players {
            players.insert(id.clone(), codec::parse_path(serialized)?);
        }
        let apple = codec::parse_apple(&state.ap)?;
        Ok(Self { players, apple })
    }
}
