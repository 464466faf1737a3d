use tracing::{info, warn};

use crate::config;
use crate::net::messages::{self, MessageKind};
use crate::view::diff;
use crate::view::grid::GridSurface;
use crate::view::palette::ColorPool;
use crate::view::snapshot::WorldSnapshot;

/// Per-connection viewer state: the last applied snapshot, the entity color
/// pool, and the grid surface once an init message has arrived. Dropped in
/// full when the connection goes away.
pub struct SessionController {
    snapshot: WorldSnapshot,
    colors: ColorPool,
    grid: Option<GridSurface>,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            snapshot: WorldSnapshot::default(),
            colors: ColorPool::new(config::ENTITY_PALETTE),
            grid: None,
        }
    }

    pub fn grid(&self) -> Option<&GridSurface> {
        self.grid.as_ref()
    }

    /// Feeds one raw protocol message through the state machine. A malformed
    /// message is dropped and the last-known-good snapshot stays in place.
    pub fn handle_message(&mut self, raw: &str) {
        match MessageKind::sniff(raw) {
            Some(MessageKind::Init) => self.handle_init(raw),
            Some(MessageKind::State) => self.handle_state(raw),
            None => warn!("unrecognized message, ignoring"),
        }
    }

    fn handle_init(&mut self, raw: &str) {
        let message = match messages::decode_init(raw) {
            Ok(message) => message,
            Err(err) => {
                warn!(%err, "dropping init message");
                return;
            }
        };
        if self.grid.is_some() {
            // One init per session; a repeat leaves the existing grid alone.
            info!("duplicate init message, keeping existing grid");
            return;
        }
        match GridSurface::from_field_token(&message.init.field) {
            Ok(grid) => {
                info!(
                    width = grid.width(),
                    height = grid.height(),
                    players = message.init.player_count,
                    "grid built",
                );
                self.grid = Some(grid);
            }
            Err(err) => warn!(%err, "dropping init message"),
        }
    }

    fn handle_state(&mut self, raw: &str) {
        let Some(grid) = self.grid.as_mut() else {
            // No grid to paint onto yet.
            return;
        };
        let message = match messages::decode_state(raw) {
            Ok(message) => message,
            Err(err) => {
                warn!(%err, "dropping state message");
                return;
            }
        };
        let next = match WorldSnapshot::from_state(&message.state) {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, "dropping state message");
                return;
            }
        };
        let changes = diff::diff(&self.snapshot, &next, &mut self.colors);
        grid.apply(&changes);
        self.snapshot = next;
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
