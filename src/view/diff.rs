use tracing::warn;

use crate::config;
use crate::view::palette::{ColorPool, PaintColor};
use crate::view::snapshot::{Cell, WorldSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintInstruction {
    Clear,
    Set(PaintColor),
}

pub type Changeset = Vec<(Cell, PaintInstruction)>;

/// Computes the cell updates that take the display from `prev` to `next`.
///
/// The five steps run in a fixed order so overlapping instructions for one
/// cell resolve by last-writer-wins when the changeset is applied front to
/// back: departures, vacated tails, body deltas, new entities, apple.
pub fn diff(prev: &WorldSnapshot, next: &WorldSnapshot, colors: &mut ColorPool) -> Changeset {
    let mut changes = Changeset::new();

    // Entities gone since the previous snapshot: unpaint and recycle.
    for (id, path) in &prev.players {
        if next.players.contains_key(id) {
            continue;
        }
        for &cell in &path.body {
            changes.push((cell, PaintInstruction::Clear));
        }
        colors.release(id);
    }

    // Tails vacated by entities still alive. Must run before the body delta
    // so a cell vacated and re-occupied in the same step ends up painted.
    for (id, path) in &next.players {
        if !prev.players.contains_key(id) {
            continue;
        }
        if let Some(tail) = path.vacated_tail {
            changes.push((tail, PaintInstruction::Clear));
        }
    }

    // Body deltas for entities present in both snapshots. Unchanged cells
    // are not touched.
    for (id, path) in &next.players {
        let Some(prev_path) = prev.players.get(id) else {
            continue;
        };
        let color = colors.color_of(id);
        for &cell in &path.body {
            if !prev_path.body.contains(&cell) {
                if let Some(color) = color {
                    changes.push((cell, PaintInstruction::Set(color)));
                }
            }
        }
        for &cell in &prev_path.body {
            if !path.body.contains(&cell) {
                changes.push((cell, PaintInstruction::Clear));
            }
        }
    }

    // Entities appearing for the first time.
    for (id, path) in &next.players {
        if prev.players.contains_key(id) {
            continue;
        }
        match colors.assign(id) {
            Some(color) => {
                for &cell in &path.body {
                    changes.push((cell, PaintInstruction::Set(color)));
                }
            }
            None => {
                // Palette capacity reached: the entity stays unpainted.
                warn!(entity = %id, "color pool exhausted, entity will not be drawn");
            }
        }
    }

    if prev.apple != next.apple {
        if let Some(old) = prev.apple {
            changes.push((old, PaintInstruction::Clear));
        }
        if let Some(new) = next.apple {
            changes.push((new, PaintInstruction::Set(config::APPLE_COLOR)));
        }
    }

    changes
}
