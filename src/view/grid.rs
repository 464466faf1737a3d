use thiserror::Error;
use tracing::warn;

use crate::net::codec::{self, CodecError};
use crate::view::diff::PaintInstruction;
use crate::view::palette::PaintColor;
use crate::view::snapshot::Cell;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cell {x}x{y} outside {width}x{height} grid")]
pub struct OutOfBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// The addressable matrix of paintable cells, built once per session from
/// the init message's field dimensions.
#[derive(Debug)]
pub struct GridSurface {
    width: u16,
    height: u16,
    cells: Vec<Option<PaintColor>>,
}

impl GridSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Builds the grid from the init message's `"<W>x<H>"` token.
    pub fn from_field_token(token: &str) -> Result<Self, CodecError> {
        let dims = codec::decode_cell(token)?;
        Ok(Self::new(dims.x, dims.y))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, cell: Cell) -> Result<usize, OutOfBounds> {
        if cell.x >= self.width || cell.y >= self.height {
            return Err(OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(cell.y as usize * self.width as usize + cell.x as usize)
    }

    pub fn paint(&mut self, cell: Cell, color: PaintColor) -> Result<(), OutOfBounds> {
        let idx = self.index(cell)?;
        self.cells[idx] = Some(color);
        Ok(())
    }

    pub fn clear(&mut self, cell: Cell) -> Result<(), OutOfBounds> {
        let idx = self.index(cell)?;
        self.cells[idx] = None;
        Ok(())
    }

    pub fn color_at(&self, cell: Cell) -> Option<PaintColor> {
        self.index(cell).ok().and_then(|idx| self.cells[idx])
    }

    /// Applies a changeset front to back. An out-of-bounds instruction means
    /// the engine and the viewer disagree about the field; it is logged and
    /// skipped, and cells already updated keep their new paint.
    pub fn apply(&mut self, changes: &[(Cell, PaintInstruction)]) {
        for &(cell, instruction) in changes {
            let result = match instruction {
                PaintInstruction::Set(color) => self.paint(cell, color),
                PaintInstruction::Clear => self.clear(cell),
            };
            if let Err(err) = result {
                warn!(%err, "dropping paint instruction");
            }
        }
    }
}
