mod bbox;

use std::collections::BTreeSet;

pub use bbox::*;
use tracing::trace;

use crate::{BoardError, Coords, Rotation, Side, Tile};

/// An extensible rectangle of cells, each holding at most one [`Tile`].
///
/// The board starts as a single empty cell at [`Coords::ORIGIN`]. Whenever a
/// tile is written on the outermost row or column, an empty row or column is
/// added on that side, so every placed tile always has free cells around it.
///
/// Growing never renumbers the cells: coordinates are logical, and the
/// bounding box records where the storage starts.
#[derive(Clone, Debug)]
pub struct Board {
    /// Row-major, covering exactly `bounds`.
    cells: Vec<Option<Tile>>,
    bounds: BoundingBox,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: vec![None],
            bounds: BoundingBox::singleton(Coords::ORIGIN),
        }
    }

    /// The area where tiles may be read and written.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn height(&self) -> usize {
        self.bounds.height()
    }

    pub fn width(&self) -> usize {
        self.bounds.width()
    }

    pub fn is_in_bounds(&self, coords: Coords) -> bool {
        self.bounds.contains(coords)
    }

    /// Returns the tile at `coords`, if there is one.
    pub fn read(&self, coords: Coords) -> Result<Option<Tile>, BoardError> {
        let idx = self
            .bounds
            .index(coords)
            .ok_or(BoardError::OutOfBounds(coords))?;
        Ok(self.cells[idx])
    }

    /// Like [`Self::read()`], but out-of-bounds coordinates are simply empty.
    pub fn get(&self, coords: Coords) -> Option<Tile> {
        self.bounds.index(coords).and_then(|idx| self.cells[idx])
    }

    /// Puts `tile` at `coords` and grows the board if `coords` is on its border.
    pub fn write(&mut self, coords: Coords, tile: Tile) -> Result<(), BoardError> {
        let idx = self
            .bounds
            .index(coords)
            .ok_or(BoardError::OutOfBounds(coords))?;
        if self.cells[idx].is_some() {
            return Err(BoardError::CellOccupied(coords));
        }
        self.cells[idx] = Some(tile);

        let mut bounds = self.bounds;
        for side in Side::ALL {
            if self.bounds.is_on_edge(coords, side) {
                bounds = bounds.extended(side);
            }
        }
        if bounds != self.bounds {
            trace!(?coords, height = bounds.height(), width = bounds.width(), "Growing board");
            self.resize(bounds);
        }
        Ok(())
    }

    /// Rotates `tile` clockwise by `degrees` and writes it at `coords`.
    ///
    /// Returns the tile as it was placed.
    pub fn place_with_rotation(
        &mut self,
        coords: Coords,
        tile: Tile,
        degrees: i32,
    ) -> Result<Tile, BoardError> {
        let rotated = tile.rotated(Rotation::from_degrees(degrees)?);
        self.write(coords, rotated)?;
        Ok(rotated)
    }

    /// The tile one step from `coords` in the direction of `side`.
    ///
    /// Fails only if `coords` itself is out of bounds; a neighbour beyond the
    /// border is just absent.
    pub fn adjacent_tile(&self, coords: Coords, side: Side) -> Result<Option<Tile>, BoardError> {
        if !self.is_in_bounds(coords) {
            return Err(BoardError::OutOfBounds(coords));
        }
        Ok(self.get(coords.neighbor(side)))
    }

    /// Every empty cell next to at least one tile, in row-major order.
    pub fn candidate_positions(&self) -> BTreeSet<Coords> {
        let mut positions = BTreeSet::new();
        for (coords, _) in self.tiles() {
            for (_, neighbor) in coords.neighbors() {
                if self.is_in_bounds(neighbor) && self.get(neighbor).is_none() {
                    positions.insert(neighbor);
                }
            }
        }
        positions
    }

    /// Would every link of `tile`, placed at `coords`, continue into a
    /// same-colored link on each neighbouring tile it points to?
    ///
    /// A missing neighbour on any link side makes the whole tile open.
    /// A tile without links is trivially closed. Coordinates outside the
    /// board are never closed.
    pub fn is_path_closed(&self, coords: Coords, tile: &Tile) -> bool {
        if !self.is_in_bounds(coords) {
            return false;
        }
        tile.links().all(|link| {
            link.sides().into_iter().all(|side| {
                self.get(coords.neighbor(side))
                    .and_then(|neighbor| neighbor.link_at(side.opposite()))
                    .is_some_and(|other| other.color() == link.color())
            })
        })
    }

    /// All placed tiles, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coords, Tile)> + '_ {
        self.bounds
            .iter()
            .zip(self.cells.iter())
            .filter_map(|(coords, cell)| cell.map(|tile| (coords, tile)))
    }

    pub fn num_tiles(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// The cells in row-major storage order, including empty ones.
    pub(crate) fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    // Internal helper to move the cells into a larger storage area.
    fn resize(&mut self, bounds: BoundingBox) {
        let mut cells = vec![None; bounds.height() * bounds.width()];
        for (coords, tile) in self.tiles() {
            // The new bounds contain the old ones.
            if let Some(idx) = bounds.index(coords) {
                cells[idx] = Some(tile);
            }
        }
        self.cells = cells;
        self.bounds = bounds;
    }
}
