use crate::{Coords, Side};

/// A 2D area represented by a min + max coordinate pair.
///
/// The two coordinates form an _inclusive_ 2D range, i.e. unlike in a
/// half-open range, it's possible for a point with `row == row_max`
/// to be contained in the area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub row_min: i32,
    pub column_min: i32,
    pub row_max: i32,
    pub column_max: i32,
}

impl BoundingBox {
    pub fn singleton(coords: Coords) -> Self {
        Self {
            row_min: coords.row,
            column_min: coords.column,
            row_max: coords.row,
            column_max: coords.column,
        }
    }

    pub fn contains(&self, coords: Coords) -> bool {
        coords.row >= self.row_min
            && coords.column >= self.column_min
            && coords.row <= self.row_max
            && coords.column <= self.column_max
    }

    pub fn height(&self) -> usize {
        (self.row_max - self.row_min + 1) as usize
    }

    pub fn width(&self) -> usize {
        (self.column_max - self.column_min + 1) as usize
    }

    /// Is `coords` on the outermost row or column facing `side`?
    pub fn is_on_edge(&self, coords: Coords, side: Side) -> bool {
        match side {
            Side::North => coords.row == self.row_min,
            Side::East => coords.column == self.column_max,
            Side::South => coords.row == self.row_max,
            Side::West => coords.column == self.column_min,
        }
    }

    /// The same box with one more row or column on `side`.
    #[must_use]
    pub fn extended(self, side: Side) -> Self {
        let mut bbox = self;
        match side {
            Side::North => bbox.row_min -= 1,
            Side::East => bbox.column_max += 1,
            Side::South => bbox.row_max += 1,
            Side::West => bbox.column_min -= 1,
        }
        bbox
    }

    /// Storage index of `coords` in a row-major array covering this box.
    pub(crate) fn index(&self, coords: Coords) -> Option<usize> {
        if !self.contains(coords) {
            return None;
        }
        let local_row = (coords.row - self.row_min) as usize;
        let local_column = (coords.column - self.column_min) as usize;
        Some(local_row * self.width() + local_column)
    }

    /// All coordinates in the box, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coords> {
        let Self {
            row_min,
            column_min,
            row_max,
            column_max,
        } = *self;
        (row_min..=row_max)
            .flat_map(move |row| (column_min..=column_max).map(move |column| Coords { row, column }))
    }
}
