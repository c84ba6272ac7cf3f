use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Flat position of a cell, `row * cols + col`.
pub type CellIndex = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Board geometry. All conversions between flat indices and `(row, col)` pairs go through here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Coord,
    cols: Coord,
}

impl Grid {
    pub const fn new(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    pub const fn rows(self) -> Coord {
        self.rows
    }

    pub const fn cols(self) -> Coord {
        self.cols
    }

    pub const fn size(self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn contains(self, index: CellIndex) -> bool {
        index < self.total_cells() as CellIndex
    }

    pub const fn index_of(self, (row, col): Coord2) -> CellIndex {
        row as CellIndex * self.cols as CellIndex + col as CellIndex
    }

    /// Converts a flat index back to `(row, col)`; `index` must be in bounds.
    pub const fn coords_of(self, index: CellIndex) -> Coord2 {
        let cols = self.cols as CellIndex;
        ((index / cols) as Coord, (index % cols) as Coord)
    }

    pub fn neighbors(self, index: CellIndex) -> NeighborIter {
        NeighborIter::new(self.coords_of(index), self)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Flat indices of the in-bounds cells around a center cell.
///
/// Corners yield 3 neighbors, edges 5 and interior cells 8; boards that are a single row or column
/// fall out of the same bounds check.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    grid: Grid,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, grid: Grid) -> Self {
        Self {
            center,
            grid,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                DISPLACEMENTS[self.index as usize],
                self.grid.size(),
            );
            self.index += 1;

            if let Some(coords) = next_item {
                return Some(self.grid.index_of(coords));
            }
        }
    }
}
