/// Single coordinate axis used for grid rows and columns.
pub type Coord = u8;

/// Index of a cell in row-major order, `0..TOTAL_CELLS`.
pub type CellIndex = u8;

/// Count type used for mine counts and opened-cell counts.
pub type CellCount = u8;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Side length of the square grid.
pub const GRID_SIZE: Coord = 5;

pub const TOTAL_CELLS: CellCount = mult(GRID_SIZE, GRID_SIZE);

/// Largest mine count that still leaves one safe cell.
pub const MAX_MINES: CellCount = TOTAL_CELLS - 1;

pub const MIN_MINES: CellCount = 1;

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
    a.saturating_mul(b)
}

/// Row-major coordinates of `index`, or `None` when it is off the grid.
pub const fn cell_coords(index: CellIndex) -> Option<Coord2> {
    if index < TOTAL_CELLS {
        Some((index / GRID_SIZE, index % GRID_SIZE))
    } else {
        None
    }
}

pub const fn cell_index((row, column): Coord2) -> Option<CellIndex> {
    if row < GRID_SIZE && column < GRID_SIZE {
        Some(row * GRID_SIZE + column)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_round_trip_every_cell() {
        for index in 0..TOTAL_CELLS {
            let coords = cell_coords(index).unwrap();
            assert_eq!(cell_index(coords), Some(index));
        }
    }

    #[test]
    fn off_grid_lookups_are_none() {
        assert_eq!(cell_coords(TOTAL_CELLS), None);
        assert_eq!(cell_index((GRID_SIZE, 0)), None);
        assert_eq!(cell_index((0, GRID_SIZE)), None);
    }

    #[test]
    fn reference_grid_is_five_by_five() {
        assert_eq!(TOTAL_CELLS, 25);
        assert_eq!(MAX_MINES, 24);
        assert_eq!(cell_coords(7), Some((1, 2)));
    }
}
