use ndarray::Array2;

/// Single axis value, used for row/col positions and grid dimensions.
pub type Coord = u8;

/// Area-scale count, used for mine and cell totals.
pub type CellCount = u16;

/// Zero-based `(row, col)` position, or `(rows, cols)` when used as a size.
pub type Coord2 = (Coord, Coord);

pub trait ToIndex {
    type Output;
    fn to_index(self) -> Self::Output;
}

impl ToIndex for Coord2 {
    type Output = [usize; 2];

    fn to_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn cell_total(rows: Coord, cols: Coord) -> CellCount {
    let rows = rows as CellCount;
    let cols = cols as CellCount;
    rows.saturating_mul(cols)
}

/// The 8 relative offsets around a cell, `(0, 0)` excluded.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `offset` to `center`, returning a position only when it stays
/// inside `bounds`.
fn offset_within(center: Coord2, offset: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let row = center.0.checked_add_signed(offset.0)?;
    let col = center.1.checked_add_signed(offset.1)?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// Iterates the in-bounds neighbors of `center`, top-left to bottom-right.
/// Offsets that fall outside `bounds` are skipped, not reported as errors.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    OFFSETS
        .iter()
        .filter_map(move |&offset| offset_within(center, offset, bounds))
}

pub trait NeighborsExt {
    fn iter_neighbors(&self, center: Coord2) -> impl Iterator<Item = Coord2>;
}

impl<T> NeighborsExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> impl Iterator<Item = Coord2> {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        neighbors(center, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let found = collect((1, 1), (3, 3));
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn corner_cells_have_three_neighbors() {
        assert_eq!(collect((0, 0), (3, 3)).len(), 3);
        assert_eq!(collect((2, 2), (3, 3)).len(), 3);
        assert_eq!(collect((0, 2), (3, 3)).len(), 3);
        assert_eq!(collect((2, 0), (3, 3)).len(), 3);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(collect((0, 1), (3, 3)).len(), 5);
    }

    #[test]
    fn neighbors_never_leave_bounds() {
        let bounds = (4, 7);
        for row in 0..bounds.0 {
            for col in 0..bounds.1 {
                for (nr, nc) in neighbors((row, col), bounds) {
                    assert!(nr < bounds.0 && nc < bounds.1);
                }
            }
        }
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(collect((0, 0), (1, 1)).len(), 0);
    }
}
