use ndarray::Array2;

/// Single coordinate axis used for field rows, columns, and positions.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Where the player always begins.
pub const START: Coord2 = (0, 0);

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

/// Size of an array as coordinates, fields never exceed `Coord::MAX` per axis.
pub(crate) fn array_size<T>(array: &Array2<T>) -> Coord2 {
    let (rows, columns) = array.dim();
    (
        rows.try_into().unwrap_or(Coord::MAX),
        columns.try_into().unwrap_or(Coord::MAX),
    )
}

/// Orthogonal steps in search order: down, right, up, left.
const DISPLACEMENTS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;
    let (max_row, max_column) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_column = column.checked_add_signed(d_column.try_into().ok()?)?;
    if next_column >= max_column {
        return None;
    }

    Some((next_row, next_column))
}

/// Orthogonal neighbours of `center` strictly below `bounds` on both axes.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_follow_down_right_up_left_order() {
        let found: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();
        assert_eq!(found, [(2, 1), (1, 2), (0, 1), (1, 0)]);
    }

    #[test]
    fn neighbors_skip_negative_and_out_of_bounds() {
        let found: Vec<_> = NeighborIter::new((0, 0), (1, 2)).collect();
        assert_eq!(found, [(0, 1)]);
    }
}
