/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts, revealed counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
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

/// Whether `a` and `b` are at most one step apart in any direction, diagonals included.
pub const fn within_one(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cascade order: up, left, right, down.
const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// In-bounds coordinates around a center, following a fixed displacement table.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(i8, i8)],
    index: u8,
}

impl NeighborIter {
    /// The 8-neighbourhood of `center`.
    pub(crate) fn surrounding(center: Coord2, bounds: Coord2) -> Self {
        Self::with_deltas(center, bounds, &DISPLACEMENTS)
    }

    /// The 4 orthogonal neighbours of `center`, in cascade order.
    pub(crate) fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::with_deltas(center, bounds, &ORTHOGONAL)
    }

    fn with_deltas(center: Coord2, bounds: Coord2, deltas: &'static [(i8, i8)]) -> Self {
        Self {
            center,
            bounds,
            deltas,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.deltas.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_surrounding_cells() {
        let neighbors: Vec<_> = NeighborIter::surrounding((0, 0), (5, 5)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn orthogonal_order_is_up_left_right_down() {
        let neighbors: Vec<_> = NeighborIter::orthogonal((2, 2), (5, 5)).collect();
        assert_eq!(neighbors, [(2, 1), (1, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn orthogonal_skips_out_of_bounds() {
        let neighbors: Vec<_> = NeighborIter::orthogonal((4, 0), (5, 1)).collect();
        assert_eq!(neighbors, [(3, 0)]);
    }

    #[test]
    fn within_one_covers_diagonals() {
        assert!(within_one((3, 3), (2, 4)));
        assert!(within_one((3, 3), (3, 3)));
        assert!(!within_one((3, 3), (5, 3)));
        assert!(!within_one((0, 0), (0, 2)));
    }
}
