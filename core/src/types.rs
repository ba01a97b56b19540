use crate::Orientation;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for chest piece counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Every board is this many rows by this many columns.
pub const BOARD_SIZE: Coord2 = (10, 10);

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

/// Steps `coords` by `offset` cells along `orientation`, returning a value only when it remains in bounds.
pub(crate) fn step(
    coords: Coord2,
    orientation: Orientation,
    offset: Coord,
    bounds: Coord2,
) -> Option<Coord2> {
    let (row, col) = coords;
    let (max_row, max_col) = bounds;

    let next = match orientation {
        Orientation::Horizontal => (row, col.checked_add(offset)?),
        Orientation::Vertical => (row.checked_add(offset)?, col),
    };

    if next.0 < max_row && next.1 < max_col {
        Some(next)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_along_orientation() {
        assert_eq!(step((2, 3), Orientation::Horizontal, 4, BOARD_SIZE), Some((2, 7)));
        assert_eq!(step((2, 3), Orientation::Vertical, 4, BOARD_SIZE), Some((6, 3)));
    }

    #[test]
    fn step_rejects_leaving_the_board() {
        assert_eq!(step((0, 7), Orientation::Horizontal, 3, BOARD_SIZE), None);
        assert_eq!(step((9, 0), Orientation::Vertical, 1, BOARD_SIZE), None);
        assert_eq!(step((0, 250), Orientation::Horizontal, 10, BOARD_SIZE), None);
    }
}
