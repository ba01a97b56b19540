use rand::Rng;

use crate::*;

/// Upper bound on random origins tried by [`place_randomly`] before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Writes the chest onto `board` if every cell of its span is on the board and still empty.
///
/// Either the whole chest is written or the board is left untouched.
pub fn try_place(board: &mut Board, placement: &ChestPlacement) -> Result<()> {
    let span = placement
        .span(board.size())
        .ok_or(GameError::OutOfBounds)?;

    if span.iter().any(|&coords| board[coords] != Cell::Empty) {
        return Err(GameError::Overlap);
    }

    for &coords in &span {
        board.set_cell(coords, Cell::Chest(placement.chest));
    }

    log::debug!(
        "placed {} {:?} at {:?}",
        placement.chest,
        placement.orientation,
        placement.origin
    );
    Ok(())
}

/// Keeps drawing uniform random origins for a chest of fixed type and orientation until one fits.
pub fn place_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    chest: ChestType,
    orientation: Orientation,
    rng: &mut R,
) -> Result<ChestPlacement> {
    let (rows, cols) = board.size();

    for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
        let origin = (rng.random_range(0..rows), rng.random_range(0..cols));
        let placement = ChestPlacement::new(origin, chest, orientation);
        match try_place(board, &placement) {
            Ok(()) => return Ok(placement),
            Err(GameError::OutOfBounds | GameError::Overlap) => {
                log::trace!("attempt {} for {} at {:?} rejected", attempt, chest, origin);
            }
            Err(err) => return Err(err),
        }
    }

    log::warn!(
        "Gave up placing {} {:?} after {} attempts",
        chest,
        orientation,
        MAX_PLACEMENT_ATTEMPTS
    );
    Err(GameError::NoRoom)
}
