use crate::*;
pub use random::*;

mod random;

/// Decision maker for the computer-controlled side.
pub trait Opponent {
    /// Hides `chest` somewhere on `board`, returning where it went.
    fn place_chest(&mut self, board: &mut Board, chest: ChestType) -> Result<ChestPlacement>;

    /// Picks the next cell to dig on the user's board.
    fn pick_dig_target(&mut self, board: &Board) -> Coord2;
}
