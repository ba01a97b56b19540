use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Opponent with no strategy at all: uniform random orientations, origins, and dig targets.
///
/// It keeps no memory of earlier digs, so it happily digs the same cell again.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    rng: SmallRng,
}

impl RandomOpponent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn place_chest(&mut self, board: &mut Board, chest: ChestType) -> Result<ChestPlacement> {
        let orientation = *Orientation::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Orientation::Horizontal);
        place_randomly(board, chest, orientation, &mut self.rng)
    }

    fn pick_dig_target(&mut self, board: &Board) -> Coord2 {
        let (rows, cols) = board.size();
        (
            self.rng.random_range(0..rows),
            self.rng.random_range(0..cols),
        )
    }
}
