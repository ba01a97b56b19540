use serde::{Deserialize, Serialize};

use crate::*;

/// Per chest type tally of pieces one player has dug up on the opponent's board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressCounters {
    found: [Coord; ChestType::COUNT],
}

impl ProgressCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(&self, chest: ChestType) -> Coord {
        self.found[chest.index()]
    }

    pub fn is_complete(&self, chest: ChestType) -> bool {
        self.found(chest) == chest.length()
    }

    pub fn all_complete(&self) -> bool {
        ChestType::ALL.iter().all(|&chest| self.is_complete(chest))
    }

    fn increment(&mut self, chest: ChestType) -> Coord {
        let slot = &mut self.found[chest.index()];
        *slot = slot.saturating_add(1);
        *slot
    }
}

/// Emitted by the dig that uncovers the last piece of a chest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestFullyFound {
    pub chest: ChestType,
    pub length: Coord,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigOutcome {
    AlreadyDug,
    Missed,
    Hit {
        chest: ChestType,
        completed: Option<ChestFullyFound>,
    },
}

impl DigOutcome {
    pub const fn completed(self) -> Option<ChestFullyFound> {
        match self {
            Self::Hit { completed, .. } => completed,
            Self::AlreadyDug | Self::Missed => None,
        }
    }
}

/// Digs one cell of `board`, crediting any chest piece found to `counters`.
///
/// Digging a cell twice is harmless and reports [`DigOutcome::AlreadyDug`].
pub fn dig(
    board: &mut Board,
    counters: &mut ProgressCounters,
    coords: Coord2,
) -> Result<DigOutcome> {
    use DigOutcome::*;

    let coords = board.validate_coords(coords)?;

    Ok(match board[coords] {
        Cell::Dug | Cell::DugChest(_) => AlreadyDug,
        Cell::Empty => {
            board.set_cell(coords, Cell::Dug);
            Missed
        }
        Cell::Chest(chest) => {
            board.set_cell(coords, Cell::DugChest(chest));
            let found = counters.increment(chest);
            let completed = (found == chest.length()).then_some(ChestFullyFound {
                chest,
                length: chest.length(),
            });
            if completed.is_some() {
                log::debug!("{} chest fully found", chest);
            }
            Hit { chest, completed }
        }
    })
}
