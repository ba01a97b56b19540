use serde::{Deserialize, Serialize};

use crate::*;

/// State of a single board cell.
///
/// Cells only move forward: `Empty` becomes `Chest` during placement, and digging turns `Empty` into `Dug` and
/// `Chest` into `DugChest`. Dug cells never change again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Chest(ChestType),
    Dug,
    DugChest(ChestType),
}

impl Cell {
    pub const fn is_dug(self) -> bool {
        matches!(self, Self::Dug | Self::DugChest(_))
    }

    pub const fn is_undug_chest(self) -> bool {
        matches!(self, Self::Chest(_))
    }

    pub const fn chest(self) -> Option<ChestType> {
        match self {
            Self::Chest(chest) | Self::DugChest(chest) => Some(chest),
            Self::Empty | Self::Dug => None,
        }
    }

    /// Compact signed encoding: 0 empty, -1 dug, `code` for a chest and `-code` once it is dug.
    pub const fn code(self) -> i8 {
        match self {
            Self::Empty => 0,
            Self::Dug => -1,
            Self::Chest(chest) => chest.code() as i8,
            Self::DugChest(chest) => -(chest.code() as i8),
        }
    }

    pub fn from_code(code: i8) -> Result<Self> {
        match code {
            0 => Ok(Self::Empty),
            -1 => Ok(Self::Dug),
            c if c > 0 => Ok(Self::Chest(ChestType::try_from(c.unsigned_abs())?)),
            c => Ok(Self::DugChest(ChestType::try_from(c.unsigned_abs())?)),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
