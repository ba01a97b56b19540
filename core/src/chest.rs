use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// The five treasure chests each player hides, identified by their legacy codes 11 to 15.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ChestType {
    Bronze = 11,
    Silver = 12,
    Gold = 13,
    Rubies = 14,
    Vibranium = 15,
}

impl ChestType {
    pub const ALL: [ChestType; 5] = [
        ChestType::Bronze,
        ChestType::Silver,
        ChestType::Gold,
        ChestType::Rubies,
        ChestType::Vibranium,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Number of cells the chest covers, `16 - code`.
    pub const fn length(self) -> Coord {
        16 - self.code()
    }

    /// Position in [`ChestType::ALL`], used to address per-type counters.
    pub const fn index(self) -> usize {
        (self.code() - 11) as usize
    }

    pub const fn name(self) -> &'static str {
        use ChestType::*;
        match self {
            Bronze => "bronze",
            Silver => "silver",
            Gold => "gold",
            Rubies => "rubies",
            Vibranium => "vibranium",
        }
    }

    /// Lowercase letter for the undug chest, `a` for bronze through `e` for vibranium.
    pub const fn letter(self) -> char {
        (b'a' + self.index() as u8) as char
    }
}

impl TryFrom<u8> for ChestType {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self> {
        use ChestType::*;
        match code {
            11 => Ok(Bronze),
            12 => Ok(Silver),
            13 => Ok(Gold),
            14 => Ok(Rubies),
            15 => Ok(Vibranium),
            _ => Err(GameError::InvalidChestType(code)),
        }
    }
}

impl From<ChestType> for u8 {
    fn from(chest: ChestType) -> Self {
        chest.code()
    }
}

impl fmt::Display for ChestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

impl TryFrom<u8> for Orientation {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            _ => Err(GameError::InvalidOrientation(value)),
        }
    }
}

/// Request to put one chest on a board, anchored at its top-left cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestPlacement {
    pub origin: Coord2,
    pub chest: ChestType,
    pub orientation: Orientation,
}

impl ChestPlacement {
    pub const fn new(origin: Coord2, chest: ChestType, orientation: Orientation) -> Self {
        Self {
            origin,
            chest,
            orientation,
        }
    }

    /// Cells covered by the chest, or `None` if any of them falls outside `bounds`.
    pub fn span(&self, bounds: Coord2) -> Option<SmallVec<[Coord2; 5]>> {
        (0..self.chest.length())
            .map(|offset| step(self.origin, self.orientation, offset, bounds))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_follow_codes() {
        let lengths: SmallVec<[Coord; 5]> = ChestType::ALL.iter().map(|c| c.length()).collect();
        assert_eq!(lengths.as_slice(), &[5, 4, 3, 2, 1]);
        assert_eq!(ChestType::Bronze.index(), 0);
        assert_eq!(ChestType::Vibranium.index(), 4);
    }

    #[test]
    fn codes_outside_range_are_rejected() {
        assert_eq!(ChestType::try_from(13), Ok(ChestType::Gold));
        assert_eq!(ChestType::try_from(10), Err(GameError::InvalidChestType(10)));
        assert_eq!(ChestType::try_from(16), Err(GameError::InvalidChestType(16)));
        assert_eq!(Orientation::try_from(1), Ok(Orientation::Vertical));
        assert_eq!(Orientation::try_from(2), Err(GameError::InvalidOrientation(2)));
    }

    #[test]
    fn letters_run_a_to_e() {
        let letters: SmallVec<[char; 5]> = ChestType::ALL.iter().map(|c| c.letter()).collect();
        assert_eq!(letters.as_slice(), &['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn span_extends_right_or_down() {
        let horizontal = ChestPlacement::new((0, 0), ChestType::Gold, Orientation::Horizontal);
        assert_eq!(
            horizontal.span(BOARD_SIZE).unwrap().as_slice(),
            &[(0, 0), (0, 1), (0, 2)]
        );

        let vertical = ChestPlacement::new((7, 9), ChestType::Gold, Orientation::Vertical);
        assert_eq!(
            vertical.span(BOARD_SIZE).unwrap().as_slice(),
            &[(7, 9), (8, 9), (9, 9)]
        );
    }

    #[test]
    fn span_past_the_edge_is_none() {
        let placement = ChestPlacement::new((0, 7), ChestType::Bronze, Orientation::Horizontal);
        assert_eq!(placement.span(BOARD_SIZE), None);

        let placement = ChestPlacement::new((10, 0), ChestType::Vibranium, Orientation::Vertical);
        assert_eq!(placement.span(BOARD_SIZE), None);
    }
}
