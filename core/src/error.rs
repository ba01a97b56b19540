use thiserror::Error;

use crate::ChestType;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Chest would overlap another chest")]
    Overlap,
    #[error("The {0} chest has already been placed")]
    ChestAlreadyPlaced(ChestType),
    #[error("Invalid chest type {0}, expected 11 to 15")]
    InvalidChestType(u8),
    #[error("Invalid orientation {0}, expected 0 or 1")]
    InvalidOrientation(u8),
    #[error("No room left on the board for the chest")]
    NoRoom,
    #[error("Action is not allowed in the current phase")]
    WrongPhase,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
