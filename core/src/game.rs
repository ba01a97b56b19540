use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    User,
    Ai,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    PlacingUser { remaining: u8 },
    PlacingAi { remaining: u8 },
    Digging(Side),
    Finished { winner: Side },
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::PlacingUser {
            remaining: ChestType::COUNT as u8,
        }
    }
}

/// Upper bound on dig targets requested from the opponent in a single AI turn.
pub const MAX_DIG_ATTEMPTS: u32 = 1_000;

/// What happened during one round of digging.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub user_dig: DigOutcome,
    /// `None` when the user's dig already uncovered every chest on the AI board.
    pub ai_dig: Option<(Coord2, DigOutcome)>,
    pub phase: GamePhase,
}

/// Full state of one game: both boards, what each side has found on the other, and whose move it is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    user_board: Board,
    ai_board: Board,
    user_found: ProgressCounters,
    ai_found: ProgressCounters,
    phase: GamePhase,
}

impl Game {
    pub fn new() -> Self {
        Self {
            user_board: Board::new(),
            ai_board: Board::new(),
            user_found: ProgressCounters::new(),
            ai_found: ProgressCounters::new(),
            phase: GamePhase::default(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    /// Pieces the user has dug up on the AI board.
    pub fn user_found(&self) -> &ProgressCounters {
        &self.user_found
    }

    /// Pieces the AI has dug up on the user board.
    pub fn ai_found(&self) -> &ProgressCounters {
        &self.ai_found
    }

    /// Chest types the user still has to place, in code order.
    pub fn unplaced_user_chests(&self) -> SmallVec<[ChestType; 5]> {
        ChestType::ALL
            .into_iter()
            .filter(|&chest| !is_placed(&self.user_board, chest))
            .collect()
    }

    pub fn place_user_chest(&mut self, placement: &ChestPlacement) -> Result<()> {
        let GamePhase::PlacingUser { remaining } = self.phase else {
            return Err(self.phase_error());
        };

        let remaining = remaining
            .checked_sub(1)
            .filter(|&left| usize::from(left) < ChestType::COUNT)
            .ok_or(GameError::WrongPhase)?;
        if is_placed(&self.user_board, placement.chest) {
            return Err(GameError::ChestAlreadyPlaced(placement.chest));
        }
        try_place(&mut self.user_board, placement)?;

        self.phase = match remaining {
            0 => GamePhase::PlacingAi {
                remaining: ChestType::COUNT as u8,
            },
            remaining => GamePhase::PlacingUser { remaining },
        };
        log::debug!("user placed {}, now {:?}", placement.chest, self.phase);
        Ok(())
    }

    /// Lets `opponent` hide its next chest, largest first.
    pub fn place_ai_chest<O: Opponent + ?Sized>(
        &mut self,
        opponent: &mut O,
    ) -> Result<ChestPlacement> {
        let GamePhase::PlacingAi { remaining } = self.phase else {
            return Err(self.phase_error());
        };

        let chest = ChestType::COUNT
            .checked_sub(remaining.into())
            .and_then(|index| ChestType::ALL.get(index).copied())
            .ok_or(GameError::WrongPhase)?;
        let placement = opponent.place_chest(&mut self.ai_board, chest)?;

        self.phase = match remaining - 1 {
            0 => GamePhase::Digging(Side::User),
            remaining => GamePhase::PlacingAi { remaining },
        };
        log::debug!("ai placed {}, now {:?}", chest, self.phase);
        Ok(placement)
    }

    pub fn place_ai_chests<O: Opponent + ?Sized>(
        &mut self,
        opponent: &mut O,
    ) -> Result<SmallVec<[ChestPlacement; 5]>> {
        let mut placements = SmallVec::new();
        while let GamePhase::PlacingAi { .. } = self.phase {
            placements.push(self.place_ai_chest(opponent)?);
        }
        Ok(placements)
    }

    /// The user digs a cell on the AI board.
    ///
    /// On error the turn does not pass, so the caller can simply ask again.
    pub fn dig_user(&mut self, coords: Coord2) -> Result<DigOutcome> {
        self.check_phase(GamePhase::Digging(Side::User))?;

        let outcome = dig(&mut self.ai_board, &mut self.user_found, coords)?;
        log::debug!("user dug {:?}: {:?}", coords, outcome);

        // the AI only gets its dig while its own board still hides something
        if self.ai_board.is_fully_found() {
            self.finish();
        } else {
            self.phase = GamePhase::Digging(Side::Ai);
        }
        Ok(outcome)
    }

    /// The AI digs wherever `opponent` points on the user board.
    ///
    /// Off-board targets are thrown away and asked for again, up to [`MAX_DIG_ATTEMPTS`] times. If the opponent
    /// never comes up with a valid cell the turn stays with the AI, so calling this again resumes the round.
    pub fn dig_ai<O: Opponent + ?Sized>(
        &mut self,
        opponent: &mut O,
    ) -> Result<(Coord2, DigOutcome)> {
        self.check_phase(GamePhase::Digging(Side::Ai))?;

        let coords = (0..MAX_DIG_ATTEMPTS)
            .map(|_| opponent.pick_dig_target(&self.user_board))
            .find(|&coords| match self.user_board.validate_coords(coords) {
                Ok(_) => true,
                Err(_) => {
                    log::trace!("ai picked off-board target {:?}", coords);
                    false
                }
            })
            .ok_or_else(|| {
                log::warn!("Opponent gave no valid dig target in {} attempts", MAX_DIG_ATTEMPTS);
                GameError::OutOfBounds
            })?;
        let outcome = dig(&mut self.user_board, &mut self.ai_found, coords)?;
        log::debug!("ai dug {:?}: {:?}", coords, outcome);

        if self.user_board.is_fully_found() || self.ai_board.is_fully_found() {
            self.finish();
        } else {
            self.phase = GamePhase::Digging(Side::User);
        }
        Ok((coords, outcome))
    }

    /// One user dig followed by the AI's reply, if the AI still has chests left to defend.
    ///
    /// When the user's dig is rejected nothing changes. When only the AI's half fails, the user's dig stands and
    /// the phase stays at `Digging(Side::Ai)` for [`Game::dig_ai`] to finish the round.
    pub fn play_round<O: Opponent + ?Sized>(
        &mut self,
        coords: Coord2,
        opponent: &mut O,
    ) -> Result<RoundReport> {
        let user_dig = self.dig_user(coords)?;
        let ai_dig = match self.phase {
            GamePhase::Digging(Side::Ai) => Some(self.dig_ai(opponent)?),
            _ => None,
        };
        Ok(RoundReport {
            user_dig,
            ai_dig,
            phase: self.phase,
        })
    }

    fn finish(&mut self) {
        // user board is checked first, so the AI wins any tie
        let winner = if self.user_board.is_fully_found() {
            Side::Ai
        } else {
            Side::User
        };
        self.phase = GamePhase::Finished { winner };
        log::debug!("game finished, {:?} wins", winner);
    }

    fn check_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.phase_error())
        }
    }

    fn phase_error(&self) -> GameError {
        if self.phase.is_finished() {
            GameError::AlreadyEnded
        } else {
            GameError::WrongPhase
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn is_placed(board: &Board, chest: ChestType) -> bool {
    board.cells().any(|(_, cell)| cell.chest() == Some(chest))
}
