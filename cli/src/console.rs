use anyhow::{Context, bail};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use treasure_hunt_core::*;

const CHEST_PROMPT: &str = "What type of chest do you want to place? Enter '11' for bronze, '12' for silver, \
                            '13' for gold, '14' for rubies, and '15' for vibranium: ";
const ORIENTATION_PROMPT: &str =
    "Do you want to place the chest horizontally or vertically? Enter 0 for horizontal, 1 for vertical: ";
const INVALID_DIG: &str = "The value you input is invalid! Try Again!";

/// Terminal front end: prompts for placements and digs, retrying until the input makes sense.
///
/// Input is read as whitespace separated tokens, so a dig may be typed as `3 4` or across two lines. After a
/// rejected token whatever else was typed on that line is dropped.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    reveal_ai: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            reveal_ai: false,
        }
    }

    pub fn reveal_ai(mut self, reveal_ai: bool) -> Self {
        self.reveal_ai = reveal_ai;
        self
    }

    /// Plays `game` from placement through to the final dig and announces the winner.
    ///
    /// Fails when input runs out, or when `opponent` cannot come up with a dig target on the user board.
    pub fn run<O: Opponent>(
        &mut self,
        game: &mut Game,
        opponent: &mut O,
    ) -> anyhow::Result<Side> {
        self.place_user_chests(game)?;
        self.place_ai_chests(game, opponent)?;

        loop {
            match game.phase() {
                GamePhase::Digging(Side::User) => self.user_turn(game)?,
                GamePhase::Digging(Side::Ai) => {
                    let (coords, outcome) = game
                        .dig_ai(opponent)
                        .context("opponent could not pick a dig target")?;
                    log::trace!("ai dug {:?}", coords);
                    self.announce_completion(outcome)?;
                }
                GamePhase::Finished { winner } => {
                    match winner {
                        Side::Ai => writeln!(self.output, "All treasures found! AI wins!")?,
                        Side::User => writeln!(self.output, "All treasures found! User wins!")?,
                    }
                    return Ok(winner);
                }
                phase => bail!("cannot dig while the game is in {:?}", phase),
            }
        }
    }

    fn user_turn(&mut self, game: &mut Game) -> anyhow::Result<()> {
        let coords = self.prompt_dig(game)?;
        let outcome = match game.dig_user(coords) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("dig at {:?} rejected: {}", coords, err);
                self.pending.clear();
                writeln!(self.output, "{}", INVALID_DIG)?;
                return Ok(());
            }
        };

        if outcome == DigOutcome::AlreadyDug {
            writeln!(self.output, "You've already dug here!")?;
        }
        self.announce_completion(outcome)
    }

    fn place_user_chests(&mut self, game: &mut Game) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "\n____________________Placing Chests (User) ____________________"
        )?;

        while let GamePhase::PlacingUser { remaining } = game.phase() {
            writeln!(self.output, "You have {} chests to place!\n", remaining)?;
            write!(self.output, "{}", BoardView::reveal(game.user_board()))?;

            loop {
                let left = game
                    .unplaced_user_chests()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(self.output, "\nChests left to place: {}", left)?;

                let placement = self.prompt_placement()?;
                match game.place_user_chest(&placement) {
                    Ok(()) => {
                        writeln!(self.output, "Chest placed successfully!")?;
                        break;
                    }
                    Err(err) => {
                        self.pending.clear();
                        writeln!(
                            self.output,
                            "Failed to place chest: {}. Check to see if you have entered valid values!",
                            err
                        )?
                    }
                }
            }
        }
        Ok(())
    }

    fn place_ai_chests<O: Opponent>(
        &mut self,
        game: &mut Game,
        opponent: &mut O,
    ) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "\n____________________Placing Chests (AI) ____________________"
        )?;

        for placement in game.place_ai_chests(opponent)? {
            log::trace!("ai placement: {:?}", placement);
            writeln!(self.output, "Chest placed successfully!")?;
        }
        Ok(())
    }

    fn prompt_placement(&mut self) -> anyhow::Result<ChestPlacement> {
        write!(self.output, "{}", CHEST_PROMPT)?;
        let chest = self.prompt_until(
            CHEST_PROMPT,
            "Your input is invalid! You should enter a positive integer between 11 and 15! Try again!",
            |token| ChestType::try_from(token.parse::<u8>().ok()?).ok(),
        )?;
        write!(self.output, "{}", ORIENTATION_PROMPT)?;
        let orientation = self.prompt_until(
            ORIENTATION_PROMPT,
            "Your input is invalid! You should enter a positive integer between 0 and 1! Try again!",
            |token| Orientation::try_from(token.parse::<u8>().ok()?).ok(),
        )?;
        let row = self.prompt_coord("Which row do you want to place the chest? ")?;
        let col = self.prompt_coord("Which column do you want to place the chest? ")?;

        Ok(ChestPlacement::new((row, col), chest, orientation))
    }

    fn prompt_coord(&mut self, prompt: &str) -> anyhow::Result<Coord> {
        write!(self.output, "{}", prompt)?;
        self.prompt_until(
            prompt,
            "Your input is invalid! You should enter a positive integer! Try again!",
            parse_number,
        )
    }

    fn prompt_dig(&mut self, game: &Game) -> anyhow::Result<Coord2> {
        loop {
            self.show_boards(game)?;
            write!(self.output, "Please choose a row and a column location to dig: ")?;
            self.output.flush()?;

            let row = parse_number::<Coord>(&self.next_token()?);
            let col = match row {
                Some(_) => parse_number::<Coord>(&self.next_token()?),
                None => None,
            };
            match row.zip(col) {
                Some(coords) => return Ok(coords),
                None => {
                    self.pending.clear();
                    writeln!(self.output, "{}", INVALID_DIG)?;
                }
            }
        }
    }

    fn show_boards(&mut self, game: &Game) -> anyhow::Result<()> {
        let ai_view = if self.reveal_ai {
            BoardView::reveal(game.ai_board())
        } else {
            BoardView::fog(game.ai_board())
        };
        write!(
            self.output,
            "\n____________________User Board____________________\n{}\
             \n_____________________AI Board_____________________\n{}",
            BoardView::reveal(game.user_board()),
            ai_view
        )?;
        Ok(())
    }

    fn announce_completion(&mut self, outcome: DigOutcome) -> anyhow::Result<()> {
        if let Some(found) = outcome.completed() {
            writeln!(
                self.output,
                "All parts of a {}-sized chest have been dug up!",
                found.length
            )?;
        }
        Ok(())
    }

    /// Reads tokens until `parse` accepts one, repeating `prompt` after every rejection.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> anyhow::Result<T> {
        loop {
            self.output.flush()?;
            let token = self.next_token()?;
            if let Some(value) = parse(&token) {
                writeln!(self.output)?;
                return Ok(value);
            }
            self.pending.clear();
            writeln!(self.output, "{}\n", invalid)?;
            write!(self.output, "{}", prompt)?;
        }
    }

    /// Next whitespace separated token, reading more lines as needed. Blank lines are skipped.
    fn next_token(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before the game finished");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}
