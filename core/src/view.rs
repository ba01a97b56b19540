use core::fmt;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Only dig history is visible, for looking at the opponent's board.
    Fog,
    /// Chest layout and dig history, for looking at your own board.
    Reveal,
}

impl ViewMode {
    pub const fn glyph(self, cell: Cell) -> char {
        match (self, cell) {
            (_, Cell::Empty) => '-',
            (_, Cell::Dug) => 'X',
            (Self::Fog, Cell::Chest(_)) => '-',
            (Self::Fog, Cell::DugChest(_)) => '@',
            (Self::Reveal, Cell::Chest(chest)) => chest.letter(),
            (Self::Reveal, Cell::DugChest(chest)) => chest.letter().to_ascii_uppercase(),
        }
    }
}

/// Renders a board one row per line, each cell right-aligned in a five column field.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    mode: ViewMode,
}

impl<'a> BoardView<'a> {
    pub const fn new(board: &'a Board, mode: ViewMode) -> Self {
        Self { board, mode }
    }

    pub const fn fog(board: &'a Board) -> Self {
        Self::new(board, ViewMode::Fog)
    }

    pub const fn reveal(board: &'a Board) -> Self {
        Self::new(board, ViewMode::Reveal)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.rows() {
            for cell in row {
                write!(f, "{:>5}", self.mode.glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn sample_board() -> Board {
        let mut board = Board::new();
        let mut counters = ProgressCounters::new();
        try_place(
            &mut board,
            &ChestPlacement::new((0, 0), ChestType::Bronze, Orientation::Horizontal),
        )
        .unwrap();
        try_place(
            &mut board,
            &ChestPlacement::new((9, 9), ChestType::Vibranium, Orientation::Horizontal),
        )
        .unwrap();
        dig(&mut board, &mut counters, (0, 0)).unwrap();
        dig(&mut board, &mut counters, (0, 9)).unwrap();
        board
    }

    #[test]
    fn fog_hides_undug_chests() {
        let board = sample_board();

        assert_eq!(ViewMode::Fog.glyph(board[(0, 0)]), '@');
        assert_eq!(ViewMode::Fog.glyph(board[(0, 1)]), '-');
        assert_eq!(ViewMode::Fog.glyph(board[(0, 9)]), 'X');
        assert_eq!(ViewMode::Fog.glyph(board[(9, 9)]), '-');
    }

    #[test]
    fn reveal_shows_letters_by_dug_state() {
        assert_eq!(ViewMode::Reveal.glyph(Cell::Chest(ChestType::Bronze)), 'a');
        assert_eq!(ViewMode::Reveal.glyph(Cell::Chest(ChestType::Vibranium)), 'e');
        assert_eq!(ViewMode::Reveal.glyph(Cell::DugChest(ChestType::Silver)), 'B');
        assert_eq!(ViewMode::Reveal.glyph(Cell::DugChest(ChestType::Rubies)), 'D');
        assert_eq!(ViewMode::Reveal.glyph(Cell::Dug), 'X');
        assert_eq!(ViewMode::Reveal.glyph(Cell::Empty), '-');
    }

    #[test]
    fn rows_are_padded_to_five_columns() {
        let board = sample_board();

        let rendered = BoardView::reveal(&board).to_string();
        let mut lines = rendered.lines();

        assert_eq!(
            lines.next(),
            Some("    A    a    a    a    a    -    -    -    -    X")
        );
        assert_eq!(
            lines.nth(8),
            Some("    -    -    -    -    -    -    -    -    -    e")
        );
        assert_eq!(rendered.lines().count(), 10);
        assert!(rendered.ends_with('\n'));

        let fogged = BoardView::fog(&board).to_string();
        assert!(fogged.starts_with("    @    -    -    -    -    -    -    -    -    X\n"));
    }
}
