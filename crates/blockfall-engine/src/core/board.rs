use std::fmt;

use arrayvec::ArrayVec;

use crate::core::{BOARD_COLS, BOARD_ROWS, FallingPiece, PieceKind, PiecePosition, Shape};

#[expect(clippy::cast_possible_truncation)]
pub(super) const PIECE_SPAWN_X: i16 = (BOARD_COLS / 2 - 1) as i16;
pub(super) const PIECE_SPAWN_Y: i16 = 0;

/// Content of a single board cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    /// A locked cell left behind by a piece of the given kind.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color class of the cell: `0` when empty, `1` through `7` for locked
    /// pieces in catalog order.
    #[must_use]
    pub const fn color_class(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(kind) => kind.color_class(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("."),
            Cell::Piece(kind) => write!(f, "{}", kind.color_class()),
        }
    }
}

/// One board row holding a cell per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRow {
    cells: [Cell; BOARD_COLS],
}

impl BoardRow {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; BOARD_COLS],
    };

    /// Whether every cell in the row is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_COLS] {
        &self.cells
    }
}

/// The playfield: a fixed grid of locked cells, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; BOARD_ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    /// Board width in cells.
    pub const COLS: usize = BOARD_COLS;
    /// Board height in cells.
    pub const ROWS: usize = BOARD_ROWS;

    pub const EMPTY: Self = Self {
        rows: [BoardRow::EMPTY; BOARD_ROWS],
    };

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &BoardRow> {
        self.rows.iter()
    }

    /// Cell at column `x`, row `y`.
    #[must_use]
    pub const fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y].cells[x]
    }

    /// Whether row `y` is completely occupied.
    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows[y].is_full()
    }

    /// Whether `shape` placed at `position` overlaps a wall, the floor, or
    /// a locked cell.
    ///
    /// Rows above the top edge count as empty, so a piece may overhang the
    /// top of the board without colliding.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn collides(&self, shape: Shape, position: PiecePosition) -> bool {
        for (dx, dy) in shape.occupied_offsets() {
            let x = position.x() + dx;
            let y = position.y() + dy;
            if x < 0 || x >= BOARD_COLS as i16 || y >= BOARD_ROWS as i16 {
                return true;
            }
            if y >= 0 && !self.rows[y as usize].cells[x as usize].is_empty() {
                return true;
            }
        }
        false
    }

    /// Fixes `piece` into the board, writing its color class into every
    /// cell it occupies. The piece must not collide.
    #[expect(clippy::cast_sign_loss)]
    pub fn merge(&mut self, piece: &FallingPiece) {
        debug_assert!(
            !self.collides(piece.shape(), piece.position()),
            "merged piece must not collide, position {:?}",
            piece.position(),
        );
        for (x, y) in piece.cells() {
            self.rows[y as usize].cells[x as usize] = Cell::Piece(piece.kind());
        }
    }

    /// Removes every full row, sliding the rows above each removed row
    /// down one step and leaving a fresh empty row at the top.
    ///
    /// The scan runs bottom-up and re-examines an index after a removal,
    /// so stacked full rows collapse in a single call. Returns the index
    /// each row occupied at the moment it was removed.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared = ArrayVec::new();
        let mut y = BOARD_ROWS;
        while y > 0 {
            y -= 1;
            if !self.rows[y].is_full() {
                continue;
            }
            cleared.push(y);
            // Drop row y, slide rows 0..y down into 1..=y, refill the top.
            // The same index is examined again since another full row may
            // have slid into it.
            self.rows[..=y].rotate_right(1);
            self.rows[0] = BoardRow::EMPTY;
            y += 1;
        }
        cleared
    }

    /// Wipes every cell back to empty.
    pub fn reset(&mut self) {
        self.rows.fill(BoardRow::EMPTY);
    }

    /// Builds a board from ASCII art: `.` is an empty cell and the digits
    /// `1` through `7` are locked cells with that color class. Expects
    /// exactly [`Board::ROWS`] rows of [`Board::COLS`] cells.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::EMPTY;
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(lines.len(), BOARD_ROWS, "expected {BOARD_ROWS} rows");
        for (y, line) in lines.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                BOARD_COLS,
                "row {y} must have exactly {BOARD_COLS} cells"
            );
            for (x, ch) in line.chars().enumerate() {
                board.rows[y].cells[x] = match ch {
                    '.' => Cell::Empty,
                    '1'..='7' => {
                        let class = u8::try_from(ch).unwrap() - b'0';
                        Cell::Piece(PieceKind::from_color_class(class).unwrap())
                    }
                    _ => panic!("invalid cell {ch:?} at ({x}, {y})"),
                };
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row.cells() {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_rows(count: usize) -> String {
        "..........\n".repeat(count)
    }

    #[test]
    fn test_collides_at_walls_and_floor() {
        let board = Board::EMPTY;
        let shape = PieceKind::O.shape();

        assert!(!board.collides(shape, PiecePosition::SPAWN));
        assert!(!board.collides(shape, PiecePosition::new(0, 0)));
        assert!(board.collides(shape, PiecePosition::new(-1, 0)));
        assert!(!board.collides(shape, PiecePosition::new(8, 0)));
        assert!(board.collides(shape, PiecePosition::new(9, 0)));
        assert!(!board.collides(shape, PiecePosition::new(4, 18)));
        assert!(board.collides(shape, PiecePosition::new(4, 19)));
    }

    #[test]
    fn test_rows_above_the_top_count_as_empty() {
        let art = format!("4444444444\n{}", empty_rows(19));
        let board = Board::from_ascii(&art);
        let shape = PieceKind::O.shape();

        // Wholly above the board: no collision even over locked cells.
        assert!(!board.collides(shape, PiecePosition::new(4, -2)));
        // Bottom half of the piece reaches row 0, which is occupied.
        assert!(board.collides(shape, PiecePosition::new(4, -1)));
    }

    #[test]
    fn test_collides_with_locked_cells() {
        let mut board = Board::EMPTY;
        board.merge(&FallingPiece::spawned(PieceKind::O).placed_at(PiecePosition::new(4, 18)));

        let shape = PieceKind::O.shape();
        assert!(board.collides(shape, PiecePosition::new(4, 17)));
        assert!(board.collides(shape, PiecePosition::new(3, 18)));
        assert!(!board.collides(shape, PiecePosition::new(2, 18)));
        assert!(!board.collides(shape, PiecePosition::new(6, 18)));
    }

    #[test]
    fn test_vertical_bar_reaches_left_wall_with_negative_origin() {
        let board = Board::EMPTY;
        let vertical = PieceKind::I.shape().rotated();

        // The bar occupies template column 1, so column 0 of the board
        // needs origin x = -1.
        assert!(!board.collides(vertical, PiecePosition::new(-1, 0)));
        assert!(board.collides(vertical, PiecePosition::new(-2, 0)));
    }

    #[test]
    fn test_merge_writes_color_classes() {
        let mut board = Board::EMPTY;
        let piece = FallingPiece::spawned(PieceKind::S).placed_at(PiecePosition::new(3, 17));
        board.merge(&piece);

        for (x, y) in piece.cells() {
            let cell = board.cell(usize::try_from(x).unwrap(), usize::try_from(y).unwrap());
            assert_eq!(cell, Cell::Piece(PieceKind::S));
            assert_eq!(cell.color_class(), 5);
        }
        assert!(board.cell(0, 0).is_empty());
    }

    #[test]
    fn test_is_row_full() {
        let art = format!("{}1111111111\n", empty_rows(19));
        let board = Board::from_ascii(&art);
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));
    }

    #[test]
    fn test_clear_single_full_line() {
        let art = format!("{}22........\n1111111111\n", empty_rows(18));
        let mut board = Board::from_ascii(&art);

        let cleared = board.clear_full_lines();
        assert_eq!(*cleared, [19]);

        let expected = format!("{}22........\n", empty_rows(19));
        assert_eq!(board, Board::from_ascii(&expected));
    }

    #[test]
    fn test_clear_adjacent_full_lines_collapse_together() {
        let art = format!("{}33........\n1111111111\n2222222222\n", empty_rows(17));
        let mut board = Board::from_ascii(&art);

        // The second full row slides into the cleared index and must be
        // caught by the re-examination, not skipped.
        let cleared = board.clear_full_lines();
        assert_eq!(cleared.len(), 2);

        let expected = format!("{}33........\n", empty_rows(19));
        assert_eq!(board, Board::from_ascii(&expected));
    }

    #[test]
    fn test_clear_separated_full_lines() {
        let art = format!(
            "{}1111111111\n44........\n1111111111\n..55......\n",
            empty_rows(16)
        );
        let mut board = Board::from_ascii(&art);

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.len(), 2);

        let expected = format!("{}44........\n..55......\n", empty_rows(18));
        assert_eq!(board, Board::from_ascii(&expected));
    }

    #[test]
    fn test_clear_entire_board() {
        let art = "7777777777\n".repeat(20);
        let mut board = Board::from_ascii(&art);

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.len(), 20);
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_reset_wipes_all_cells() {
        let mut board = Board::from_ascii(&"1234567123\n".repeat(20));
        board.reset();
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_display_round_trips_ascii() {
        let art = format!("{}6.6.6.6.6.\n7777777777\n", empty_rows(18));
        assert_eq!(Board::from_ascii(&art).to_string(), art);
    }
}
