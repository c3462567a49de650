use arrayvec::ArrayVec;

use crate::{
    core::{BOARD_ROWS, Board, FallingPiece},
    engine::PieceSampler,
};

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GravityOutcome {
    /// The piece moved down one row.
    Descended,
    /// The row below is blocked; the piece stayed put and is ready to be
    /// locked.
    Landed,
}

/// Whether locking a piece kept the round going or wiped the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RoundOutcome {
    /// The next piece spawned cleanly.
    Continued,
    /// The next piece could not spawn; the board was wiped and a fresh
    /// round started with that piece.
    Restarted,
}

/// What happened when a falling piece was locked into the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockReport {
    cleared_rows: ArrayVec<usize, BOARD_ROWS>,
    round: RoundOutcome,
}

impl LockReport {
    /// Index each cleared row occupied at the moment it was removed,
    /// bottom-up.
    #[must_use]
    pub fn cleared_rows(&self) -> &[usize] {
        &self.cleared_rows
    }

    #[must_use]
    pub const fn round_outcome(&self) -> RoundOutcome {
        self.round
    }
}

/// Board plus falling piece, with every mutation gated on a collision
/// check: a candidate that does not fit is discarded and the state keeps
/// its previous value.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    falling_piece: FallingPiece,
    sampler: PieceSampler,
}

impl GameState {
    /// Fresh state: empty board, first piece at the spawn position.
    #[must_use]
    pub fn new(sampler: PieceSampler) -> Self {
        Self::with_board(Board::EMPTY, sampler)
    }

    /// State over a prepared board. The first piece spawns without an
    /// overflow check; callers wanting one use
    /// [`spawn_falling_piece`](Self::spawn_falling_piece).
    #[must_use]
    pub fn with_board(board: Board, mut sampler: PieceSampler) -> Self {
        let falling_piece = FallingPiece::spawned(sampler.draw());
        Self {
            board,
            falling_piece,
            sampler,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn falling_piece(&self) -> &FallingPiece {
        &self.falling_piece
    }

    /// Replaces the falling piece when the replacement fits the board.
    pub fn set_falling_piece(&mut self, piece: FallingPiece) -> bool {
        self.commit_if_free(piece)
    }

    /// Moves the piece `dx` columns sideways when nothing is in the way.
    pub fn try_shift(&mut self, dx: i16) -> bool {
        self.commit_if_free(self.falling_piece.shifted(dx))
    }

    /// Rotates the piece a quarter turn counter-clockwise when the rotated
    /// shape fits. A blocked rotation leaves the current shape untouched.
    pub fn try_rotate(&mut self) -> bool {
        self.commit_if_free(self.falling_piece.rotated())
    }

    /// Advances the piece one row down, or reports that it landed when the
    /// row below is blocked.
    pub fn apply_gravity(&mut self) -> GravityOutcome {
        if self.commit_if_free(self.falling_piece.descended()) {
            GravityOutcome::Descended
        } else {
            GravityOutcome::Landed
        }
    }

    /// Fixes the falling piece into the board, clears the rows it filled,
    /// and spawns the next piece.
    pub fn lock_falling_piece(&mut self) -> LockReport {
        self.board.merge(&self.falling_piece);
        let cleared_rows = self.board.clear_full_lines();
        let round = self.spawn_falling_piece();
        LockReport {
            cleared_rows,
            round,
        }
    }

    /// Draws the next piece and places it at the spawn position. When the
    /// fresh piece immediately overlaps locked cells the board is wiped
    /// and the round restarts with that piece on the empty board.
    pub fn spawn_falling_piece(&mut self) -> RoundOutcome {
        self.falling_piece = FallingPiece::spawned(self.sampler.draw());
        if self
            .board
            .collides(self.falling_piece.shape(), self.falling_piece.position())
        {
            self.board.reset();
            return RoundOutcome::Restarted;
        }
        RoundOutcome::Continued
    }

    /// Wipes the board and spawns a fresh piece.
    pub fn reset(&mut self) {
        self.board.reset();
        self.spawn_falling_piece();
    }

    fn commit_if_free(&mut self, candidate: FallingPiece) -> bool {
        if self.board.collides(candidate.shape(), candidate.position()) {
            return false;
        }
        self.falling_piece = candidate;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{PieceKind, PiecePosition},
        engine::PieceSeed,
    };

    fn sampler(seed: u64) -> PieceSampler {
        PieceSampler::with_seed(PieceSeed::from(seed))
    }

    fn empty_rows(count: usize) -> String {
        "..........\n".repeat(count)
    }

    #[test]
    fn test_shift_is_blocked_at_the_wall() {
        let mut state = GameState::new(sampler(1));
        assert!(state.set_falling_piece(
            FallingPiece::spawned(PieceKind::O).placed_at(PiecePosition::new(0, 0))
        ));

        assert!(!state.try_shift(-1));
        assert_eq!(state.falling_piece().position(), PiecePosition::new(0, 0));

        assert!(state.try_shift(1));
        assert_eq!(state.falling_piece().position(), PiecePosition::new(1, 0));
    }

    #[test]
    fn test_blocked_rotation_keeps_the_shape() {
        let mut state = GameState::new(sampler(2));
        // A horizontal bar one row above the floor: the vertical candidate
        // would poke through the bottom edge.
        assert!(state.set_falling_piece(
            FallingPiece::spawned(PieceKind::I).placed_at(PiecePosition::new(0, 18))
        ));

        assert!(!state.try_rotate());
        assert_eq!(state.falling_piece().shape(), PieceKind::I.shape());
    }

    #[test]
    fn test_second_blocked_rotation_keeps_the_first() {
        let art = format!("{}1.........\n{}", empty_rows(18), empty_rows(1));
        let mut state = GameState::with_board(Board::from_ascii(&art), sampler(3));
        assert!(state.set_falling_piece(
            FallingPiece::spawned(PieceKind::I).placed_at(PiecePosition::new(0, 16))
        ));

        // First turn fits; the second would land on the locked cell at
        // (0, 18).
        assert!(state.try_rotate());
        let vertical = PieceKind::I.shape().rotated();
        assert_eq!(state.falling_piece().shape(), vertical);

        assert!(!state.try_rotate());
        assert_eq!(state.falling_piece().shape(), vertical);
    }

    #[test]
    fn test_gravity_descends_then_lands_on_the_floor() {
        let mut state = GameState::new(sampler(4));
        assert!(state.set_falling_piece(FallingPiece::spawned(PieceKind::O)));

        for _ in 0..18 {
            assert!(state.apply_gravity().is_descended());
        }
        assert!(state.apply_gravity().is_landed());
        assert_eq!(state.falling_piece().position(), PiecePosition::new(4, 18));

        let report = state.lock_falling_piece();
        assert!(report.cleared_rows().is_empty());
        assert!(report.round_outcome().is_continued());
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(state.board().cell(x, y).color_class(), 4);
        }
        assert_eq!(state.falling_piece().position(), PiecePosition::SPAWN);
    }

    #[test]
    fn test_wall_hugging_bar_clears_the_bottom_row() {
        let art = format!("{}.111111111\n", empty_rows(19));
        let mut state = GameState::with_board(Board::from_ascii(&art), sampler(5));
        let bar = FallingPiece::spawned(PieceKind::I)
            .rotated()
            .placed_at(PiecePosition::new(-1, 0));
        assert!(state.set_falling_piece(bar));

        while state.apply_gravity().is_descended() {}
        assert_eq!(state.falling_piece().position(), PiecePosition::new(-1, 16));

        let report = state.lock_falling_piece();
        assert_eq!(report.cleared_rows(), [19]);

        let expected = format!("{}1.........\n1.........\n1.........\n", empty_rows(17));
        assert_eq!(state.board().to_string(), expected);
    }

    #[test]
    fn test_spawn_overflow_wipes_the_board() {
        let art = format!("1111111111\n1111111111\n{}", empty_rows(18));
        let mut state = GameState::with_board(Board::from_ascii(&art), sampler(6));

        let outcome = state.spawn_falling_piece();
        assert!(outcome.is_restarted());
        assert_eq!(state.board(), &Board::EMPTY);
        assert_eq!(state.falling_piece().position(), PiecePosition::SPAWN);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut state = GameState::new(sampler(7));
        assert!(state.set_falling_piece(
            FallingPiece::spawned(PieceKind::O).placed_at(PiecePosition::new(0, 18))
        ));
        let report = state.lock_falling_piece();
        assert!(report.round_outcome().is_continued());

        state.reset();
        assert_eq!(state.board(), &Board::EMPTY);
        assert_eq!(state.falling_piece().position(), PiecePosition::SPAWN);
    }
}
