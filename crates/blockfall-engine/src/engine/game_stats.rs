/// Points for each cleared row.
const LINE_CLEAR_BONUS: usize = 50;
/// Points for finishing a drop manually.
const MANUAL_DROP_BONUS: usize = 10;

/// Score and lifetime counters for a game session.
///
/// The score belongs to the current round and is forfeited when the board
/// overflows; the counters are monotonic over the whole session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    pieces_locked: usize,
    rows_cleared: usize,
    rounds_restarted: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            pieces_locked: 0,
            rows_cleared: 0,
            rounds_restarted: 0,
        }
    }

    /// Score of the current round.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Pieces locked over the whole session.
    #[must_use]
    pub const fn pieces_locked(&self) -> usize {
        self.pieces_locked
    }

    /// Rows cleared over the whole session.
    #[must_use]
    pub const fn rows_cleared(&self) -> usize {
        self.rows_cleared
    }

    /// Times the board overflowed and the round restarted.
    #[must_use]
    pub const fn rounds_restarted(&self) -> usize {
        self.rounds_restarted
    }

    /// Records a locked piece and the rows it cleared.
    pub const fn record_lock(&mut self, cleared_rows: usize) {
        self.pieces_locked += 1;
        self.rows_cleared += cleared_rows;
        self.score += cleared_rows * LINE_CLEAR_BONUS;
    }

    /// Records the bonus for a manually finished drop.
    pub const fn record_manual_drop(&mut self) {
        self.score += MANUAL_DROP_BONUS;
    }

    /// Records a board overflow: the round's score is forfeited while the
    /// lifetime counters keep counting.
    pub const fn record_round_restart(&mut self) {
        self.rounds_restarted += 1;
        self.score = 0;
    }

    /// Wipes the score for a fresh round.
    pub const fn reset_score(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scoring() {
        let mut stats = GameStats::new();
        stats.record_lock(0);
        assert_eq!(stats.score(), 0);

        stats.record_lock(2);
        assert_eq!(stats.score(), 100);
        assert_eq!(stats.pieces_locked(), 2);
        assert_eq!(stats.rows_cleared(), 2);
    }

    #[test]
    fn test_manual_drop_bonus() {
        let mut stats = GameStats::new();
        stats.record_manual_drop();
        assert_eq!(stats.score(), 10);
        assert_eq!(stats.pieces_locked(), 0);
    }

    #[test]
    fn test_restart_forfeits_score_but_keeps_counters() {
        let mut stats = GameStats::new();
        stats.record_lock(1);
        stats.record_manual_drop();
        assert_eq!(stats.score(), 60);

        stats.record_round_restart();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.pieces_locked(), 1);
        assert_eq!(stats.rows_cleared(), 1);
        assert_eq!(stats.rounds_restarted(), 1);
    }
}
