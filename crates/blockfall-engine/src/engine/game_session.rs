use std::time::Duration;

use crate::{
    core::{Board, FallingPiece},
    engine::{DropClock, GameState, GameStats, GravityOutcome, LockReport, PieceSampler},
};

/// Outcome of a descent step driven by the tick clock or a manual drop.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// Not enough time has accumulated for gravity to fire.
    Idle,
    /// The piece moved down one row.
    Descended,
    /// The piece landed and was locked into the board.
    Locked(LockReport),
}

/// A full game: state, score, and gravity clock, driven by elapsed time
/// and player input.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    stats: GameStats,
    clock: DropClock,
}

impl GameSession {
    /// Session with an entropy-seeded piece sequence.
    #[must_use]
    pub fn new(drop_interval: Duration) -> Self {
        Self::with_sampler(drop_interval, PieceSampler::new())
    }

    /// Session drawing pieces from `sampler`.
    #[must_use]
    pub fn with_sampler(drop_interval: Duration, sampler: PieceSampler) -> Self {
        Self {
            state: GameState::new(sampler),
            stats: GameStats::new(),
            clock: DropClock::new(drop_interval),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub const fn falling_piece(&self) -> &FallingPiece {
        self.state.falling_piece()
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Feeds `elapsed` wall-clock time into the gravity clock and performs
    /// one descent step when it fires.
    pub fn on_tick(&mut self, elapsed: Duration) -> StepOutcome {
        if !self.clock.advance(elapsed) {
            return StepOutcome::Idle;
        }
        match self.state.apply_gravity() {
            GravityOutcome::Descended => StepOutcome::Descended,
            GravityOutcome::Landed => StepOutcome::Locked(self.complete_lock()),
        }
    }

    /// Moves the piece one column left when nothing is in the way.
    pub fn move_left(&mut self) -> bool {
        self.state.try_shift(-1)
    }

    /// Moves the piece one column right when nothing is in the way.
    pub fn move_right(&mut self) -> bool {
        self.state.try_shift(1)
    }

    /// Rotates the piece a quarter turn counter-clockwise when the rotated
    /// shape fits.
    pub fn rotate(&mut self) -> bool {
        self.state.try_rotate()
    }

    /// Forces one descent step immediately. A drop finished manually earns
    /// a small bonus on top of any cleared rows, and the gravity clock
    /// starts a fresh interval either way.
    pub fn soft_drop(&mut self) -> StepOutcome {
        let outcome = match self.state.apply_gravity() {
            GravityOutcome::Descended => StepOutcome::Descended,
            GravityOutcome::Landed => {
                let report = self.complete_lock();
                self.stats.record_manual_drop();
                StepOutcome::Locked(report)
            }
        };
        self.clock.reset();
        outcome
    }

    /// Abandons the current round: fresh board, fresh piece, score wiped,
    /// gravity clock drained. The lifetime counters keep their values.
    pub fn restart(&mut self) {
        self.state.reset();
        self.stats.reset_score();
        self.clock.reset();
    }

    fn complete_lock(&mut self) -> LockReport {
        let report = self.state.lock_falling_piece();
        self.stats.record_lock(report.cleared_rows().len());
        if report.round_outcome().is_restarted() {
            self.stats.record_round_restart();
        }
        report
    }
}
