//! Game flow built on top of the core types.
//!
//! - [`GameSession`] - the surface the outside world drives: elapsed time
//!   and key presses in, tagged outcomes out
//! - [`GameState`] - board plus falling piece with collision-gated moves
//! - [`DropClock`] - gravity accumulator
//! - [`GameStats`] - round score and lifetime counters
//! - [`PieceSampler`] - seeded uniform piece source
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_engine::{GameSession, PieceSampler, PieceSeed};
//!
//! let sampler = PieceSampler::with_seed(PieceSeed::from(7));
//! let mut session = GameSession::with_sampler(Duration::from_millis(1000), sampler);
//!
//! session.move_left();
//! session.rotate();
//!
//! // Gravity fires once strictly more than one interval has accumulated.
//! assert!(session.on_tick(Duration::from_millis(1000)).is_idle());
//! assert!(session.on_tick(Duration::from_millis(1)).is_descended());
//! ```

pub use self::{drop_clock::*, game_session::*, game_state::*, game_stats::*, piece_sampler::*};

mod drop_clock;
mod game_session;
mod game_state;
mod game_stats;
mod piece_sampler;
