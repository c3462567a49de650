//! Core board and piece primitives.

pub use self::{board::*, piece::*};

pub(crate) mod board;
pub(crate) mod piece;

/// Board width in cells.
pub(crate) const BOARD_COLS: usize = 10;
/// Board height in cells.
pub(crate) const BOARD_ROWS: usize = 20;
