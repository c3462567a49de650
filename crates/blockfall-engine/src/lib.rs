//! Falling-block game engine: board and piece primitives plus the session
//! flow that drives them with elapsed time and player input.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
