//! Wum+ world simulator.
//!
//! Owns the ground truth the agent never sees directly: hazard placement, percept generation,
//! scoring and win/loss detection, plus the [`Session`] that drives a player through a game.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod game;
pub mod map;
pub mod session;

pub use config::{ScoreTable, WorldConfig, MAX_SIZE, MIN_SIZE};
pub use error::{Result, WorldError};
pub use game::{Game, GameOutcome, LossReason};
pub use map::{Map, Tile};
pub use session::{Session, Turn};
