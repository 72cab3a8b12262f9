//! Board representation and game-state types.
//!
//! Contains the core data structures for positions, bases, level stats,
//! configuration, proposed actions, and the overall game state.

pub mod action;
pub mod base;
pub mod config;
pub mod position;
pub mod state;

pub use action::PlayerAction;
pub use base::{Base, BaseId, BaseLevel, PlayerId, NEUTRAL};
pub use config::{GameConfig, PathConfig, UnknownLevel};
pub use position::{distance, Position};
pub use state::GameState;
