//! Wire formats.
//!
//! The line command parser, JSON decoding of the per-turn game snapshot,
//! and encoding of the action list the engine answers with.

pub mod actions;
pub mod command;
pub mod snapshot;

pub use actions::{format_actions, parse_actions};
pub use command::{parse_command, Command};
pub use snapshot::{encode_snapshot, parse_snapshot, SnapshotError};
