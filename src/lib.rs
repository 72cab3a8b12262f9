//! Outpost engine library.
//!
//! Decides, for every base a bot controls, whether to spend population on
//! an upgrade or on taking over the nearest foreign base. Exposes the board
//! types, the cost model, target search, the decision pass, and the wire
//! protocol for use by integration tests and the binary entry point.

pub mod board;
pub mod decide;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod search;

pub use decide::{decide, decide_with, Decision, DecisionError, Outcome};
