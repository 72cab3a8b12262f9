//! Cost evaluation.
//!
//! Prices travel, defender growth, and takeovers for a given source base
//! and target.

pub mod cost;

pub use cost::{projected_population, takeover_cost, travel_cost};
