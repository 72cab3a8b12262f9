//! Action list encoding.
//!
//! Each turn's answer is a single JSON array of `{"src","dest","amount"}`
//! objects, written on one line.

use crate::board::action::PlayerAction;

/// Formats actions as a compact JSON array.
pub fn format_actions(actions: &[PlayerAction]) -> Result<String, serde_json::Error> {
    serde_json::to_string(actions)
}

/// Parses a JSON array of actions.
pub fn parse_actions(s: &str) -> Result<Vec<PlayerAction>, serde_json::Error> {
    serde_json::from_str(s.trim())
}
