//! Snapshot decoding.
//!
//! The game server describes each turn as one JSON document with camelCase
//! keys. The agent's player id is nested under `game`, next to match
//! metadata the engine has no use for:
//!
//! ```json
//! {"game":{"player":1},
//!  "bases":[{"uid":1,"player":1,"population":50,"level":0,
//!            "unitsUntilUpgrade":0,"position":{"x":0,"y":0,"z":0}}],
//!  "config":{"paths":{"gracePeriod":5,"deathRate":2},
//!            "baseLevels":[{"maxPopulation":100,"upgradeCost":20,"spawnRate":10}]}}
//! ```
//!
//! Unknown keys are ignored so servers can add fields freely.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::base::{Base, BaseId, PlayerId};
use crate::board::config::GameConfig;
use crate::board::state::GameState;

/// Errors that can occur while decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate base uid {0}")]
    DuplicateBase(BaseId),
}

#[derive(Serialize, Deserialize)]
struct GameInfo {
    player: PlayerId,
}

#[derive(Deserialize)]
struct SnapshotIn {
    game: GameInfo,
    bases: Vec<Base>,
    config: GameConfig,
}

#[derive(Serialize)]
struct SnapshotOut<'a> {
    game: GameInfo,
    bases: &'a [Base],
    config: &'a GameConfig,
}

/// Decodes a snapshot into a [`GameState`].
pub fn parse_snapshot(s: &str) -> Result<GameState, SnapshotError> {
    let raw: SnapshotIn = serde_json::from_str(s)?;

    let mut seen = HashSet::with_capacity(raw.bases.len());
    for base in &raw.bases {
        if !seen.insert(base.uid) {
            return Err(SnapshotError::DuplicateBase(base.uid));
        }
    }

    Ok(GameState::new(raw.game.player, raw.bases, raw.config))
}

/// Encodes a [`GameState`] in the server's snapshot format.
pub fn encode_snapshot(state: &GameState) -> Result<String, SnapshotError> {
    let out = SnapshotOut {
        game: GameInfo {
            player: state.player,
        },
        bases: &state.bases,
        config: &state.config,
    };
    Ok(serde_json::to_string(&out)?)
}
