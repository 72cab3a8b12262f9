//! Bases and their per-level stats.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Identifies a player. [`NEUTRAL`] marks unowned bases.
pub type PlayerId = u32;

/// Unique identifier of a base within one snapshot.
pub type BaseId = u32;

/// Owner id reserved for unowned bases.
pub const NEUTRAL: PlayerId = 0;

/// A controllable point in the game world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base {
    pub uid: BaseId,
    pub player: PlayerId,
    pub population: u32,
    /// Index into [`GameConfig::base_levels`](super::config::GameConfig).
    pub level: usize,
    pub position: Position,
    /// Population still needed to finish the upgrade in progress.
    /// Zero means the level's nominal `upgrade_cost` applies.
    #[serde(default)]
    pub units_until_upgrade: u32,
}

impl Base {
    /// Returns true if nobody owns this base.
    pub fn is_neutral(&self) -> bool {
        self.player == NEUTRAL
    }

    /// Returns true if `player` owns this base.
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.player == player
    }
}

/// Static stats of one upgrade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseLevel {
    /// Population cap reached by passive growth.
    pub max_population: u32,
    /// Population required to advance to the next level.
    pub upgrade_cost: u32,
    /// Passive growth per round for bases the agent does not own.
    pub spawn_rate: u32,
}

impl BaseLevel {
    pub const fn new(max_population: u32, upgrade_cost: u32, spawn_rate: u32) -> Self {
        BaseLevel {
            max_population,
            upgrade_cost,
            spawn_rate,
        }
    }
}
