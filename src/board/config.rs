//! Game-wide configuration carried in every snapshot.
//!
//! Holds travel-attrition parameters and the upgrade level table. The level
//! table is always injected from the snapshot; the legacy table below is only
//! used when the engine is explicitly told to fall back to it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::base::{Base, BaseId, BaseLevel};

/// Travel-attrition parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConfig {
    /// Distance that can be covered without losing population.
    pub grace_period: u32,
    /// Population lost per unit of distance beyond the grace period.
    pub death_rate: u32,
}

impl PathConfig {
    pub const fn new(grace_period: u32, death_rate: u32) -> Self {
        PathConfig {
            grace_period,
            death_rate,
        }
    }
}

/// Level table used by early game servers, indexed by level.
/// Entries are (max population, upgrade cost, spawn rate).
const LEGACY_LEVELS: [BaseLevel; 14] = [
    BaseLevel::new(20, 10, 1),
    BaseLevel::new(40, 20, 2),
    BaseLevel::new(80, 30, 3),
    BaseLevel::new(100, 40, 4),
    BaseLevel::new(200, 50, 5),
    BaseLevel::new(300, 100, 6),
    BaseLevel::new(400, 200, 7),
    BaseLevel::new(500, 400, 8),
    BaseLevel::new(600, 600, 9),
    BaseLevel::new(700, 800, 10),
    BaseLevel::new(800, 1000, 15),
    BaseLevel::new(900, 1500, 20),
    BaseLevel::new(1000, 2000, 25),
    BaseLevel::new(2000, 3000, 50),
];

/// A base refers to a level the table does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("base {base} is at level {level} but the level table has {available} entries")]
pub struct UnknownLevel {
    pub base: BaseId,
    pub level: usize,
    pub available: usize,
}

/// Path settings plus the ordered level table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub paths: PathConfig,
    #[serde(default)]
    pub base_levels: Vec<BaseLevel>,
}

impl GameConfig {
    pub fn new(paths: PathConfig, base_levels: Vec<BaseLevel>) -> Self {
        GameConfig { paths, base_levels }
    }

    /// Looks up the stats for `level`, or `None` if the table has no such entry.
    pub fn level(&self, level: usize) -> Option<&BaseLevel> {
        self.base_levels.get(level)
    }

    /// Looks up the stats for the level `base` is at.
    pub fn level_of(&self, base: &Base) -> Result<&BaseLevel, UnknownLevel> {
        self.level(base.level).ok_or(UnknownLevel {
            base: base.uid,
            level: base.level,
            available: self.base_levels.len(),
        })
    }

    /// Returns the level table hard-coded by the first bots, before servers
    /// reliably sent `baseLevels`.
    pub fn legacy_levels() -> Vec<BaseLevel> {
        LEGACY_LEVELS.to_vec()
    }
}
