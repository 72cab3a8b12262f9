//! Game state representation.
//!
//! Holds the read-only snapshot the decision engine works from: the agent's
//! player id, every base on the map, and the game configuration. A fresh
//! state is built for every turn and never mutated by the engine.

use super::base::{Base, BaseId, PlayerId};
use super::config::GameConfig;

/// Complete snapshot of one turn, seen from the agent's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The agent's own player id.
    pub player: PlayerId,
    /// All bases, owned or not, in snapshot order.
    pub bases: Vec<Base>,
    pub config: GameConfig,
}

impl GameState {
    pub fn new(player: PlayerId, bases: Vec<Base>, config: GameConfig) -> Self {
        GameState {
            player,
            bases,
            config,
        }
    }

    /// Iterates the agent's bases in snapshot order.
    pub fn own_bases(&self) -> impl Iterator<Item = &Base> + '_ {
        self.bases.iter().filter(move |b| b.is_owned_by(self.player))
    }

    /// Iterates bases owned by anyone but the agent, including neutral ones.
    pub fn foreign_bases(&self) -> impl Iterator<Item = &Base> + '_ {
        self.bases.iter().filter(move |b| !b.is_owned_by(self.player))
    }

    /// Finds a base by uid.
    pub fn base(&self, uid: BaseId) -> Option<&Base> {
        self.bases.iter().find(|b| b.uid == uid)
    }
}
