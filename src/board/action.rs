//! Actions proposed to the game server.

use serde::{Deserialize, Serialize};

use super::base::BaseId;

/// Sends `amount` population from `src` to `dest`.
///
/// When `src == dest` the population is spent on upgrading the base in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAction {
    pub src: BaseId,
    pub dest: BaseId,
    pub amount: u32,
}

impl PlayerAction {
    /// Spends `amount` on upgrading `base`.
    pub fn upgrade(base: BaseId, amount: u32) -> Self {
        PlayerAction {
            src: base,
            dest: base,
            amount,
        }
    }

    /// Sends `amount` from `src` to take over `dest`.
    pub fn takeover(src: BaseId, dest: BaseId, amount: u32) -> Self {
        PlayerAction { src, dest, amount }
    }

    /// Returns true if this action upgrades its source base.
    pub fn is_upgrade(&self) -> bool {
        self.src == self.dest
    }
}
