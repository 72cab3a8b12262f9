//! Per-base decision making.
//!
//! Every owned base weighs two ways of spending population: upgrading
//! itself, or taking over the nearest base it does not own. The cheaper one
//! wins (ties go to the takeover), and the base acts only if it can afford
//! the winner. Bases are evaluated independently of each other, so the
//! orchestrator fans them out across rayon's pool and collects the results
//! in snapshot order.

use rayon::prelude::*;
use thiserror::Error;

use crate::board::action::PlayerAction;
use crate::board::base::{Base, BaseId};
use crate::board::config::UnknownLevel;
use crate::board::state::GameState;
use crate::eval::takeover_cost;
use crate::search::nearest_non_owned_base;

/// Errors that stop a single base from being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error(transparent)]
    UnknownLevel(#[from] UnknownLevel),
}

/// The option a base settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Spend `upgrade_cost` on upgrading in place.
    Upgrade,
    /// Send the whole population to the target.
    Takeover,
    /// The preferred option is not affordable yet.
    Wait,
}

/// Everything that went into one base's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub base: BaseId,
    pub target: BaseId,
    pub population: u32,
    pub upgrade_cost: u32,
    pub takeover_cost: u32,
    pub outcome: Outcome,
}

impl Decision {
    /// Returns the action this decision proposes, if any.
    ///
    /// Takeovers commit the base's entire population, not just the minimum.
    pub fn action(&self) -> Option<PlayerAction> {
        match self.outcome {
            Outcome::Upgrade => Some(PlayerAction::upgrade(self.base, self.upgrade_cost)),
            Outcome::Takeover => Some(PlayerAction::takeover(
                self.base,
                self.target,
                self.population,
            )),
            Outcome::Wait => None,
        }
    }
}

/// Weighs upgrade against takeover for one owned base.
///
/// Returns `Ok(None)` when there is nothing left to attack.
pub fn decide_for_base(state: &GameState, base: &Base) -> Result<Option<Decision>, DecisionError> {
    let Some(target) = nearest_non_owned_base(state, base) else {
        return Ok(None);
    };
    let level = state.config.level_of(base)?;

    // An upgrade already under way takes precedence over the nominal cost.
    let upgrade_cost = if base.units_until_upgrade != 0 {
        base.units_until_upgrade
    } else {
        level.upgrade_cost
    };
    let takeover_cost = takeover_cost(&state.config, base.position, target)?;

    let outcome = if upgrade_cost < takeover_cost {
        if base.population >= upgrade_cost {
            Outcome::Upgrade
        } else {
            Outcome::Wait
        }
    } else if base.population >= takeover_cost {
        Outcome::Takeover
    } else {
        Outcome::Wait
    };

    Ok(Some(Decision {
        base: base.uid,
        target: target.uid,
        population: base.population,
        upgrade_cost,
        takeover_cost,
        outcome,
    }))
}

/// Evaluates every owned base in parallel and returns each raw result,
/// paired with the base's uid, in snapshot order.
pub fn evaluate_bases(
    state: &GameState,
) -> Vec<(BaseId, Result<Option<Decision>, DecisionError>)> {
    let own: Vec<&Base> = state.own_bases().collect();
    own.par_iter()
        .map(|base| (base.uid, decide_for_base(state, base)))
        .collect()
}

/// Proposes actions for all of the agent's bases.
pub fn decide(state: &GameState) -> Vec<PlayerAction> {
    decide_with(state, |_| {})
}

/// Like [`decide`], but calls `observer` with every decision reached,
/// including the ones that resulted in waiting.
///
/// The observer may run on several worker threads at once.
pub fn decide_with<F>(state: &GameState, observer: F) -> Vec<PlayerAction>
where
    F: Fn(&Decision) + Sync,
{
    let own: Vec<&Base> = state.own_bases().collect();
    own.par_iter()
        .filter_map(|base| settle(base, decide_for_base(state, base), &observer))
        .collect()
}

/// Single-threaded [`decide`]. Produces exactly the same actions.
pub fn decide_sequential(state: &GameState) -> Vec<PlayerAction> {
    state
        .own_bases()
        .filter_map(|base| settle(base, decide_for_base(state, base), &|_: &Decision| {}))
        .collect()
}

/// Turns one base's result into its action, logging along the way.
/// A failed base yields no action and never affects the others.
fn settle<F>(
    base: &Base,
    result: Result<Option<Decision>, DecisionError>,
    observer: &F,
) -> Option<PlayerAction>
where
    F: Fn(&Decision),
{
    match result {
        Ok(Some(decision)) => {
            tracing::debug!(
                base = decision.base,
                target = decision.target,
                population = decision.population,
                upgrade_cost = decision.upgrade_cost,
                takeover_cost = decision.takeover_cost,
                outcome = ?decision.outcome,
                "decision"
            );
            observer(&decision);
            decision.action()
        }
        Ok(None) => {
            tracing::debug!(base = base.uid, "no target left");
            None
        }
        Err(e) => {
            tracing::warn!(base = base.uid, error = %e, "skipping base");
            None
        }
    }
}
