//! Population cost model.
//!
//! Prices the two things a base can spend population on: the attrition of
//! sending units across the map, and the force needed to win a base once the
//! units arrive. Travel distance doubles as the number of elapsed rounds, so
//! enemy defenders are projected forward by that many rounds of growth.
//!
//! All arithmetic saturates at `u32::MAX`; a saturated cost is unaffordable.

use crate::board::base::Base;
use crate::board::config::{GameConfig, PathConfig, UnknownLevel};
use crate::board::position::{distance, Position};

/// Population lost while travelling from `source` to `destination`.
///
/// Distances within the grace period are free; every unit of distance beyond
/// it costs `death_rate` population.
pub fn travel_cost(source: Position, destination: Position, paths: &PathConfig) -> u32 {
    let d = distance(source, destination);
    if d <= paths.grace_period {
        return 0;
    }
    (d - paths.grace_period).saturating_mul(paths.death_rate)
}

/// Population `base` will hold after `rounds` rounds of passive growth.
pub fn projected_population(
    config: &GameConfig,
    base: &Base,
    rounds: u32,
) -> Result<u32, UnknownLevel> {
    let level = config.level_of(base)?;
    if base.population == level.max_population {
        return Ok(base.population);
    }
    let grown = base
        .population
        .saturating_add(rounds.saturating_mul(level.spawn_rate));
    Ok(grown.min(level.max_population))
}

/// Minimum population a base at `source` must send to take `destination`.
///
/// Neutral bases do not grow, so only their current population counts.
/// Enemy bases keep spawning while the attack is in transit. The extra unit
/// makes the attacker strictly outnumber the defenders on arrival.
pub fn takeover_cost(
    config: &GameConfig,
    source: Position,
    destination: &Base,
) -> Result<u32, UnknownLevel> {
    let travel = travel_cost(source, destination.position, &config.paths);
    let defenders = if destination.is_neutral() {
        destination.population
    } else {
        let rounds = distance(source, destination.position);
        projected_population(config, destination, rounds)?
    };
    Ok(defenders.saturating_add(travel).saturating_add(1))
}
