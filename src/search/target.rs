//! Nearest-target search.
//!
//! A base only ever considers the closest base it does not own. Enemy and
//! neutral bases are treated alike here; the cost model tells them apart.

use crate::board::base::Base;
use crate::board::state::GameState;

/// Returns the base closest to `source` that the agent does not own.
///
/// Equidistant candidates resolve to the first one in snapshot order.
/// Returns `None` when the agent owns every base.
pub fn nearest_non_owned_base<'a>(state: &'a GameState, source: &Base) -> Option<&'a Base> {
    let mut best: Option<(&Base, u32)> = None;
    for candidate in state.foreign_bases() {
        let d = source.position.distance_to(candidate.position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::base::{BaseId, PlayerId, NEUTRAL};
    use crate::board::config::GameConfig;
    use crate::board::position::Position;

    fn base(uid: BaseId, player: PlayerId, x: i32, y: i32, z: i32) -> Base {
        Base {
            uid,
            player,
            population: 0,
            level: 0,
            position: Position::new(x, y, z),
            units_until_upgrade: 0,
        }
    }

    fn state(bases: Vec<Base>) -> GameState {
        GameState::new(1, bases, GameConfig::default())
    }

    #[test]
    fn picks_the_closest_foreign_base() {
        let s = state(vec![
            base(1, 1, 0, 0, 0),
            base(2, 2, 10, 0, 0),
            base(3, NEUTRAL, 0, 4, 0),
            base(4, 3, 0, 0, -7),
        ]);
        let target = nearest_non_owned_base(&s, &s.bases[0]).unwrap();
        assert_eq!(target.uid, 3);
    }

    #[test]
    fn skips_own_bases_even_when_closer() {
        let s = state(vec![
            base(1, 1, 0, 0, 0),
            base(2, 1, 1, 0, 0),
            base(3, 2, 9, 0, 0),
        ]);
        let target = nearest_non_owned_base(&s, &s.bases[0]).unwrap();
        assert_eq!(target.uid, 3);
    }

    #[test]
    fn none_when_everything_is_owned() {
        let s = state(vec![base(1, 1, 0, 0, 0), base(2, 1, 5, 5, 5)]);
        assert!(nearest_non_owned_base(&s, &s.bases[0]).is_none());
    }

    #[test]
    fn ties_resolve_to_snapshot_order() {
        let s = state(vec![
            base(1, 1, 0, 0, 0),
            base(7, 2, 0, 5, 0),
            base(3, NEUTRAL, 3, 4, 0),
            base(5, 2, -5, 0, 0),
        ]);
        let target = nearest_non_owned_base(&s, &s.bases[0]).unwrap();
        assert_eq!(target.uid, 7);
    }

    #[test]
    fn ties_use_floored_distance() {
        // sqrt(26) and sqrt(25) both floor to 5
        let s = state(vec![
            base(1, 1, 0, 0, 0),
            base(2, 2, 1, 0, 5),
            base(3, 2, 0, 0, 5),
        ]);
        let target = nearest_non_owned_base(&s, &s.bases[0]).unwrap();
        assert_eq!(target.uid, 2);
    }
}
