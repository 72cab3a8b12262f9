//! Engine state management.
//!
//! Holds the engine options and the worker pool, and answers each snapshot
//! with exactly one line of actions. With a single thread the decision pass
//! runs sequentially; otherwise bases are fanned out across the pool.

use std::io::Write;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;

use crate::board::action::PlayerAction;
use crate::board::config::GameConfig;
use crate::board::state::GameState;
use crate::decide::{decide, decide_sequential};
use crate::protocol::actions::format_actions;
use crate::protocol::snapshot::parse_snapshot;

/// Default number of worker threads.
pub const DEFAULT_THREADS: usize = 4;

/// Errors raised by the engine itself, as opposed to a single base.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),

    #[error("failed to encode actions: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOption { name: String, value: String },
}

/// Tunable engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker threads for the per-base fan-out. 1 disables the pool.
    pub threads: usize,
    /// Use the legacy level table when a snapshot carries none.
    pub legacy_levels: bool,
    /// Log every incoming snapshot and outgoing action at info level.
    pub trace_snapshots: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            threads: DEFAULT_THREADS,
            legacy_levels: false,
            trace_snapshots: false,
        }
    }
}

/// Answers snapshots with actions.
pub struct Engine {
    config: EngineConfig,
    pool: Option<ThreadPool>,
}

impl Engine {
    /// Creates an engine, spawning a worker pool when `threads > 1`.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let pool = build_pool(config.threads)?;
        tracing::info!(
            threads = config.threads,
            legacy_levels = config.legacy_levels,
            "engine ready"
        );
        Ok(Engine { config, pool })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sets an engine option by name.
    ///
    /// Recognized options: `threads` (positive integer), `legacy_levels`
    /// and `trace_snapshots` (`true` / `false`).
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        let invalid = || EngineError::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "threads" => {
                let threads: usize = value.parse().map_err(|_| invalid())?;
                if threads == 0 {
                    return Err(invalid());
                }
                self.pool = build_pool(threads)?;
                self.config.threads = threads;
            }
            "legacy_levels" => {
                self.config.legacy_levels = value.parse().map_err(|_| invalid())?;
            }
            "trace_snapshots" => {
                self.config.trace_snapshots = value.parse().map_err(|_| invalid())?;
            }
            other => return Err(EngineError::UnknownOption(other.to_string())),
        }
        tracing::debug!(name, value, "option set");
        Ok(())
    }

    /// Proposes actions for one snapshot.
    pub fn decide(&self, mut state: GameState) -> Vec<PlayerAction> {
        if self.config.legacy_levels && state.config.base_levels.is_empty() {
            tracing::debug!("snapshot has no level table, using legacy levels");
            state.config.base_levels = GameConfig::legacy_levels();
        }
        match &self.pool {
            Some(pool) => pool.install(|| decide(&state)),
            None => decide_sequential(&state),
        }
    }

    /// Decodes a snapshot line and writes the action line for it.
    ///
    /// A snapshot that cannot be decoded is answered with an empty action
    /// list so the caller's turn loop never stalls.
    pub fn handle_snapshot<W: Write>(&self, line: &str, out: &mut W) -> Result<(), EngineError> {
        if self.config.trace_snapshots {
            tracing::info!(snapshot = %line, "received snapshot");
        }
        let actions = match parse_snapshot(line) {
            Ok(state) => self.decide(state),
            Err(e) => {
                tracing::error!(error = %e, "rejecting snapshot");
                Vec::new()
            }
        };
        let encoded = format_actions(&actions)?;
        if self.config.trace_snapshots {
            for action in &actions {
                tracing::info!(
                    src = action.src,
                    dest = action.dest,
                    amount = action.amount,
                    upgrade = action.is_upgrade(),
                    "sending action"
                );
            }
            tracing::info!(actions = %encoded, "sending actions");
        } else {
            tracing::debug!(count = actions.len(), "sending actions");
        }
        writeln!(out, "{}", encoded)?;
        out.flush()?;
        Ok(())
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        writeln!(out, "readyok")?;
        out.flush()?;
        Ok(())
    }
}

fn build_pool(threads: usize) -> Result<Option<ThreadPool>, ThreadPoolBuildError> {
    if threads <= 1 {
        return Ok(None);
    }
    ThreadPoolBuilder::new().num_threads(threads).build().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::actions::parse_actions;

    const SNAPSHOT: &str = r#"{"game":{"player":1},"bases":[{"uid":1,"player":1,"population":50,"level":0,"unitsUntilUpgrade":0,"position":{"x":0,"y":0,"z":0}},{"uid":2,"player":2,"population":10,"level":0,"unitsUntilUpgrade":0,"position":{"x":3,"y":4,"z":0}}],"config":{"paths":{"gracePeriod":5,"deathRate":2},"baseLevels":[{"maxPopulation":100,"upgradeCost":20,"spawnRate":10}]}}"#;

    const NO_LEVELS: &str = r#"{"game":{"player":1},"bases":[{"uid":1,"player":1,"population":50,"level":0,"position":{"x":0,"y":0,"z":0}},{"uid":2,"player":0,"population":30,"level":0,"position":{"x":3,"y":4,"z":0}}],"config":{"paths":{"gracePeriod":5,"deathRate":2}}}"#;

    fn engine(threads: usize) -> Engine {
        Engine::new(EngineConfig {
            threads,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    fn answer(engine: &Engine, line: &str) -> Vec<PlayerAction> {
        let mut out = Vec::new();
        engine.handle_snapshot(line, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        parse_actions(&text).unwrap()
    }

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.threads, 4);
        assert!(!config.legacy_levels);
        assert!(!config.trace_snapshots);
    }

    #[test]
    fn snapshot_gets_one_action_line() {
        for threads in [1, 3] {
            let actions = answer(&engine(threads), SNAPSHOT);
            assert_eq!(actions, vec![PlayerAction::upgrade(1, 20)]);
        }
    }

    #[test]
    fn bad_snapshot_gets_empty_line() {
        let actions = answer(&engine(1), "{not json");
        assert!(actions.is_empty());
    }

    #[test]
    fn missing_levels_skip_bases_by_default() {
        assert!(answer(&engine(1), NO_LEVELS).is_empty());
    }

    #[test]
    fn legacy_levels_fill_missing_table() {
        let mut e = engine(1);
        e.set_option("legacy_levels", "true").unwrap();
        // legacy level 0 upgrades for 10; neutral takeover costs 31
        assert_eq!(answer(&e, NO_LEVELS), vec![PlayerAction::upgrade(1, 10)]);
    }

    #[test]
    fn legacy_levels_do_not_override_snapshot_table() {
        let mut e = engine(1);
        e.set_option("legacy_levels", "true").unwrap();
        assert_eq!(answer(&e, SNAPSHOT), vec![PlayerAction::upgrade(1, 20)]);
    }

    #[test]
    fn set_threads_rebuilds_pool() {
        let mut e = engine(1);
        assert!(e.pool.is_none());
        e.set_option("threads", "2").unwrap();
        assert!(e.pool.is_some());
        assert_eq!(e.config().threads, 2);
        e.set_option("threads", "1").unwrap();
        assert!(e.pool.is_none());
    }

    #[test]
    fn set_option_rejects_bad_input() {
        let mut e = engine(1);
        assert!(matches!(
            e.set_option("threads", "0"),
            Err(EngineError::InvalidOption { .. })
        ));
        assert!(matches!(
            e.set_option("threads", "many"),
            Err(EngineError::InvalidOption { .. })
        ));
        assert!(matches!(
            e.set_option("legacy_levels", "yes"),
            Err(EngineError::InvalidOption { .. })
        ));
        assert!(matches!(
            e.set_option("Strength", "100"),
            Err(EngineError::UnknownOption(_))
        ));
        assert_eq!(e.config(), &EngineConfig { threads: 1, ..EngineConfig::default() });
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let e = engine(1);
        let mut output = Vec::new();
        e.handle_isready(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().trim(), "readyok");
    }
}
