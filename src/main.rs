//! Outpost -- an upgrade-or-takeover bot engine.
//!
//! This binary reads commands and JSON game snapshots from stdin, one per
//! line, and answers every snapshot with one line of JSON actions on stdout.
//! Logs go to stderr; set `RUST_LOG` to adjust verbosity.

use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use outpost::engine::{Engine, EngineConfig, DEFAULT_THREADS};
use outpost::protocol::{parse_command, Command};

#[derive(Debug, Parser)]
#[command(author, version, about = "Upgrade-or-takeover decision engine")]
struct Cli {
    /// Worker threads for per-base evaluation (1 = sequential)
    #[arg(long, default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Fall back to the legacy level table when a snapshot has none
    #[arg(long)]
    legacy_levels: bool,

    /// Log every incoming snapshot and outgoing action to stderr
    #[arg(long)]
    trace_snapshots: bool,
}

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("outpost=info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    let mut engine = Engine::new(EngineConfig {
        threads: cli.threads.max(1),
        legacy_levels: cli.legacy_levels,
        trace_snapshots: cli.trace_snapshots,
    })
    .context("failed to start engine")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Snapshot(json) => {
                engine.handle_snapshot(&json, &mut out)?;
            }
            Command::IsReady => {
                engine.handle_isready(&mut out)?;
            }
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(&name, &value) {
                    tracing::warn!(error = %e, "setoption failed");
                }
            }
            Command::Quit => {
                break;
            }
        }
    }
    tracing::info!("engine stopped");
    Ok(())
}
