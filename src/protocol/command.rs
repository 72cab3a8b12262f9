//! Line command parser.
//!
//! The engine reads one command per stdin line. A line starting with `{`
//! is a game snapshot; everything else is a keyword command.

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A JSON game snapshot to answer with actions.
    Snapshot(String),

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption <name> <value>`.
    SetOption { name: String, value: String },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines and unrecognized or malformed commands.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') {
        return Some(Command::Snapshot(trimmed.to_string()));
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "setoption" => parse_setoption(&tokens),
        other => {
            tracing::warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption <name> <value>`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        tracing::warn!("malformed setoption: expected 'setoption <name> <value>'");
        return None;
    }
    Some(Command::SetOption {
        name: tokens[1].to_string(),
        value: tokens[2].to_string(),
    })
}
