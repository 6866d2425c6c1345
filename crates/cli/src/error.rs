//! CLI failures and the process exit code each one maps to.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | argument parse error, reported by clap before `run` starts |
//! | 10   | the generator rejected the canvas or grid |
//! | 11   | the PNG could not be written |
//! | 12   | a color flag or `--params` JSON was malformed |
//! | 13   | JSON output could not be produced |

use grid_art_core::PatternError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Zero rows/cols, or a canvas whose buffer cannot be allocated.
    Pattern(PatternError),
    Io(String),
    /// Bad user input: a color that is not `#rrggbb`, or unparsable JSON.
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Pattern(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Pattern(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "cannot write snapshot: {msg}"),
            CliError::Input(msg) | CliError::Serialization(msg) => f.write_str(msg),
        }
    }
}

/// Color and I/O failures surface from the core as `PatternError` but are the
/// user's input or the filesystem, so they get their own exit codes.
impl From<PatternError> for CliError {
    fn from(e: PatternError) -> Self {
        match e {
            PatternError::Io(msg) => CliError::Io(msg),
            PatternError::InvalidColor(msg) => CliError::Input(format!("invalid color: {msg}")),
            other => CliError::Pattern(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
