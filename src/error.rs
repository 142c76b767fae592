use std::path::PathBuf;

use thiserror::Error;

use crate::model::ConfigError;

/// Standard exit codes (BSD sysexits.h compatible)
pub mod exitcode {
    /// Successful termination
    pub const OK: i32 = 0;

    /// Command line usage error
    pub const USAGE: i32 = 64;

    /// No clipboard backend on the search path
    pub const UNAVAILABLE: i32 = 69;

    /// Backend ran but reported failure
    pub const SOFTWARE: i32 = 70;

    /// Input/output error
    pub const IOERR: i32 = 74;

    /// Configuration error
    pub const CONFIG: i32 = 78;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("invalid selection '{0}' (expected primary, p, clipboard or c)")]
    InvalidSelection(String),

    #[error("options -i and -o are mutually exclusive")]
    ConflictingModes,

    #[error("no mode given, use -i to copy or -o to paste (see -help)")]
    MissingMode,

    #[error("{0}")]
    Malformed(String),

    #[error("argument is not valid UTF-8: {0}")]
    NonUtf8(String),
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("no clipboard backend found (looked for: {})", .candidates.join(", "))]
    NotFound { candidates: Vec<String> },

    #[error("failed to launch '{}': {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write clipboard data to '{backend}': {source}")]
    Write {
        backend: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read clipboard data from '{backend}': {source}")]
    Read {
        backend: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{backend}' exited with {status}{}", format_stderr(.stderr))]
    Failed {
        backend: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("failed to write standard output: {0}")]
    Stdout(#[source] std::io::Error),
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Top-level error; every variant is terminal.
#[derive(Error, Debug)]
pub enum WrapperError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type WrapperResult<T> = Result<T, WrapperError>;

impl WrapperError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WrapperError::Parse(_) => exitcode::USAGE,
            WrapperError::Config(_) => exitcode::CONFIG,
            WrapperError::Backend(e) => match e {
                BackendError::NotFound { .. } => exitcode::UNAVAILABLE,
                BackendError::Failed { .. } => exitcode::SOFTWARE,
                BackendError::Launch { .. }
                | BackendError::Write { .. }
                | BackendError::Read { .. }
                | BackendError::Stdin(_)
                | BackendError::Stdout(_) => exitcode::IOERR,
            },
        }
    }
}
