//! Error types for the shell layer and the binary.

use thiserror::Error;

use crate::archive::ArchiveError;
use crate::config::ConfigError;
use crate::fs::{ErrorKind, FsError};

/// Errors a single command line can produce.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Command {verb} not found.")]
    UnknownCommand { verb: String },

    #[error("{verb}: expected {expected}, got {got} (usage: {usage})")]
    WrongArity {
        verb: String,
        expected: String,
        got: usize,
        usage: &'static str,
    },

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::UnknownCommand { .. } | ShellError::WrongArity { .. } => {
                ErrorKind::InvalidCommand
            }
            ShellError::Fs(e) => e.kind(),
            ShellError::Archive(e) => e.kind(),
        }
    }

    /// Process-style status code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::UnknownCommand { .. } => 127,
            ShellError::WrongArity { .. } => 2,
            ShellError::Fs(_) | ShellError::Archive(_) => 1,
        }
    }
}

/// Errors that stop the program before or outside command execution.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("cannot read script '{path}': {source}")]
    Script {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
