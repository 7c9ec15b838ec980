//! Archive Module
//!
//! Persistence for the virtual filesystem: a single zip file is unpacked
//! into the path table on load and rewritten in full on save.

pub mod bridge;
pub mod codec;

use thiserror::Error;
use zip::result::ZipError;

use crate::fs::ErrorKind;

pub use bridge::{ArchiveBridge, LoadOptions};
pub use codec::{read_entries, write_entries, ArchiveEntry};

/// Archive errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("malformed archive: {reason}")]
    Malformed { reason: String },

    #[error("cannot encode archive: {reason}")]
    Write { reason: String },

    #[error("{operation} '{path}': {source}")]
    Io {
        path: String,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ArchiveError {
    pub(crate) fn malformed(err: ZipError) -> Self {
        ArchiveError::Malformed { reason: err.to_string() }
    }

    pub(crate) fn write(err: ZipError) -> Self {
        ArchiveError::Write { reason: err.to_string() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ArchiveError::Malformed { .. } => ErrorKind::MalformedArchive,
            ArchiveError::Write { .. } | ArchiveError::Io { .. } => ErrorKind::Io,
        }
    }
}
