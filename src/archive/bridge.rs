//! Archive bridge
//!
//! Moves the whole path table between a zip file on disk and a
//! [`VirtualFs`]. Both directions are whole-file: the archive is read
//! completely before the table is built, and saves rewrite every row.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::codec::{read_entries, write_entries, ArchiveEntry};
use super::ArchiveError;
use crate::fs::{Node, VirtualFs};

/// Options for loading an archive.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Start from an empty table when the archive file does not exist yet.
    pub create_if_missing: bool,
}

/// Connects one archive file to the filesystem it backs.
#[derive(Debug, Clone)]
pub struct ArchiveBridge {
    path: PathBuf,
}

impl ArchiveBridge {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open and load `path` in one step.
    pub fn open(
        path: impl Into<PathBuf>,
        options: &LoadOptions,
    ) -> Result<(Self, VirtualFs), ArchiveError> {
        let bridge = Self::new(path);
        let fs = bridge.load(options)?;
        Ok((bridge, fs))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the archive and build a fresh table from it.
    pub fn load(&self, options: &LoadOptions) -> Result<VirtualFs, ArchiveError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == IoErrorKind::NotFound && options.create_if_missing => {
                info!(path = %self.path.display(), "archive missing, starting empty");
                return Ok(VirtualFs::new());
            }
            Err(source) => {
                return Err(ArchiveError::Io {
                    path: self.path.display().to_string(),
                    operation: "read",
                    source,
                })
            }
        };

        let entries = read_entries(&bytes)?;
        let fs = fs_from_entries(&entries)?;
        info!(
            path = %self.path.display(),
            entries = entries.len(),
            rows = fs.len(),
            "archive loaded"
        );
        Ok(fs)
    }

    /// Rewrite the archive from the table.
    ///
    /// The bytes go to a sibling staging file first, which then replaces the
    /// archive, so a failed save leaves the previous archive intact.
    pub fn save(&self, fs: &VirtualFs) -> Result<(), ArchiveError> {
        let entries = entries_from_fs(fs);
        let bytes = write_entries(&entries)?;

        let staging = self.staging_path();
        debug!(path = %staging.display(), bytes = bytes.len(), "writing staging archive");
        if let Err(source) = std::fs::write(&staging, &bytes) {
            let _ = std::fs::remove_file(&staging);
            return Err(ArchiveError::Io {
                path: staging.display().to_string(),
                operation: "write",
                source,
            });
        }

        if let Err(source) = std::fs::rename(&staging, &self.path) {
            let _ = std::fs::remove_file(&staging);
            return Err(ArchiveError::Io {
                path: self.path.display().to_string(),
                operation: "rename",
                source,
            });
        }

        info!(path = %self.path.display(), rows = entries.len(), "archive saved");
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Build a table from archive rows. Any conflicting row rejects the whole archive.
pub fn fs_from_entries(entries: &[ArchiveEntry]) -> Result<VirtualFs, ArchiveError> {
    let mut fs = VirtualFs::new();
    for entry in entries {
        let node = if entry.is_directory {
            Node::Directory
        } else {
            Node::file(entry.content.clone().unwrap_or_default())
        };
        fs.load_entry(&entry.path, node)
            .map_err(|e| ArchiveError::Malformed {
                reason: format!("conflicting entry '{}': {}", entry.path, e),
            })?;
    }
    Ok(fs)
}

/// One archive row per table row; names lose their leading slash.
pub fn entries_from_fs(fs: &VirtualFs) -> Vec<ArchiveEntry> {
    fs.entries()
        .map(|(key, node)| {
            let name = key.trim_start_matches('/');
            match node {
                Node::Directory => ArchiveEntry::directory(name),
                Node::File { content } => ArchiveEntry::file(name, content.as_str()),
            }
        })
        .collect()
}
