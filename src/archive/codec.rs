// src/archive/codec.rs

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::ArchiveError;

/// Upper bound on the buffer reserved up front from an entry's declared size.
const MAX_PREALLOC: u64 = 1 << 20;

/// One row of a zip archive as the shell sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Forward-slash path as stored in the archive. Directories end in `/`.
    pub path: String,
    pub is_directory: bool,
    /// Decoded text of a file entry; `None` for directories.
    pub content: Option<String>,
}

impl ArchiveEntry {
    pub fn file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
            content: Some(content.into()),
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        Self {
            path,
            is_directory: true,
            content: None,
        }
    }
}

/// Parse zip bytes into entries, in archive order.
///
/// File content that is not valid UTF-8 is decoded lossily.
pub fn read_entries(data: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(ArchiveError::malformed)?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(ArchiveError::malformed)?;
        let path = file.name().replace('\\', "/");

        if file.is_dir() {
            entries.push(ArchiveEntry::directory(path));
            continue;
        }

        // The declared size is untrusted; let read_to_end grow past the hint.
        let mut buf = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
        file.read_to_end(&mut buf)
            .map_err(|e| ArchiveError::Malformed {
                reason: format!("failed to read '{}': {}", path, e),
            })?;
        entries.push(ArchiveEntry {
            path,
            is_directory: false,
            content: Some(String::from_utf8_lossy(&buf).into_owned()),
        });
    }

    Ok(entries)
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Build zip bytes from entries.
///
/// Directories become zero-length `name/` entries; files are deflated.
pub fn write_entries<'a>(
    entries: impl IntoIterator<Item = &'a ArchiveEntry>,
) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries {
        if entry.is_directory {
            writer
                .add_directory(entry.path.trim_end_matches('/'), file_options())
                .map_err(ArchiveError::write)?;
        } else {
            writer
                .start_file(entry.path.as_str(), file_options())
                .map_err(ArchiveError::write)?;
            let content = entry.content.as_deref().unwrap_or_default();
            writer.write_all(content.as_bytes()).map_err(|e| ArchiveError::Write {
                reason: e.to_string(),
            })?;
        }
    }

    let cursor = writer.finish().map_err(ArchiveError::write)?;
    Ok(cursor.into_inner())
}
