//! File System Types
//!
//! Core types for the virtual file system.

use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("EINVAL: invalid argument, {operation} '{path}'")]
    InvalidArgument { path: String, operation: String },
}

/// Broad error classes shared by every layer of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    IsADirectory,
    NotADirectory,
    InvalidArgument,
    MalformedArchive,
    InvalidCommand,
    Io,
}

impl FsError {
    pub(crate) fn not_found(path: &str, operation: &str) -> Self {
        FsError::NotFound { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn already_exists(path: &str, operation: &str) -> Self {
        FsError::AlreadyExists { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn is_directory(path: &str, operation: &str) -> Self {
        FsError::IsDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn not_directory(path: &str, operation: &str) -> Self {
        FsError::NotDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn invalid_argument(path: &str, operation: &str) -> Self {
        FsError::InvalidArgument { path: path.to_string(), operation: operation.to_string() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FsError::NotFound { .. } => ErrorKind::NotFound,
            FsError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            FsError::IsDirectory { .. } => ErrorKind::IsADirectory,
            FsError::NotDirectory { .. } => ErrorKind::NotADirectory,
            FsError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// The path the failing operation was asked about.
    pub fn path(&self) -> &str {
        match self {
            FsError::NotFound { path, .. }
            | FsError::AlreadyExists { path, .. }
            | FsError::IsDirectory { path, .. }
            | FsError::NotDirectory { path, .. }
            | FsError::InvalidArgument { path, .. } => path,
        }
    }
}

/// A row of the path table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { content: String },
    Directory,
}

impl Node {
    pub fn file(content: impl Into<String>) -> Self {
        Node::File { content: content.into() }
    }

    /// Check if entry is a file
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Check if entry is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory)
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory => None,
        }
    }
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
}

impl DirEntry {
    /// Name as shown by `ls`: directories carry a trailing slash.
    pub fn display_name(&self) -> String {
        if self.is_directory {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}
