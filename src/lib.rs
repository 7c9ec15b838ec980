//! zip-shell - a shell over a virtual filesystem stored in one zip archive
//!
//! The archive is unpacked into an in-memory path table on load, mutated
//! through shell-like commands (`ls`, `cd`, `cat`, `mkdir`, `nano`, `mv`,
//! `tree`) and written back in full on `save` or `exit`.

pub mod archive;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod shell;

pub use archive::{ArchiveBridge, ArchiveEntry, ArchiveError, LoadOptions};
pub use commands::{Command, CommandOutput, CommandRegistry, CommandResult};
pub use config::{Config, ConfigError};
pub use error::{Error, ShellError};
pub use fs::{DirEntry, ErrorKind, FsError, Node, VirtualFs};
pub use shell::{ScriptReport, Shell, ShellOptions};
