//! File System Module
//!
//! The virtual filesystem behind the shell: a flat path table with a
//! cursor, the path model it is keyed by, and the tree renderer.

pub mod path;
pub mod tree;
pub mod types;
pub mod virtual_fs;

pub use tree::TreeLines;
pub use types::*;
pub use virtual_fs::VirtualFs;
