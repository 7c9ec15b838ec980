//! Tree rendering
//!
//! Walks the path table depth first and yields one line per entry, using an
//! explicit stack so lines are produced on demand.

use super::types::DirEntry;
use super::virtual_fs::VirtualFs;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

struct Level {
    key: String,
    entries: Vec<DirEntry>,
    next: usize,
    indent: String,
}

/// Lazy iterator over the lines of a `tree` rendering.
///
/// Siblings are sorted by name at every level. The table has no back-edges,
/// so the walk always terminates.
pub struct TreeLines<'a> {
    fs: &'a VirtualFs,
    stack: Vec<Level>,
}

impl<'a> TreeLines<'a> {
    /// Start a walk below the directory key `root` (ends in `/`).
    pub(crate) fn new(fs: &'a VirtualFs, root: String) -> Self {
        let entries = fs.children(&root);
        Self {
            fs,
            stack: vec![Level {
                key: root,
                entries,
                next: 0,
                indent: String::new(),
            }],
        }
    }
}

impl Iterator for TreeLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let level = self.stack.last_mut()?;
            if level.next >= level.entries.len() {
                self.stack.pop();
                continue;
            }

            let idx = level.next;
            level.next += 1;
            let is_last = idx + 1 == level.entries.len();
            let entry = &level.entries[idx];

            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let line = format!("{}{}{}", level.indent, connector, entry.name);

            let descend = if entry.is_directory {
                let key = format!("{}{}/", level.key, entry.name);
                let indent = format!(
                    "{}{}",
                    level.indent,
                    if is_last { SPACE_INDENT } else { PIPE_INDENT }
                );
                Some((key, indent))
            } else {
                None
            };

            if let Some((key, indent)) = descend {
                let entries = self.fs.children(&key);
                self.stack.push(Level {
                    key,
                    entries,
                    next: 0,
                    indent,
                });
            }
            return Some(line);
        }
    }
}
