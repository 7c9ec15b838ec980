//! Virtual File System
//!
//! A flat, in-memory path table standing in for a directory tree. Keys are
//! normalized absolute paths: directories end in `/`, files do not, and the
//! root is implied rather than stored. Every operation either succeeds or
//! leaves the table untouched.

use std::collections::BTreeMap;

use tracing::debug;

use super::path::{self, dir_key, file_key, has_dir_suffix, trim_dir_suffix};
use super::tree::TreeLines;
use super::types::*;

/// In-memory virtual file system with a shell cursor.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    data: BTreeMap<String, Node>,
    cwd: String,
}

impl VirtualFs {
    /// Create a new empty filesystem with the cursor at `/`.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
            cwd: "/".to_string(),
        }
    }

    /// Create with initial files, materializing their parent directories.
    pub fn with_files<'a>(
        files: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, FsError> {
        let mut fs = Self::new();
        for (path, content) in files {
            fs.load_entry(path, Node::file(content))?;
        }
        Ok(fs)
    }

    /// Insert a row coming from an archive.
    ///
    /// The raw name is anchored at the root and normalized, so `..` cannot
    /// climb out of it. Missing ancestors become explicit directory entries.
    /// A name that is already used with the other kind is rejected.
    pub fn load_entry(&mut self, raw_path: &str, node: Node) -> Result<(), FsError> {
        let normalized = path::normalize(&format!("/{}", raw_path));
        if trim_dir_suffix(&normalized) == "/" {
            return Ok(());
        }
        if node.is_file() && has_dir_suffix(&normalized) {
            return Err(FsError::invalid_argument(&normalized, "load"));
        }

        let file = file_key(&normalized);
        let dir = dir_key(&normalized);

        let mut ancestors = Vec::new();
        let mut ancestor = path::parent(&normalized);
        while ancestor != "/" {
            if self.data.get(&ancestor).is_some_and(Node::is_file) {
                return Err(FsError::not_directory(&ancestor, "load"));
            }
            let next = path::parent(&ancestor);
            ancestors.push(dir_key(&ancestor));
            ancestor = next;
        }

        let key = match node {
            Node::Directory => {
                if self.data.contains_key(&file) {
                    return Err(FsError::already_exists(&normalized, "load"));
                }
                dir
            }
            Node::File { .. } => {
                if self.data.contains_key(&dir) {
                    return Err(FsError::is_directory(&normalized, "load"));
                }
                file
            }
        };

        for ancestor in ancestors {
            self.data.entry(ancestor).or_insert(Node::Directory);
        }
        self.data.insert(key, node);
        Ok(())
    }

    /// All rows in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of rows in the table (the root is not a row).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resolve `input` against the cursor.
    pub fn resolve(&self, input: &str) -> String {
        path::resolve(&self.cwd, input)
    }

    /// True if `input` names an explicit directory (or the root).
    pub fn is_dir(&self, input: &str) -> bool {
        self.dir_exists(&self.resolve(input))
    }

    /// True if `input` names a file.
    pub fn is_file(&self, input: &str) -> bool {
        let target = self.resolve(input);
        !has_dir_suffix(&target) && self.file_exists(&target)
    }

    pub fn exists(&self, input: &str) -> bool {
        self.is_dir(input) || self.is_file(input)
    }

    fn dir_exists(&self, path: &str) -> bool {
        let key = dir_key(path);
        key == "/" || self.data.get(&key).is_some_and(Node::is_directory)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.data.get(&file_key(path)).is_some_and(Node::is_file)
    }

    fn has_descendants(&self, prefix: &str) -> bool {
        self.data
            .range(prefix.to_string()..)
            .next()
            .is_some_and(|(k, _)| k.starts_with(prefix))
    }

    /// Parent of a new entry must be an existing directory.
    fn check_parent(&self, target: &str, operation: &str) -> Result<(), FsError> {
        let parent = path::parent(target);
        if self.dir_exists(&parent) {
            return Ok(());
        }
        if self.file_exists(&parent) {
            return Err(FsError::not_directory(&parent, operation));
        }
        Err(FsError::not_found(&parent, operation))
    }

    /// Immediate children under a directory-form prefix, sorted by name.
    ///
    /// Children are synthesized from every key below the prefix, so a
    /// directory shows up even when only its descendants are stored.
    pub(crate) fn children(&self, prefix: &str) -> Vec<DirEntry> {
        let mut names: BTreeMap<&str, bool> = BTreeMap::new();
        for (key, node) in self.data.range(prefix.to_string()..) {
            let Some(rest) = key.strip_prefix(prefix) else {
                break;
            };
            if rest.is_empty() {
                continue;
            }
            let name = rest.split('/').next().unwrap_or(rest);
            if name.is_empty() {
                continue;
            }
            let is_directory = rest.len() > name.len() || node.is_directory();
            let slot = names.entry(name).or_insert(false);
            *slot |= is_directory;
        }
        names
            .into_iter()
            .map(|(name, is_directory)| DirEntry {
                name: name.to_string(),
                is_directory,
            })
            .collect()
    }

    /// Validate that `target` can be listed and return its directory key.
    fn listable(&self, target: &str, operation: &str) -> Result<String, FsError> {
        let key = dir_key(target);
        if self.dir_exists(&key) || self.has_descendants(&key) {
            return Ok(key);
        }
        if !has_dir_suffix(target) && self.file_exists(target) {
            return Err(FsError::not_directory(target, operation));
        }
        Err(FsError::not_found(target, operation))
    }

    // ------------------------------------------------------------------
    // Shell operations
    // ------------------------------------------------------------------

    /// Current directory, without trailing slash.
    pub fn pwd(&self) -> &str {
        &self.cwd
    }

    /// Names in the current directory; directories carry a trailing `/`.
    pub fn ls(&self) -> Vec<String> {
        self.children(&dir_key(&self.cwd))
            .iter()
            .map(DirEntry::display_name)
            .collect()
    }

    /// Entries of an arbitrary directory.
    pub fn list(&self, input: &str) -> Result<Vec<DirEntry>, FsError> {
        let target = self.resolve(input);
        let key = self.listable(&target, "scandir")?;
        Ok(self.children(&key))
    }

    pub fn cd(&mut self, input: &str) -> Result<(), FsError> {
        let target = self.resolve(input);
        if self.dir_exists(&target) {
            debug!(from = %self.cwd, to = %trim_dir_suffix(&target), "cd");
            self.cwd = trim_dir_suffix(&target).to_string();
            return Ok(());
        }
        if !has_dir_suffix(&target) && self.file_exists(&target) {
            return Err(FsError::not_directory(&target, "cd"));
        }
        Err(FsError::not_found(&target, "cd"))
    }

    /// Content of a file. Anything that is not a file is not found.
    pub fn cat(&self, input: &str) -> Result<&str, FsError> {
        let target = self.resolve(input);
        if has_dir_suffix(&target) {
            return Err(FsError::not_found(&target, "open"));
        }
        match self.data.get(&file_key(&target)) {
            Some(Node::File { content }) => Ok(content.as_str()),
            _ => Err(FsError::not_found(&target, "open")),
        }
    }

    /// Create one directory. The parent must already exist.
    pub fn mkdir(&mut self, input: &str) -> Result<(), FsError> {
        let target = self.resolve(input);
        let key = dir_key(&target);
        if key == "/" || self.data.contains_key(&key) || self.data.contains_key(&file_key(&target)) {
            return Err(FsError::already_exists(&key, "mkdir"));
        }
        self.check_parent(&target, "mkdir")?;

        debug!(path = %key, "mkdir");
        self.data.insert(key, Node::Directory);
        Ok(())
    }

    /// Create or overwrite a file.
    pub fn nano(&mut self, input: &str, content: &str) -> Result<(), FsError> {
        let target = self.resolve(input);
        let key = file_key(&target);
        if key == "/" || has_dir_suffix(&target) || self.data.contains_key(&dir_key(&target)) {
            return Err(FsError::is_directory(&target, "write"));
        }
        self.check_parent(&target, "write")?;

        debug!(path = %key, bytes = content.len(), "write");
        self.data.insert(key, Node::file(content));
        Ok(())
    }

    /// Alias of [`VirtualFs::nano`].
    pub fn write_file(&mut self, input: &str, content: &str) -> Result<(), FsError> {
        self.nano(input, content)
    }

    /// Move or rename a file or a whole directory subtree.
    ///
    /// The destination must not exist. For directories, every descendant key
    /// is rewritten under the new prefix; all new keys are computed and
    /// checked before the table is touched.
    pub fn mv(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        let src_path = self.resolve(src);
        let dst_path = self.resolve(dst);

        if trim_dir_suffix(&src_path) == "/" {
            return Err(FsError::invalid_argument(&src_path, "mv"));
        }

        let src_is_file = !has_dir_suffix(&src_path) && self.file_exists(&src_path);
        if !src_is_file && !self.dir_exists(&src_path) {
            return Err(FsError::not_found(&src_path, "mv"));
        }

        if trim_dir_suffix(&dst_path) == "/"
            || self.data.contains_key(&file_key(&dst_path))
            || self.data.contains_key(&dir_key(&dst_path))
        {
            return Err(FsError::already_exists(&dst_path, "mv"));
        }

        if src_is_file {
            if has_dir_suffix(&dst_path) {
                return Err(FsError::not_directory(&dst_path, "mv"));
            }
            self.check_parent(&dst_path, "mv")?;

            let from = file_key(&src_path);
            let to = file_key(&dst_path);
            debug!(from = %from, to = %to, "mv file");
            if let Some(node) = self.data.remove(&from) {
                self.data.insert(to, node);
            }
            return Ok(());
        }

        if path::is_within(&dst_path, &src_path) {
            return Err(FsError::invalid_argument(&dst_path, "mv"));
        }
        self.check_parent(&dst_path, "mv")?;

        let from_prefix = dir_key(&src_path);
        let to_prefix = dir_key(&dst_path);

        // Stage the full key mapping first.
        let renames: Vec<(String, String)> = self
            .data
            .range(from_prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&from_prefix))
            .map(|(k, _)| (k.clone(), format!("{}{}", to_prefix, &k[from_prefix.len()..])))
            .collect();

        if let Some((_, clash)) = renames.iter().find(|(_, to)| self.data.contains_key(to)) {
            return Err(FsError::already_exists(clash, "mv"));
        }

        debug!(from = %from_prefix, to = %to_prefix, entries = renames.len(), "mv directory");
        for (from, to) in renames {
            if let Some(node) = self.data.remove(&from) {
                self.data.insert(to, node);
            }
        }

        if path::is_within(&self.cwd, &from_prefix) {
            let rest = &self.cwd[trim_dir_suffix(&from_prefix).len()..];
            self.cwd = format!("{}{}", trim_dir_suffix(&to_prefix), rest);
        }
        Ok(())
    }

    /// Lazily render the tree below `root` (the cursor when `None`).
    pub fn tree_lines(&self, root: Option<&str>) -> Result<TreeLines<'_>, FsError> {
        let target = match root {
            Some(input) => self.resolve(input),
            None => self.cwd.clone(),
        };
        let key = self.listable(&target, "tree")?;
        Ok(TreeLines::new(self, key))
    }

    /// Rendered tree as one multi-line string.
    pub fn tree(&self, root: Option<&str>) -> Result<String, FsError> {
        Ok(self.tree_lines(root)?.collect::<Vec<_>>().join("\n"))
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VirtualFs {
        VirtualFs::with_files([
            ("file1.txt", "Content of file1"),
            ("dir1/file2.txt", "Content of file2"),
            ("dir1/subdir/file3.txt", "Content of file3"),
        ])
        .unwrap()
    }

    #[test]
    fn test_load_materializes_parents() {
        let fs = sample();
        assert!(fs.is_dir("/dir1"));
        assert!(fs.is_dir("/dir1/subdir"));
        let keys: Vec<&str> = fs.entries().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "/dir1/",
                "/dir1/file2.txt",
                "/dir1/subdir/",
                "/dir1/subdir/file3.txt",
                "/file1.txt",
            ]
        );
    }

    #[test]
    fn test_load_rejects_kind_conflicts() {
        let mut fs = VirtualFs::new();
        fs.load_entry("a", Node::file("x")).unwrap();
        let err = fs.load_entry("a/", Node::Directory).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        let err = fs.load_entry("a/b.txt", Node::file("y")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADirectory);
        assert_eq!(fs.len(), 1);
    }

    #[test]
    fn test_load_cannot_escape_root() {
        let mut fs = VirtualFs::new();
        fs.load_entry("../../etc/passwd", Node::file("x")).unwrap();
        assert_eq!(fs.cat("/etc/passwd").unwrap(), "x");
    }

    #[test]
    fn test_pwd_and_cd() {
        let mut fs = sample();
        assert_eq!(fs.pwd(), "/");
        fs.cd("dir1").unwrap();
        assert_eq!(fs.pwd(), "/dir1");
        fs.cd("subdir/").unwrap();
        assert_eq!(fs.pwd(), "/dir1/subdir");
        fs.cd("../..").unwrap();
        assert_eq!(fs.pwd(), "/");
        fs.cd("..").unwrap();
        assert_eq!(fs.pwd(), "/");
    }

    #[test]
    fn test_cd_failures_leave_cursor() {
        let mut fs = sample();
        fs.cd("dir1").unwrap();
        let err = fs.cd("missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = fs.cd("file2.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADirectory);
        assert_eq!(fs.pwd(), "/dir1");
    }

    #[test]
    fn test_ls() {
        let mut fs = sample();
        assert_eq!(fs.ls(), vec!["dir1/", "file1.txt"]);
        fs.cd("dir1").unwrap();
        assert_eq!(fs.ls(), vec!["file2.txt", "subdir/"]);
        fs.cd("subdir").unwrap();
        assert_eq!(fs.ls(), vec!["file3.txt"]);
    }

    #[test]
    fn test_ls_does_not_leak_sibling_prefixes() {
        let mut fs = VirtualFs::with_files([("a/x", "1"), ("ab/y", "2")]).unwrap();
        fs.cd("a").unwrap();
        assert_eq!(fs.ls(), vec!["x"]);
    }

    #[test]
    fn test_list_synthesizes_implicit_directories() {
        let mut fs = VirtualFs::new();
        fs.data.insert("/ghost/file".to_string(), Node::file("boo"));
        assert_eq!(fs.ls(), vec!["ghost/"]);
        let entries = fs.list("ghost").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "file");
        // cd still needs an explicit entry
        assert!(fs.cd("ghost").is_err());
    }

    #[test]
    fn test_cat() {
        let mut fs = sample();
        assert_eq!(fs.cat("file1.txt").unwrap(), "Content of file1");
        fs.cd("dir1").unwrap();
        assert_eq!(fs.cat("file2.txt").unwrap(), "Content of file2");
        assert_eq!(fs.cat("/dir1/subdir/file3.txt").unwrap(), "Content of file3");
        assert_eq!(fs.cat("subdir").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(fs.cat("file2.txt/").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(fs.cat("nope").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_mkdir() {
        let mut fs = sample();
        fs.mkdir("d").unwrap();
        assert!(fs.ls().contains(&"d/".to_string()));
        assert_eq!(fs.mkdir("d").unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs.mkdir("dir1").unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs.mkdir("file1.txt").unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs.mkdir("/").unwrap_err().kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_mkdir_requires_parent() {
        let mut fs = sample();
        assert_eq!(fs.mkdir("a/b").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(fs.mkdir("file1.txt/b").unwrap_err().kind(), ErrorKind::NotADirectory);
        assert!(!fs.is_dir("a"));
        fs.mkdir("a").unwrap();
        fs.mkdir("a/b").unwrap();
        assert!(fs.is_dir("/a/b"));
    }

    #[test]
    fn test_empty_directory_persists() {
        let mut fs = sample();
        fs.mv("dir1/file2.txt", "file2.txt").unwrap();
        fs.mv("dir1/subdir/file3.txt", "file3.txt").unwrap();
        assert!(fs.is_dir("dir1/subdir"));
        fs.cd("dir1/subdir").unwrap();
        assert!(fs.ls().is_empty());
    }

    #[test]
    fn test_nano_upsert() {
        let mut fs = sample();
        fs.nano("f.txt", "x").unwrap();
        fs.nano("f.txt", "y").unwrap();
        assert_eq!(fs.cat("f.txt").unwrap(), "y");
        assert_eq!(fs.ls().iter().filter(|n| *n == "f.txt").count(), 1);
    }

    #[test]
    fn test_nano_in_subdir() {
        let mut fs = sample();
        fs.nano("dir1/new_file.txt", "new content").unwrap();
        assert_eq!(fs.cat("dir1/new_file.txt").unwrap(), "new content");
    }

    #[test]
    fn test_nano_failures() {
        let mut fs = sample();
        assert_eq!(fs.nano("dir1", "x").unwrap_err().kind(), ErrorKind::IsADirectory);
        assert_eq!(fs.nano("new/", "x").unwrap_err().kind(), ErrorKind::IsADirectory);
        assert_eq!(fs.nano("/", "x").unwrap_err().kind(), ErrorKind::IsADirectory);
        assert_eq!(fs.nano("missing/f.txt", "x").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(
            fs.nano("file1.txt/f.txt", "x").unwrap_err().kind(),
            ErrorKind::NotADirectory
        );
        assert!(!fs.exists("missing"));
    }

    #[test]
    fn test_mv_file() {
        let mut fs = sample();
        fs.mv("file1.txt", "dir1/file1.txt").unwrap();
        assert_eq!(fs.cat("dir1/file1.txt").unwrap(), "Content of file1");
        assert_eq!(fs.cat("file1.txt").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_mv_rename_in_place() {
        let mut fs = sample();
        fs.mv("file1.txt", "renamed_file.txt").unwrap();
        assert!(fs.ls().contains(&"renamed_file.txt".to_string()));
        assert!(!fs.ls().contains(&"file1.txt".to_string()));
    }

    #[test]
    fn test_mv_is_strict() {
        let mut fs = sample();
        fs.nano("other.txt", "o").unwrap();
        assert_eq!(fs.mv("file1.txt", "other.txt").unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs.mv("file1.txt", "dir1").unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs.mv("file1.txt", "dir1/").unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs.mv("file1.txt", "newdir/").unwrap_err().kind(), ErrorKind::NotADirectory);
        assert_eq!(fs.mv("missing", "x").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(fs.mv("file1.txt", "nope/x.txt").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(fs.cat("file1.txt").unwrap(), "Content of file1");
        assert_eq!(fs.cat("other.txt").unwrap(), "o");
    }

    #[test]
    fn test_mv_directory_subtree() {
        let mut fs = VirtualFs::with_files([("d/a", "A"), ("d/b/c", "C")]).unwrap();
        fs.mv("d", "e").unwrap();
        assert_eq!(fs.cat("e/a").unwrap(), "A");
        assert_eq!(fs.cat("e/b/c").unwrap(), "C");
        assert!(fs.is_dir("e/b"));
        assert_eq!(fs.cat("d/a").unwrap_err().kind(), ErrorKind::NotFound);
        assert!(!fs.exists("d"));
        let keys: Vec<&str> = fs.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["/e/", "/e/a", "/e/b/", "/e/b/c"]);
    }

    #[test]
    fn test_mv_directory_does_not_touch_sibling_prefixes() {
        let mut fs = VirtualFs::with_files([("d/a", "A"), ("dd/a", "DA")]).unwrap();
        fs.mv("d", "e").unwrap();
        assert_eq!(fs.cat("dd/a").unwrap(), "DA");
        assert_eq!(fs.cat("e/a").unwrap(), "A");
    }

    #[test]
    fn test_mv_directory_clashing_descendant_leaves_table_untouched() {
        let mut fs = VirtualFs::with_files([("a/x", "A")]).unwrap();
        fs.data.insert("/b/x".to_string(), Node::file("stray"));
        let before = fs.data.clone();

        let err = fs.mv("a", "b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(err.path(), "/b/x");
        assert_eq!(fs.data, before);
    }

    #[test]
    fn test_mv_directory_into_itself_fails() {
        let mut fs = sample();
        let before = fs.clone();
        assert_eq!(fs.mv("dir1", "dir1/subdir/x").unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(fs.mv("/", "/x").unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(fs.data, before.data);
    }

    #[test]
    fn test_mv_rewrites_cursor() {
        let mut fs = sample();
        fs.cd("dir1/subdir").unwrap();
        fs.mv("/dir1", "/moved").unwrap();
        assert_eq!(fs.pwd(), "/moved/subdir");
        assert_eq!(fs.ls(), vec!["file3.txt"]);
    }

    #[test]
    fn test_tree() {
        let fs = sample();
        let expected = "\
├── dir1
│   ├── file2.txt
│   └── subdir
│       └── file3.txt
└── file1.txt";
        assert_eq!(fs.tree(None).unwrap(), expected);
    }

    #[test]
    fn test_tree_explicit_root_and_errors() {
        let mut fs = sample();
        assert_eq!(fs.tree(Some("dir1/subdir")).unwrap(), "└── file3.txt");
        assert_eq!(fs.tree(Some("missing")).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(fs.tree(Some("file1.txt")).unwrap_err().kind(), ErrorKind::NotADirectory);
        fs.mkdir("empty").unwrap();
        assert_eq!(fs.tree(Some("empty")).unwrap(), "");
    }
}
