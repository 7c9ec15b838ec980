//! Path Utilities
//!
//! Pure string helpers for the virtual filesystem's path model. Stored keys
//! are absolute and slash-separated; directory keys end in `/`, file keys
//! do not. Nothing in here touches the table.

/// Normalize a path into absolute form.
///
/// `.` segments are dropped, `..` pops the previous segment (a no-op at the
/// root) and repeated slashes collapse. A trailing slash on the input is a
/// directory assertion and is kept, except for the root itself.
pub fn normalize(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }

    if resolved.is_empty() {
        return "/".to_string();
    }

    let mut normalized = format!("/{}", resolved.join("/"));
    if has_dir_suffix(path) || ends_with_dot_segment(path) {
        normalized.push('/');
    }
    normalized
}

/// Resolve `input` against the cursor `cwd`.
pub fn resolve(cwd: &str, input: &str) -> String {
    if input.is_empty() {
        return normalize(cwd);
    }
    if input.starts_with('/') {
        normalize(input)
    } else {
        normalize(&format!("{}/{}", cwd, input))
    }
}

/// True if the path carries a trailing slash (root excluded).
pub fn has_dir_suffix(path: &str) -> bool {
    path.len() > 1 && path.ends_with('/')
}

/// `a/.` and `a/..` name directories just like `a/`.
fn ends_with_dot_segment(path: &str) -> bool {
    path == "." || path == ".." || path.ends_with("/.") || path.ends_with("/..")
}

/// Strip any trailing slashes, keeping `/` for the root.
pub fn trim_dir_suffix(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Directory-form key: exactly one trailing slash.
pub fn dir_key(path: &str) -> String {
    let trimmed = trim_dir_suffix(path);
    if trimmed == "/" {
        "/".to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// File-form key: no trailing slash.
pub fn file_key(path: &str) -> String {
    trim_dir_suffix(path).to_string()
}

/// Parent directory of a normalized path, without trailing slash.
pub fn parent(path: &str) -> String {
    let trimmed = trim_dir_suffix(path);
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => trimmed[..pos].to_string(),
    }
}

/// Last segment of a normalized path (empty for the root).
pub fn basename(path: &str) -> &str {
    let trimmed = trim_dir_suffix(path);
    match trimmed.rfind('/') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// True if `path` equals `ancestor` or lies below it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    let path = trim_dir_suffix(path);
    let ancestor = trim_dir_suffix(ancestor);
    if ancestor == "/" {
        return true;
    }
    path == ancestor || path.starts_with(&format!("{}/", ancestor))
}
