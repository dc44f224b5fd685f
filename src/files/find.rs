//! Recursive glob search.
//!
//! A pattern is matched against the tail of each entry's path relative to
//! the search root, at any depth. `*.rs` finds every Rust file in the tree
//! and `src/*.rs` finds Rust files directly inside any `src` directory.
//!
//! Supported syntax: `*` (anything but `/`), `?` (one character but `/`),
//! `**` (anything, including `/`) and `[...]` / `[!...]` character classes.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use regex::Regex;

use crate::error::{ClikitError, Result};

/// A compiled glob pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    pattern: String,
    regex: Regex,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let source = format!("^(?:.*/)?{}$", translate(pattern)?);
        let regex = Regex::new(&source).map_err(|e| ClikitError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Match a `/`-separated relative path.
    pub fn matches(&self, relative: &str) -> bool {
        self.regex.is_match(relative)
    }
}

fn translate(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                // `**/` also matches zero directories
                if chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("(?:.*/)?");
                } else {
                    out.push_str(".*");
                }
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '[' => {
                let negated = chars.peek() == Some(&'!');
                if negated {
                    chars.next();
                }
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' && !body.is_empty() {
                        closed = true;
                        break;
                    }
                    if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^') {
                        body.push('\\');
                    }
                    body.push(c);
                }
                if !closed {
                    return Err(ClikitError::Pattern {
                        pattern: pattern.to_string(),
                        message: "unclosed character class".to_string(),
                    });
                }
                // a negated class must not match the path separator
                out.push_str(if negated { "[^/" } else { "[" });
                out.push_str(&body);
                out.push(']');
            }
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    Ok(out)
}

/// Find every entry under `dir` whose path matches `pattern`.
///
/// Both files and directories are returned, sorted. A missing `dir` yields
/// an empty list. Symbolic links are reported but not followed.
pub fn find_files(dir: impl AsRef<Path>, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = dir.as_ref();
    let glob = GlobPattern::new(pattern)?;
    let mut found = Vec::new();
    if root.is_dir() {
        walk(root, root, &glob, &mut found);
    } else {
        debug!("find: {} is not a directory", root.display());
    }
    found.sort();
    Ok(found)
}

fn walk(root: &Path, dir: &Path, glob: &GlobPattern, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("skipping {}: {}", dir.display(), e);
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if glob.matches(&relative_str(root, &path)) {
            found.push(path.clone());
        }
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            walk(root, &path, glob, found);
        }
    }
}

fn relative_str(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
