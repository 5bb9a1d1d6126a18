//! Template asset discovery and copying.
//!
//! Assets are located by matching a regular expression against entry names
//! (not full paths) under a template root.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("invalid asset pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("no '{pattern}' under {dir}")]
    NotFound { pattern: String, dir: PathBuf },
    #[error("failed to walk {dir}: {source}")]
    Walk {
        dir: PathBuf,
        source: walkdir::Error,
    },
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Filter applied to search hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Any,
    Dir,
    File,
}

impl EntryKind {
    fn accepts(self, path: &Path) -> bool {
        match self {
            Self::Any => true,
            Self::Dir => path.is_dir(),
            Self::File => path.is_file(),
        }
    }
}

/// Entries under `dir` whose name matches `pattern`, in sorted walk order.
///
/// A missing or non-directory `dir` yields no hits.
pub fn search(
    dir: &Path,
    pattern: &str,
    recursive: bool,
    kind: EntryKind,
) -> Result<Vec<PathBuf>, AssetError> {
    let regex = Regex::new(pattern).map_err(|e| AssetError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| AssetError::Walk {
            dir: dir.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name().to_string_lossy();
        if regex.is_match(&name) && kind.accepts(entry.path()) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

fn find_first(dir: &Path, pattern: &str, kind: EntryKind) -> Result<PathBuf, AssetError> {
    search(dir, pattern, true, kind)?
        .into_iter()
        .next()
        .ok_or_else(|| AssetError::NotFound {
            pattern: pattern.to_string(),
            dir: dir.to_path_buf(),
        })
}

/// First directory under `dir` (at any depth) whose name matches `pattern`.
pub fn find_dir(dir: &Path, pattern: &str) -> Result<PathBuf, AssetError> {
    find_first(dir, pattern, EntryKind::Dir)
}

/// First file under `dir` (at any depth) whose name matches `pattern`.
pub fn find_file(dir: &Path, pattern: &str) -> Result<PathBuf, AssetError> {
    find_first(dir, pattern, EntryKind::File)
}

/// Pattern matching exactly the file or directory `name`.
pub fn exact_name_pattern(name: &str) -> String {
    format!("^{}$", regex::escape(name))
}

/// Copy the tree under `from` into `to`, overwriting files that exist.
/// Returns the number of files copied.
pub fn copy_dir(from: &Path, to: &Path) -> Result<usize, AssetError> {
    let copy_err = |source: std::io::Error| AssetError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(to).map_err(copy_err)?;

    let mut copied = 0;
    for entry in WalkDir::new(from).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| AssetError::Walk {
            dir: from.to_path_buf(),
            source: e,
        })?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(copy_err)?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(copy_err)?;
            copied += 1;
        }
    }

    debug!(from = %from.display(), to = %to.display(), copied, "Copied asset directory");
    Ok(copied)
}
