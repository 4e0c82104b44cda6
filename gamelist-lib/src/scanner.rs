//! Extension discovery and extension-filtered file matching over a ROM tree.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GamelistError;
use crate::walk::walk_files;

/// Distinct extensions found under a root.
#[derive(Debug, Default)]
pub struct ExtensionScan {
    /// Lower-cased, dot-prefixed extensions in ascending order.
    pub extensions: Vec<String>,
    /// One `PartialScan` per subtree that could not be read.
    pub warnings: Vec<GamelistError>,
}

impl ExtensionScan {
    pub fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A file whose extension was accepted at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    /// Path as discovered under the absolute, unresolved ROM root.
    pub path: PathBuf,
    /// Symlink-resolved path, used for duplicate suppression.
    pub canonical: PathBuf,
}

/// Matched files in traversal order.
#[derive(Debug, Default)]
pub struct FileMatch {
    pub files: Vec<MatchedFile>,
    pub warnings: Vec<GamelistError>,
}

/// Which extensions the caller wants turned into game entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionSelection {
    /// Every extension the scan finds.
    All,
    /// Only these (normalized) extensions.
    Only(BTreeSet<String>),
}

impl ExtensionSelection {
    /// Build an explicit selection, normalizing each entry and dropping
    /// blanks. The result may be empty; that is rejected when a run starts.
    pub fn only<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Only(
            extensions
                .into_iter()
                .filter_map(|e| normalize_extension(e.as_ref()))
                .collect(),
        )
    }
}

/// Normalize user input like `ZIP`, `zip` or `.Zip` to `.zip`.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!(".{}", trimmed.to_lowercase()))
    }
}

/// The lower-cased, dot-prefixed extension of `path`, if it has a non-empty one.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{}", e.to_lowercase()))
}

/// Validate a root directory and return it as an absolute path.
///
/// Symlinks in the returned path are left as the caller wrote them, so paths
/// computed against it match the folder names the user sees. Canonical paths
/// are only used for identity (cycle guard, duplicate suppression).
pub fn resolve_root(root: &Path) -> Result<PathBuf, GamelistError> {
    let canonical = fs::canonicalize(root)
        .map_err(|e| GamelistError::invalid_path(root, e.to_string()))?;
    if !canonical.is_dir() {
        return Err(GamelistError::invalid_path(root, "not a directory"));
    }
    std::path::absolute(root).map_err(|e| GamelistError::invalid_path(root, e.to_string()))
}

/// Collect the distinct extensions of all regular files under `root`.
pub fn scan_extensions(root: &Path) -> Result<ExtensionScan, GamelistError> {
    let root = resolve_root(root)?;
    let walk = walk_files(&root);

    let extensions: BTreeSet<String> = walk.files.iter().filter_map(|p| extension_of(p)).collect();
    log::debug!(
        "Scanned {} files under {}, {} distinct extensions",
        walk.files.len(),
        root.display(),
        extensions.len()
    );

    Ok(ExtensionScan {
        extensions: extensions.into_iter().collect(),
        warnings: walk.warnings,
    })
}

/// Find every regular file under `root` whose extension is in `accepted`.
///
/// Files come back in depth-first pre-order with entries sorted by name, and
/// no canonical path appears twice. An empty result is not an error here.
pub fn match_files(root: &Path, accepted: &BTreeSet<String>) -> Result<FileMatch, GamelistError> {
    if accepted.is_empty() {
        return Err(GamelistError::invalid_input(
            "at least one file extension must be selected",
        ));
    }
    let root = resolve_root(root)?;
    let walk = walk_files(&root);

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for path in walk.files {
        let accepted_ext = extension_of(&path).is_some_and(|e| accepted.contains(&e));
        if !accepted_ext {
            continue;
        }
        let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if !seen.insert(canonical.clone()) {
            log::debug!("Duplicate of an earlier match: {}", path.display());
            continue;
        }
        files.push(MatchedFile { path, canonical });
    }

    log::debug!("Matched {} files under {}", files.len(), root.display());
    Ok(FileMatch {
        files,
        warnings: walk.warnings,
    })
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
