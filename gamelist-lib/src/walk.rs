//! Depth-first directory traversal shared by the extension scanner and the
//! file matcher.
//!
//! Entries are visited in file-name order so results are stable across
//! platforms. Symlinked directories are followed, but every directory is
//! entered at most once by canonical identity, which bounds the walk even
//! when a link points back up the tree. Symlinked files are not reported.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GamelistError;

/// Regular files found under a root, plus the subtrees that had to be skipped.
#[derive(Debug, Default)]
pub(crate) struct Walk {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<GamelistError>,
}

impl Walk {
    fn skip(&mut self, path: &Path, source: std::io::Error) {
        log::warn!("Skipping unreadable directory {}: {}", path.display(), source);
        self.warnings.push(GamelistError::PartialScan {
            path: path.to_path_buf(),
            source,
        });
    }
}

/// Collect every regular file under `root` in depth-first pre-order.
pub(crate) fn walk_files(root: &Path) -> Walk {
    let mut walk = Walk::default();
    let mut visited = HashSet::new();
    visit(root, &mut visited, &mut walk);
    walk
}

fn visit(dir: &Path, visited: &mut HashSet<PathBuf>, walk: &mut Walk) {
    let canonical = match fs::canonicalize(dir) {
        Ok(c) => c,
        Err(e) => return walk.skip(dir, e),
    };
    if !visited.insert(canonical) {
        log::debug!("Already visited {}, not descending again", dir.display());
        return;
    }

    let mut entries: Vec<fs::DirEntry> = match fs::read_dir(dir) {
        Ok(entries) => entries.flatten().collect(),
        Err(e) => return walk.skip(dir, e),
    };
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            visit(&path, visited, walk);
        } else if file_type.is_symlink() {
            // `is_dir` follows the link; dangling links are neither.
            if path.is_dir() {
                visit(&path, visited, walk);
            } else {
                log::debug!("Skipping symlinked file {}", path.display());
            }
        } else if file_type.is_file() {
            walk.files.push(path);
        }
    }
}

#[cfg(test)]
#[path = "tests/walk_tests.rs"]
mod tests;
