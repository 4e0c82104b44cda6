//! Root-relative, forward-slash paths as written into game lists.

use std::path::{Component, Path};

/// Prefix every emitted path starts with.
pub const ROOT_MARKER: &str = "./";

/// `./<relative path>` if `file` lives under `root`.
pub fn relative_path(file: &Path, root: &Path) -> Option<String> {
    let rel = file.strip_prefix(root).ok()?;
    Some(format!("{ROOT_MARKER}{}", to_forward_slashes(rel)))
}

/// `./<foreign root's name>/<file name>` for a file outside the ROM root.
///
/// This drops everything between the foreign root and the file, so two images
/// with the same name in different subfolders collapse onto one path.
pub fn synthesized_path(file: &Path, foreign_root: &Path) -> String {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match foreign_root.file_name() {
        Some(dir) => format!("{ROOT_MARKER}{}/{}", dir.to_string_lossy(), file_name),
        None => format!("{ROOT_MARKER}{file_name}"),
    }
}

/// Relative path under `root`, falling back to [`synthesized_path`] against
/// `foreign_root` when `file` is not a descendant of `root`.
pub fn normalize_path(file: &Path, root: &Path, foreign_root: &Path) -> String {
    relative_path(file, root).unwrap_or_else(|| synthesized_path(file, foreign_root))
}

fn to_forward_slashes(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod tests;
