//! Companion image lookup by ROM stem.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Image extensions tried for each ROM, in priority order.
///
/// When several exist for the same stem the first one listed wins, so this
/// order must stay fixed for output to be reproducible.
pub const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".bmp", ".tiff"];

/// Find `<image_dir>/<stem><ext>` for the first `ext` in [`IMAGE_EXTENSIONS`]
/// that exists as a file.
///
/// Candidates are matched with the filesystem's own case rules.
pub fn find_image(stem: &OsStr, image_dir: &Path) -> Option<PathBuf> {
    IMAGE_EXTENSIONS.iter().find_map(|ext| {
        let mut name = stem.to_os_string();
        name.push(ext);
        let candidate = image_dir.join(name);
        candidate.is_file().then_some(candidate)
    })
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
