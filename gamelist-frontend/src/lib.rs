pub mod error;
pub mod esde;

pub use error::FrontendError;
pub use esde::EsDeFrontend;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of a frontend game list, fully resolved and ready to serialize.
///
/// Paths are already root-relative and use forward slashes. The metadata
/// fields are always emitted, even when empty, so that a frontend's own
/// scraper has a slot to fill in later.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameRecord {
    /// Root-relative ROM path, e.g. `./Sonic.zip`
    pub path: String,
    /// Display name (ROM file stem)
    pub name: String,
    /// Root-relative image path, if a companion image was found
    pub image: Option<String>,
    pub release_date: String,
    pub developer: String,
    pub publisher: String,
    pub genre: String,
    pub description: String,
}

impl GameRecord {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Trait for gaming frontend metadata generators.
pub trait Frontend {
    fn name(&self) -> &'static str;

    /// File name the frontend expects its metadata document to have.
    fn default_file_name(&self) -> &'static str;

    /// Serialize the records into the frontend's document format.
    fn render(&self, games: &[GameRecord]) -> Result<Vec<u8>, FrontendError>;

    /// Render the records and write them to `output`.
    ///
    /// Either the complete document ends up at `output` or the call fails and
    /// whatever was there before is left untouched.
    fn write_metadata(&self, games: &[GameRecord], output: &Path) -> Result<(), FrontendError> {
        let bytes = self.render(games)?;
        write_atomically(output, &bytes)
    }
}

/// Write `bytes` to a sibling temp file and rename it over `path`.
///
/// Missing parent directories are created first. If the write then fails,
/// the directories this call created are removed again, so a failed write
/// leaves the filesystem as it found it.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), FrontendError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| FrontendError::invalid_output(path.display().to_string()))?;
    let mut tmp_name = OsString::from(file_name);
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    // Deepest first.
    let mut created = Vec::new();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        created = parent
            .ancestors()
            .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
            .map(Path::to_path_buf)
            .collect();
        if let Err(e) = fs::create_dir_all(parent) {
            remove_created_dirs(&created);
            return Err(e.into());
        }
    }

    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                log::warn!("Could not remove {}: {cleanup}", tmp.display());
            }
        }
        remove_created_dirs(&created);
        return Err(e.into());
    }

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Undo `create_dir_all` for the directories listed, deepest first.
fn remove_created_dirs(created: &[PathBuf]) {
    for dir in created {
        // Only empty directories go; stop at the first one that can't.
        if !dir.exists() {
            continue;
        }
        if let Err(e) = fs::remove_dir(dir) {
            log::warn!("Could not remove {}: {e}", dir.display());
            break;
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
