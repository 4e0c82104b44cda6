//! Turns matched ROM files into game records.

use std::path::Path;

use gamelist_frontend::GameRecord;

use crate::error::GamelistError;
use crate::media::find_image;
use crate::paths::{normalize_path, relative_path};
use crate::progress::ProgressReporter;
use crate::scanner::MatchedFile;

/// Builds one [`GameRecord`] per matched file.
///
/// Both roots are compared lexically, so they should be absolute paths as
/// the user gave them: an image folder reached through a symlink inside the
/// ROM root then stays relative to it.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder<'a> {
    rom_root: &'a Path,
    image_root: Option<&'a Path>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(rom_root: &'a Path) -> Self {
        Self {
            rom_root,
            image_root: None,
        }
    }

    pub fn with_image_root(mut self, image_root: Option<&'a Path>) -> Self {
        self.image_root = image_root;
        self
    }

    /// Assemble the record for a single file. Never fails: a missing image
    /// just means no `image` field.
    pub fn build(&self, file: &MatchedFile) -> GameRecord {
        let path = normalize_path(&file.path, self.rom_root, self.rom_root);
        let stem = file
            .path
            .file_stem()
            .or_else(|| file.path.file_name())
            .unwrap_or_default();
        let record = GameRecord::new(path, stem.to_string_lossy());

        let image = self
            .image_root
            .and_then(|image_root| Some((find_image(stem, image_root)?, image_root)));
        match image {
            Some((image_path, image_root)) => {
                if relative_path(&image_path, self.rom_root).is_none() {
                    log::debug!(
                        "Image {} is outside the ROM root, synthesizing its path",
                        image_path.display()
                    );
                }
                record.with_image(normalize_path(&image_path, self.rom_root, image_root))
            }
            None => record,
        }
    }

    /// Build records for all files in order, reporting per-file progress.
    ///
    /// Fails with `NoMatches` when `files` is empty.
    pub fn build_all(
        &self,
        files: &[MatchedFile],
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<GameRecord>, GamelistError> {
        if files.is_empty() {
            return Err(GamelistError::NoMatches {
                root: self.rom_root.to_path_buf(),
            });
        }

        let total = files.len();
        let mut records = Vec::with_capacity(total);
        for (i, file) in files.iter().enumerate() {
            let file_name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            reporter.on_status(&format!("Processing file {}/{}: {}", i + 1, total, file_name));
            reporter.on_progress(i as f64 / total as f64);
            records.push(self.build(file));
        }
        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests/records_tests.rs"]
mod tests;
