//! The scan → match → build → write run that produces one game list.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use gamelist_frontend::{EsDeFrontend, Frontend};

use crate::error::GamelistError;
use crate::progress::{Monotonic, ProgressReporter};
use crate::records::RecordBuilder;
use crate::scanner::{ExtensionSelection, match_files, resolve_root, scan_extensions};

/// Where a run currently is. `Failed` can follow any state before `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Scanning,
    Matching,
    Building,
    Writing,
    Done,
    Failed,
}

/// Inputs for one game list.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// ROM root; paths in the document are relative to it
    pub rom_dir: PathBuf,
    /// Optional folder of companion images named after the ROM stems
    pub image_dir: Option<PathBuf>,
    /// Extensions to turn into game entries
    pub selection: ExtensionSelection,
    /// Document to (over)write
    pub output: PathBuf,
}

impl GenerateRequest {
    pub fn new(rom_dir: impl Into<PathBuf>, selection: ExtensionSelection, output: impl Into<PathBuf>) -> Self {
        Self {
            rom_dir: rom_dir.into(),
            image_dir: None,
            selection,
            output: output.into(),
        }
    }

    pub fn with_image_dir(mut self, image_dir: Option<PathBuf>) -> Self {
        self.image_dir = image_dir;
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub output: PathBuf,
    /// Number of `<game>` entries written
    pub records: usize,
    /// How many of those got an `image`
    pub with_images: usize,
    /// The extensions that were actually accepted
    pub extensions: Vec<String>,
    /// Non-fatal problems, one `PartialScan` per skipped directory
    pub warnings: Vec<GamelistError>,
}

/// Runs the generation steps strictly in sequence and tracks which one it is in.
pub struct Pipeline<F: Frontend = EsDeFrontend> {
    frontend: F,
    state: PipelineState,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_frontend(EsDeFrontend::new())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Frontend> Pipeline<F> {
    pub fn with_frontend(frontend: F) -> Self {
        Self {
            frontend,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Generate the document described by `request`.
    ///
    /// Nothing is written unless at least one file matched. On any error the
    /// state becomes `Failed`; the caller decides whether to run again.
    pub fn run(
        &mut self,
        request: &GenerateRequest,
        reporter: &dyn ProgressReporter,
    ) -> Result<GenerateSummary, GamelistError> {
        self.state = PipelineState::Idle;
        let reporter = Monotonic::new(reporter);
        let result = self.run_steps(request, &reporter);
        if let Err(ref e) = result {
            log::debug!("Generation failed in {:?}: {e}", self.state);
            self.transition(PipelineState::Failed);
        }
        result
    }

    fn run_steps(
        &mut self,
        request: &GenerateRequest,
        reporter: &dyn ProgressReporter,
    ) -> Result<GenerateSummary, GamelistError> {
        if let ExtensionSelection::Only(ref set) = request.selection {
            if set.is_empty() {
                return Err(GamelistError::invalid_input(
                    "at least one file extension must be selected",
                ));
            }
        }

        self.transition(PipelineState::Scanning);
        let rom_root = resolve_root(&request.rom_dir)?;
        let image_root = request.image_dir.as_deref().map(resolve_root).transpose()?;

        let scan = scan_extensions(&rom_root)?;
        reporter.on_status(&format!(
            "Found {} file extensions in the ROM folder",
            scan.extensions.len()
        ));
        let accepted = accepted_extensions(&request.selection, &scan.extensions, &rom_root)?;
        let mut warnings = scan.warnings;

        self.transition(PipelineState::Matching);
        reporter.on_status("Scanning files...");
        reporter.on_progress(0.0);
        let matched = match_files(&rom_root, &accepted)?;
        merge_warnings(&mut warnings, matched.warnings);

        self.transition(PipelineState::Building);
        let builder = RecordBuilder::new(&rom_root).with_image_root(image_root.as_deref());
        let records = builder.build_all(&matched.files, reporter)?;
        let with_images = records.iter().filter(|r| r.image.is_some()).count();

        self.transition(PipelineState::Writing);
        reporter.on_status("Writing XML file...");
        log::debug!(
            "Rendering {} records for {} into {}",
            records.len(),
            self.frontend.name(),
            request.output.display()
        );
        self.frontend
            .write_metadata(&records, &request.output)
            .map_err(|source| GamelistError::Write {
                path: request.output.clone(),
                source,
            })?;
        reporter.on_progress(1.0);
        reporter.on_status(&format!(
            "Successfully generated {} with {} games",
            self.frontend.default_file_name(),
            records.len()
        ));

        self.transition(PipelineState::Done);
        Ok(GenerateSummary {
            output: request.output.clone(),
            records: records.len(),
            with_images,
            extensions: accepted.into_iter().collect(),
            warnings,
        })
    }

    fn transition(&mut self, next: PipelineState) {
        log::debug!("Pipeline {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Resolve the caller's selection against what the scan actually found.
fn accepted_extensions(
    selection: &ExtensionSelection,
    found: &[String],
    rom_root: &Path,
) -> Result<BTreeSet<String>, GamelistError> {
    match selection {
        ExtensionSelection::All => {
            if found.is_empty() {
                return Err(GamelistError::NoMatches {
                    root: rom_root.to_path_buf(),
                });
            }
            Ok(found.iter().cloned().collect())
        }
        ExtensionSelection::Only(set) => {
            for ext in set.iter().filter(|e| !found.contains(e)) {
                log::warn!("No {} files in {}", ext, rom_root.display());
            }
            Ok(set.clone())
        }
    }
}

/// Both traversals see the same unreadable directories; keep one warning each.
fn merge_warnings(warnings: &mut Vec<GamelistError>, more: Vec<GamelistError>) {
    for warning in more {
        let duplicate = match &warning {
            GamelistError::PartialScan { path, .. } => warnings.iter().any(
                |w| matches!(w, GamelistError::PartialScan { path: seen, .. } if seen == path),
            ),
            _ => false,
        };
        if !duplicate {
            warnings.push(warning);
        }
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
