//! Core of `gamelist-gen`: scan a ROM folder, pick files by extension, pair
//! them with images by stem, and write an ES-DE `gamelist.xml`.

pub mod error;
pub mod media;
pub mod paths;
pub mod pipeline;
pub mod progress;
pub mod records;
pub mod scanner;
pub mod settings;
mod walk;

pub use error::GamelistError;
pub use gamelist_frontend::{EsDeFrontend, Frontend, FrontendError, GameRecord};
pub use media::{IMAGE_EXTENSIONS, find_image};
pub use paths::{ROOT_MARKER, normalize_path, relative_path, synthesized_path};
pub use pipeline::{GenerateRequest, GenerateSummary, Pipeline, PipelineState};
pub use progress::{FnReporter, GenerateProgress, NoProgress, ProgressReporter};
pub use records::RecordBuilder;
pub use scanner::{
    ExtensionScan, ExtensionSelection, FileMatch, MatchedFile, extension_of, match_files,
    normalize_extension, resolve_root, scan_extensions,
};
pub use settings::Settings;
