use std::path::PathBuf;

use gamelist_frontend::FrontendError;
use thiserror::Error;

/// Errors that can occur while building a game list.
///
/// `NoMatches` and `PartialScan` are warning-level outcomes: the former is
/// returned instead of writing an empty document, the latter is collected
/// alongside a successful result rather than aborting the traversal.
#[derive(Debug, Error)]
pub enum GamelistError {
    /// A root does not exist or is not a directory
    #[error("Invalid path {}: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// The caller supplied unusable input (e.g. no extensions selected)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing under the ROM root matched the accepted extensions
    #[error("No files in {} match the selected extensions", root.display())]
    NoMatches { root: PathBuf },

    /// A subtree could not be read and was left out of the scan
    #[error("Skipped unreadable directory {}: {source}", path.display())]
    PartialScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output document could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FrontendError,
    },

    /// The settings file could not be saved
    #[error("Settings error: {0}")]
    Settings(String),
}

impl GamelistError {
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// True for outcomes a caller should surface as a warning, not a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NoMatches { .. } | Self::PartialScan { .. })
    }
}
