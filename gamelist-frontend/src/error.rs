/// Errors that can occur while rendering or writing a metadata document.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writing error: {0}")]
    Xml(String),

    #[error("Invalid output path: {0}")]
    InvalidOutput(String),
}

impl FrontendError {
    pub fn xml(err: impl std::fmt::Display) -> Self {
        Self::Xml(err.to_string())
    }

    pub fn invalid_output(msg: impl Into<String>) -> Self {
        Self::InvalidOutput(msg.into())
    }
}
