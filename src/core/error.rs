use std::io;

use thiserror::Error;

/// Failures surfaced to API clients. Everything else rides along as a
/// plain `anyhow::Error` and maps to a 500.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested model is not in the configured set
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Constructing the model client failed
    #[error("Failed to initialize model {model}: {cause}")]
    ModelInitialization { model: String, cause: anyhow::Error },

    /// The model call itself failed
    #[error("Chat completion failed: {cause}")]
    Generation { cause: anyhow::Error },

    /// Writing an uploaded file to disk failed
    #[error("Failed to write {filename}: {source}")]
    FileWrite { filename: String, source: io::Error },
}
