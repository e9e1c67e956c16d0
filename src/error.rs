use thiserror::Error;

/// Main error type for the OpenGIN tabular engine.
/// Aggregates errors from the standard library, dependencies, and internal modules.
#[derive(Error, Debug)]
pub enum OpenGinError {
    #[error("{0}")]
    WithContextError(String),

    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    // Tabular module errors
    #[error("{0}")]
    IngestError(#[from] crate::tabular::IngestError),

    // Envelope module errors
    #[error("{0}")]
    MetadataError(#[from] crate::envelope::MetadataError),

    // Archive module errors
    #[error("{0}")]
    ArchiveError(#[from] crate::archive::ArchiveError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, OpenGinError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| OpenGinError::WithContextError(format!("{}: {}", message, e)))
    }
}
