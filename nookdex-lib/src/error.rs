use nookdex_data::SourceError;
use thiserror::Error;

/// Errors surfaced by the repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A required dataset could not be read. The collection is left as it was.
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] SourceError),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl RepositoryError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
