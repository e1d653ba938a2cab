use thiserror::Error;

/// Errors raised while reading a dataset from its source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Unexpected shape in {path}: {message}")]
    Shape { path: String, message: String },

    #[error("Dataset not available: {0}")]
    Missing(String),
}

impl SourceError {
    pub fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn missing(what: impl Into<String>) -> Self {
        Self::Missing(what.into())
    }
}
