use thiserror::Error;

/// Why a content load did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The payload could not be retrieved (missing file, IO error, non-success response).
    #[error("transport error: {0}")]
    Transport(String),
    /// The payload arrived but could not be decoded.
    #[error("malformed payload: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
