use std::path::PathBuf;

/// Where the dictionary file comes from
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Whether a usable file is already on disk
    fn is_available(&self) -> bool;

    /// Make the file available and return its path.
    /// With `force` an existing copy is replaced.
    async fn download(&self, force: bool) -> Result<PathBuf, AcquireError>;

    /// Path the dictionary is (or will be) stored at
    fn resolve_path(&self) -> PathBuf;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP {status} while downloading {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Downloaded dictionary from {0} is empty")]
    EmptyPayload(String),

    #[error("Dictionary not found: {0}")]
    NotFound(String),

    #[error("Offline mode, no cached dictionary at {0}")]
    Offline(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
