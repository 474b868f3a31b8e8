use std::path::PathBuf;

use crate::types::{AcquireError, DictionarySource};

/// A dictionary file the user points at directly
pub struct LocalDictionary {
    path: PathBuf,
}

impl LocalDictionary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl DictionarySource for LocalDictionary {
    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    async fn download(&self, _force: bool) -> Result<PathBuf, AcquireError> {
        if self.is_available() {
            Ok(self.path.clone())
        } else {
            Err(AcquireError::NotFound(self.path.display().to_string()))
        }
    }

    fn resolve_path(&self) -> PathBuf {
        self.path.clone()
    }

    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        std::fs::write(&path, "[]").unwrap();

        let source = LocalDictionary::new(&path);
        assert!(source.is_available());
        assert_eq!(source.download(true).await.unwrap(), path);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalDictionary::new(dir.path().join("nope.json"));
        assert!(!source.is_available());
        assert!(matches!(
            source.download(false).await,
            Err(AcquireError::NotFound(_))
        ));
    }
}
