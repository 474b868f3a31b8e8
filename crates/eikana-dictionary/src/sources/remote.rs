use std::path::PathBuf;

use eikana_config::dictionary::DictionaryConfig;

use crate::types::{AcquireError, DictionarySource};

/// JSON dictionary fetched over HTTP and kept in the cache directory
pub struct RemoteDictionary {
    client: reqwest::Client,
    url: String,
    cache_path: PathBuf,
    offline: bool,
}

impl RemoteDictionary {
    pub fn new(url: impl Into<String>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            cache_path: cache_path.into(),
            offline: false,
        }
    }

    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(config.url.clone(), config.cached_path()).offline(config.offline)
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    async fn fetch(&self) -> Result<Vec<u8>, AcquireError> {
        tracing::info!("Downloading dictionary from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(AcquireError::HttpStatus {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(AcquireError::EmptyPayload(self.url.clone()));
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl DictionarySource for RemoteDictionary {
    fn is_available(&self) -> bool {
        self.cache_path.is_file()
    }

    async fn download(&self, force: bool) -> Result<PathBuf, AcquireError> {
        if self.is_available() && !force {
            tracing::debug!("Using cached dictionary at {}", self.cache_path.display());
            return Ok(self.cache_path.clone());
        }

        if self.offline {
            return Err(AcquireError::Offline(self.cache_path.display().to_string()));
        }

        let bytes = self.fetch().await?;

        if let Some(parent) = self.cache_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // write beside the target, then rename into place
        let partial = self.cache_path.with_extension("json.part");
        tokio::fs::write(&partial, &bytes).await?;
        tokio::fs::rename(&partial, &self.cache_path).await?;

        tracing::info!(
            "Saved dictionary ({} bytes) to {}",
            bytes.len(),
            self.cache_path.display()
        );

        Ok(self.cache_path.clone())
    }

    fn resolve_path(&self) -> PathBuf {
        self.cache_path.clone()
    }

    fn describe(&self) -> String {
        format!("{} (cached at {})", self.url, self.cache_path.display())
    }
}
