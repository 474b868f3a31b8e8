use std::path::{Path, PathBuf};
use std::sync::Arc;

use eikana_config::dictionary::DictionaryConfig;
use eikana_core::{ConversionRecord, ConvertOptions, LoadError};
use eikana_dictionary::{AcquireError, DictionarySource, source_from_config};
use tokio::sync::RwLock;

use crate::converter::{DictionaryOrigin, KatakanaConverter};
use crate::index::IndexedDictionary;
use crate::loader::JMdictLoader;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to load dictionary {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: LoadError,
    },

    #[error("Could not obtain dictionary: {0}")]
    Acquire(#[from] AcquireError),

    #[error("Index build task failed: {0}")]
    BuildTask(#[from] tokio::task::JoinError),
}

/// Owns the current converter and swaps in a fresh one on reload.
///
/// Callers hold an `Arc` to the converter they started with, so a reload never changes results
/// mid-query.
pub struct ConverterService {
    config: DictionaryConfig,
    source: Box<dyn DictionarySource>,
    current: RwLock<Option<Arc<KatakanaConverter>>>,
}

impl ConverterService {
    pub fn new(config: DictionaryConfig) -> Self {
        let source = source_from_config(&config);
        Self::with_source(config, source)
    }

    pub fn with_source(config: DictionaryConfig, source: Box<dyn DictionarySource>) -> Self {
        Self {
            config,
            source,
            current: RwLock::new(None),
        }
    }

    /// Load and index the dictionary once; later calls return the cached converter
    pub async fn initialize(&self) -> Result<Arc<KatakanaConverter>, ServiceError> {
        if let Some(converter) = self.current.read().await.as_ref() {
            return Ok(Arc::clone(converter));
        }

        let mut current = self.current.write().await;
        // another caller may have finished while we waited for the lock
        if let Some(converter) = current.as_ref() {
            return Ok(Arc::clone(converter));
        }

        let converter = Arc::new(self.load(false, true).await?);
        *current = Some(Arc::clone(&converter));
        Ok(converter)
    }

    /// Build a new converter (optionally re-downloading) and swap it in.
    /// If the dictionary cannot be obtained the current converter stays in place.
    pub async fn reload(&self, force_download: bool) -> Result<Arc<KatakanaConverter>, ServiceError> {
        let converter = Arc::new(self.load(force_download, false).await?);
        *self.current.write().await = Some(Arc::clone(&converter));
        tracing::info!("Dictionary reloaded");
        Ok(converter)
    }

    pub async fn convert(
        &self,
        text: &str,
        options: &ConvertOptions,
    ) -> Result<Vec<ConversionRecord>, ServiceError> {
        Ok(self.initialize().await?.convert(text, options))
    }

    pub async fn search_suggestions(
        &self,
        partial: &str,
        limit: usize,
    ) -> Result<Vec<String>, ServiceError> {
        Ok(self.initialize().await?.search_suggestions(partial, limit))
    }

    async fn load(
        &self,
        force_download: bool,
        sample_fallback: bool,
    ) -> Result<KatakanaConverter, ServiceError> {
        let origin = match self.source.download(force_download).await {
            Ok(path) => DictionaryOrigin::File(path),
            Err(e) if !sample_fallback => return Err(e.into()),
            Err(e) => {
                tracing::warn!(
                    "Could not obtain dictionary from {}: {e}. Falling back to the built-in sample",
                    self.source.describe()
                );
                DictionaryOrigin::Sample
            }
        };

        let additional = self.config.additional_paths.clone();
        let task_origin = origin.clone();

        // parsing and indexing a full JMdict is CPU-bound
        let index = tokio::task::spawn_blocking(move || -> Result<_, ServiceError> {
            let mut entries = match &task_origin {
                DictionaryOrigin::File(path) => {
                    JMdictLoader::load_from_file(path).map_err(|source| ServiceError::Load {
                        path: path.display().to_string(),
                        source,
                    })?
                }
                _ => JMdictLoader::load_sample().map_err(|source| ServiceError::Load {
                    path: "<built-in sample>".to_string(),
                    source,
                })?,
            };
            for path in &additional {
                entries = JMdictLoader::merge_file(entries, Path::new(path)).map_err(|source| {
                    ServiceError::Load {
                        path: path.clone(),
                        source,
                    }
                })?;
            }
            Ok(IndexedDictionary::build(entries))
        })
        .await??;

        Ok(KatakanaConverter::new(Arc::new(index), origin))
    }

    pub fn source_path(&self) -> PathBuf {
        self.source.resolve_path()
    }
}
