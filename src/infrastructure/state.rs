//! Application state containing the catalog store and the service clients

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{CatalogRepository, Completion, DomainError, MetadataLookup};
use crate::modules::integrations::{GeminiClient, TmdbClient};

/// Per-deployment values used when composing replies
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub pix_key: String,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only title index
    pub catalog: Arc<dyn CatalogRepository>,
    /// Movie/TV metadata service
    pub metadata: Arc<dyn MetadataLookup>,
    /// Generative text service for support and small talk
    pub completion: Arc<dyn Completion>,
    pub settings: Arc<BotSettings>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        metadata: Arc<dyn MetadataLookup>,
        completion: Arc<dyn Completion>,
        settings: BotSettings,
    ) -> Self {
        Self {
            catalog,
            metadata,
            completion,
            settings: Arc::new(settings),
        }
    }

    /// Wire the HTTP clients from configuration around an opened catalog
    pub fn from_config(
        config: &Config,
        catalog: Arc<dyn CatalogRepository>,
    ) -> Result<Self, DomainError> {
        let metadata = TmdbClient::new(config.tmdb_api_key.clone(), config.tmdb_base_url.clone())?;
        let completion = GeminiClient::new(
            config.gemini_api_key.clone(),
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
        )?;

        Ok(Self::new(
            catalog,
            Arc::new(metadata),
            Arc::new(completion),
            BotSettings {
                pix_key: config.pix_key.clone(),
            },
        ))
    }
}
