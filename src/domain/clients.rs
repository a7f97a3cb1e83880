//! Capability traits for the external services the bot talks to.
//!
//! The HTTP implementations live in `modules::integrations`; tests swap in
//! deterministic fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Which metadata endpoint a lookup is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

/// First-page search result, reduced to the fields the bot displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataHit {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

/// Movie/TV metadata lookup
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// False when no credentials are configured; callers skip the lookup.
    fn is_configured(&self) -> bool;

    /// Search scoped to `kind`. An empty vector is a legitimate "nothing found".
    async fn search(&self, kind: MediaKind, query: &str)
    -> Result<Vec<MetadataHit>, DomainError>;

    /// Number of seasons of a series, if the service reports it.
    async fn season_count(&self, id: i64) -> Result<Option<u32>, DomainError>;

    /// Absolute poster URL for a poster path returned by `search`.
    fn poster_url(&self, path: &str) -> String;
}

/// Generative text completion
#[async_trait]
pub trait Completion: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Returns the first candidate's text, `None` if the service answered
    /// without usable text.
    async fn complete(&self, instruction: &str, text: &str)
    -> Result<Option<String>, DomainError>;
}
