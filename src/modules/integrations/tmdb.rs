//! TMDB (The Movie Database) client.
//!
//! Search is scoped to movies or TV shows, always in pt-BR and with adult
//! titles excluded. TV lookups can follow up with a detail call for the
//! season count.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{DomainError, MediaKind, MetadataHit, MetadataLookup};

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
const TMDB_LANGUAGE: &str = "pt-BR";
const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchResult {
    id: i64,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbTvDetails {
    number_of_seasons: Option<u32>,
}

impl From<TmdbSearchResult> for MetadataHit {
    fn from(r: TmdbSearchResult) -> Self {
        MetadataHit {
            id: r.id,
            title: r.title,
            name: r.name,
            overview: r.overview,
            poster_path: r.poster_path,
            release_date: r.release_date,
            first_air_date: r.first_air_date,
        }
    }
}

pub struct TmdbClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn api_key(&self) -> Result<&str, DomainError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| DomainError::Validation("TMDB API key not configured".to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self.client.get(&url).query(params).send().await?;

        if !resp.status().is_success() {
            return Err(DomainError::External(format!(
                "TMDB {} returned status: {}",
                path,
                resp.status()
            )));
        }

        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl MetadataLookup for TmdbClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
    ) -> Result<Vec<MetadataHit>, DomainError> {
        let path = match kind {
            MediaKind::Movie => "/search/movie",
            MediaKind::Series => "/search/tv",
        };
        tracing::debug!("Searching TMDB {} for '{}'", path, query);

        let params = [
            ("api_key", self.api_key()?),
            ("query", query),
            ("language", TMDB_LANGUAGE),
            ("include_adult", "false"),
        ];

        let response: TmdbSearchResponse = self.get_json(path, &params).await.map_err(|e| {
            tracing::error!("TMDB search failed for '{}': {}", query, e);
            e
        })?;

        Ok(response.results.into_iter().map(MetadataHit::from).collect())
    }

    async fn season_count(&self, id: i64) -> Result<Option<u32>, DomainError> {
        let params = [("api_key", self.api_key()?), ("language", TMDB_LANGUAGE)];
        let details: TmdbTvDetails = self.get_json(&format!("/tv/{}", id), &params).await?;
        Ok(details.number_of_seasons)
    }

    fn poster_url(&self, path: &str) -> String {
        format!("{}{}", TMDB_IMAGE_BASE, path)
    }
}
