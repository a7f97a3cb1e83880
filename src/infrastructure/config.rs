use std::env;

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db?mode=ro";
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const PIX_KEY_PLACEHOLDER: &str = "SUA_CHAVE_PIX_AQUI";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub pix_key: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            tmdb_api_key: get("TMDB_API_KEY"),
            tmdb_base_url: get("TMDB_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            pix_key: get("PIX_KEY").unwrap_or_else(|| PIX_KEY_PLACEHOLDER.to_string()),
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
        }
    }

    /// Log each missing credential once. Called from `main` only.
    pub fn warn_missing_keys(&self) {
        if self.tmdb_api_key.is_none() {
            tracing::warn!("TMDB_API_KEY not set: catalog replies will omit title details");
        }
        if self.gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set: support answers will be unavailable");
        }
    }
}
