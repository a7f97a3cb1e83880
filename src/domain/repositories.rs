//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// Maximum number of rows a catalog lookup returns
pub const CATALOG_MATCH_LIMIT: u64 = 30;

/// A row of the pre-populated title index
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogEntry {
    pub title: String,
}

/// Read-only access to the catalog index
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Case-insensitive substring match on the title, at most
    /// [`CATALOG_MATCH_LIMIT`] rows, in whatever order the store returns them.
    /// `%` and `_` in `term` match literally.
    ///
    /// The SQLite store folds case for ASCII letters only: "chefão" finds
    /// "Chefão" but "CHEFÃO" does not. Accents are never folded.
    async fn find_matches(&self, term: &str) -> Result<Vec<CatalogEntry>, DomainError>;
}
