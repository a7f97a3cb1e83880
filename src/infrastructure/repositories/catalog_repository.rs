//! SeaORM implementation of CatalogRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};

use crate::domain::{CATALOG_MATCH_LIMIT, CatalogEntry, CatalogRepository, DomainError};
use crate::models::catalog::{Column, Entity as CatalogEntity};

/// SeaORM-based implementation of CatalogRepository
pub struct SeaOrmCatalogRepository {
    db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn find_matches(&self, term: &str) -> Result<Vec<CatalogEntry>, DomainError> {
        // SQLite LIKE is case-insensitive for ASCII only; no ORDER BY on purpose
        let pattern = LikeExpr::new(format!("%{}%", escape_like(term))).escape('\\');
        let rows = CatalogEntity::find()
            .filter(Expr::col(Column::Title).like(pattern))
            .limit(CATALOG_MATCH_LIMIT)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!("Catalog query failed for '{}': {}", term, e);
                DomainError::from(e)
            })?;

        Ok(rows.into_iter().map(CatalogEntry::from).collect())
    }
}

/// Makes `%`, `_` and the escape character itself match literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Stand-in installed when the catalog could not be opened at startup
pub struct UnavailableCatalogRepository {
    reason: String,
}

impl UnavailableCatalogRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CatalogRepository for UnavailableCatalogRepository {
    async fn find_matches(&self, term: &str) -> Result<Vec<CatalogEntry>, DomainError> {
        tracing::error!("Catalog unavailable, cannot search '{}': {}", term, self.reason);
        Err(DomainError::Database(format!(
            "catalog store unavailable: {}",
            self.reason
        )))
    }
}
