use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;

use crate::domain::CatalogRepository;
use crate::infrastructure::{SeaOrmCatalogRepository, UnavailableCatalogRepository};

/// Open the catalog store. The catalog is populated by an external process;
/// this service only reads from it.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Check that the catalog table is readable.
pub async fn probe_catalog(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.query_one(Statement::from_string(
        db.get_database_backend(),
        "SELECT id FROM catalog LIMIT 1".to_owned(),
    ))
    .await?;
    Ok(())
}

/// Open and probe the catalog, falling back to a store that fails every
/// query so catalog requests surface an error instead of "not found".
pub async fn open_catalog(database_url: &str) -> Arc<dyn CatalogRepository> {
    let db = match init_db(database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open catalog at {}: {}", database_url, e);
            return Arc::new(UnavailableCatalogRepository::new(e.to_string()));
        }
    };

    if let Err(e) = probe_catalog(&db).await {
        tracing::error!("Catalog table is not readable: {}", e);
        return Arc::new(UnavailableCatalogRepository::new(e.to_string()));
    }

    tracing::info!("Catalog store connected");
    Arc::new(SeaOrmCatalogRepository::new(db))
}

/// Create the catalog table. Used for local development databases and tests;
/// production catalogs are created by the ingestion process.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS catalog (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_catalog_title ON catalog(title)".to_owned(),
    ))
    .await?;

    Ok(())
}
