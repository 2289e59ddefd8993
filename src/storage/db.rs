use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::PathBuf;

use crate::entities;

/// Local SQLite storage for collections and tasks.
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the on-disk database under the platform data directory.
    pub async fn new() -> Result<Self> {
        let path = Self::database_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(&url).await
    }

    /// Open an in-memory database. Used by tests.
    pub async fn new_in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn connect(url: &str) -> Result<Self> {
        let conn = Database::connect(url)
            .await
            .with_context(|| format!("Failed to open database: {url}"))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    fn database_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("remindme").join("remindme.db"))
    }

    /// Create the tables if they do not exist yet.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut collections = schema.create_table_from_entity(entities::Collection);
        self.conn.execute(backend.build(collections.if_not_exists())).await?;

        let mut tasks = schema.create_table_from_entity(entities::Task);
        self.conn.execute(backend.build(tasks.if_not_exists())).await?;

        Ok(())
    }
}
