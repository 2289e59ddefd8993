use anyhow::Result;
use log::info;

use crate::backend::CreateCollectionArgs;
use crate::entities::collection;
use crate::service::MutationService;
use crate::validation::ValidCollection;

impl MutationService {
    /// Retrieve all collections, oldest first.
    pub async fn get_collections(&self) -> Result<Vec<collection::Model>> {
        self.backend().get_collections().await
    }

    /// Create a collection from a validated payload.
    pub async fn create_collection(&self, valid: ValidCollection) -> Result<collection::Model> {
        info!("Creating collection '{}' ({})", valid.name, valid.color);
        let created = self
            .backend()
            .create_collection(CreateCollectionArgs {
                name: valid.name,
                color: valid.color.name().to_string(),
            })
            .await?;
        info!("Collection created with id {}", created.id);
        Ok(created)
    }

    /// Delete a collection and all of its tasks.
    ///
    /// Idempotent from the caller's point of view: the mutation is issued
    /// exactly once per confirmation.
    pub async fn delete_collection(&self, id: i32) -> Result<()> {
        info!("Deleting collection {id}");
        self.backend().delete_collection(id).await
    }
}
