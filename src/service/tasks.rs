use anyhow::Result;
use log::info;

use crate::backend::CreateTaskArgs;
use crate::entities::task;
use crate::service::MutationService;
use crate::utils::datetime;
use crate::validation::ValidTask;

impl MutationService {
    /// Retrieve all tasks across all collections, in creation order.
    pub async fn get_tasks(&self) -> Result<Vec<task::Model>> {
        self.backend().get_tasks().await
    }

    /// Create a task from a validated payload.
    pub async fn create_task(&self, valid: ValidTask) -> Result<task::Model> {
        info!(
            "Creating task in collection {} (expires: {})",
            valid.collection_id,
            valid
                .expires_at
                .map(datetime::format_ymd)
                .unwrap_or_else(|| "never".to_string())
        );
        let created = self
            .backend()
            .create_task(CreateTaskArgs {
                collection_id: valid.collection_id,
                content: valid.content,
                expires_at: valid.expires_at.map(datetime::format_ymd),
            })
            .await?;
        info!("Task created with id {}", created.id);
        Ok(created)
    }
}
