//! Task repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::task;
use crate::utils::datetime;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get all tasks across all collections, in creation order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find().order_by_asc(task::Column::Id).all(conn).await?)
    }

    /// Insert a new task, returning the stored model with its assigned id.
    pub async fn insert<C>(
        conn: &C,
        collection_id: i32,
        content: &str,
        expires_at: Option<String>,
    ) -> Result<task::Model>
    where
        C: ConnectionTrait,
    {
        let model = task::ActiveModel {
            id: ActiveValue::NotSet,
            collection_id: ActiveValue::Set(collection_id),
            content: ActiveValue::Set(content.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(datetime::format_today()),
            is_completed: ActiveValue::Set(false),
        };
        Ok(model.insert(conn).await?)
    }

    /// Delete every task belonging to a collection. Used by the cascade when
    /// the collection itself is deleted.
    pub async fn delete_for_collection<C>(conn: &C, collection_id: i32) -> Result<()>
    where
        C: ConnectionTrait,
    {
        task::Entity::delete_many()
            .filter(task::Column::CollectionId.eq(collection_id))
            .exec(conn)
            .await?;
        Ok(())
    }
}
