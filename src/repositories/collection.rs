//! Collection repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};

use crate::entities::collection;
use crate::utils::datetime;

/// Repository for collection-related database operations.
pub struct CollectionRepository;

impl CollectionRepository {
    /// Get all collections, oldest first.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<collection::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(collection::Entity::find()
            .order_by_asc(collection::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single collection by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<collection::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(collection::Entity::find()
            .filter(collection::Column::Id.eq(id))
            .one(conn)
            .await?)
    }

    /// Insert a new collection, returning the stored model with its assigned id.
    pub async fn insert<C>(conn: &C, name: &str, color: &str) -> Result<collection::Model>
    where
        C: ConnectionTrait,
    {
        let model = collection::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            color: ActiveValue::Set(color.to_string()),
            created_at: ActiveValue::Set(datetime::format_today()),
        };
        Ok(model.insert(conn).await?)
    }

    /// Delete a collection. Its tasks go with it via the cascade relation.
    pub async fn delete<C>(conn: &C, model: collection::Model) -> Result<()>
    where
        C: ConnectionTrait,
    {
        model.delete(conn).await?;
        Ok(())
    }
}
