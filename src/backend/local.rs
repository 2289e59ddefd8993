//! SQLite-backed mutation backend.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::TransactionTrait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{BackendError, CreateCollectionArgs, CreateTaskArgs, MutationBackend};
use crate::entities::{collection, task};
use crate::repositories::{CollectionRepository, TaskRepository};
use crate::storage::LocalStorage;

/// Mutation backend persisting to the local SQLite database.
#[derive(Clone)]
pub struct LocalBackend {
    storage: Arc<Mutex<LocalStorage>>,
}

impl LocalBackend {
    pub fn new(storage: Arc<Mutex<LocalStorage>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl MutationBackend for LocalBackend {
    async fn get_collections(&self) -> Result<Vec<collection::Model>> {
        let storage = self.storage.lock().await;
        CollectionRepository::get_all(&storage.conn).await
    }

    async fn get_tasks(&self) -> Result<Vec<task::Model>> {
        let storage = self.storage.lock().await;
        TaskRepository::get_all(&storage.conn).await
    }

    async fn create_collection(&self, args: CreateCollectionArgs) -> Result<collection::Model> {
        let storage = self.storage.lock().await;
        CollectionRepository::insert(&storage.conn, &args.name, &args.color)
            .await
            .map_err(|e| BackendError::Storage(e.to_string()).into())
    }

    async fn delete_collection(&self, id: i32) -> Result<()> {
        let storage = self.storage.lock().await;

        let model = CollectionRepository::get_by_id(&storage.conn, id)
            .await?
            .ok_or_else(|| BackendError::NotFound(format!("collection {id}")))?;

        // Cascade explicitly inside a transaction rather than relying on the
        // connection having foreign_keys enabled.
        let txn = storage.conn.begin().await?;
        TaskRepository::delete_for_collection(&txn, id).await?;
        CollectionRepository::delete(&txn, model).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<task::Model> {
        let storage = self.storage.lock().await;

        // A task always belongs to an existing collection.
        if CollectionRepository::get_by_id(&storage.conn, args.collection_id)
            .await?
            .is_none()
        {
            return Err(BackendError::NotFound(format!("collection {}", args.collection_id)).into());
        }

        TaskRepository::insert(&storage.conn, args.collection_id, &args.content, args.expires_at)
            .await
            .map_err(|e| BackendError::Storage(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn backend() -> LocalBackend {
        let storage = LocalStorage::new_in_memory().await.unwrap();
        LocalBackend::new(Arc::new(Mutex::new(storage)))
    }

    fn collection_args(name: &str, color: &str) -> CreateCollectionArgs {
        CreateCollectionArgs {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_collections() {
        let backend = backend().await;

        let created = backend
            .create_collection(collection_args("Chores", "sky"))
            .await
            .unwrap();
        assert!(created.id >= 0);
        assert_eq!(created.name, "Chores");
        assert_eq!(created.color, "sky");

        let all = backend.get_collections().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_task_in_collection() {
        let backend = backend().await;
        let coll = backend
            .create_collection(collection_args("Groceries", "poppy"))
            .await
            .unwrap();

        let created = backend
            .create_task(CreateTaskArgs {
                collection_id: coll.id,
                content: "Buy milk today".to_string(),
                expires_at: Some("2026-09-01".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(created.collection_id, coll.id);
        assert_eq!(created.expires_at.as_deref(), Some("2026-09-01"));
        assert!(!created.is_completed);

        let tasks = backend.get_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_create_task_requires_existing_collection() {
        let backend = backend().await;

        let result = backend
            .create_task(CreateTaskArgs {
                collection_id: 999,
                content: "Orphaned task content".to_string(),
                expires_at: None,
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_collection_cascades_tasks() {
        let backend = backend().await;
        let coll = backend
            .create_collection(collection_args("Chores", "firtree"))
            .await
            .unwrap();
        backend
            .create_task(CreateTaskArgs {
                collection_id: coll.id,
                content: "Water the plants".to_string(),
                expires_at: None,
            })
            .await
            .unwrap();

        backend.delete_collection(coll.id).await.unwrap();

        assert!(backend.get_collections().await.unwrap().is_empty());
        assert!(backend.get_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_collection_fails() {
        let backend = backend().await;
        let result = backend.delete_collection(42).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_tasks_keep_creation_order() {
        let backend = backend().await;
        let coll = backend
            .create_collection(collection_args("Reading list", "powder"))
            .await
            .unwrap();

        for content in ["First book to read", "Second book to read", "Third book to read"] {
            backend
                .create_task(CreateTaskArgs {
                    collection_id: coll.id,
                    content: content.to_string(),
                    expires_at: None,
                })
                .await
                .unwrap();
        }

        let tasks = backend.get_tasks().await.unwrap();
        let contents: Vec<_> = tasks.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["First book to read", "Second book to read", "Third book to read"]
        );
    }
}
