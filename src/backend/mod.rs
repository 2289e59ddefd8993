//! Mutation backend boundary.
//!
//! The UI never mutates storage directly: every create or delete goes through
//! the [`MutationBackend`] trait as an opaque asynchronous call that either
//! resolves with the stored record or rejects with a [`BackendError`]. The
//! trait also carries the read operations the full-view refresh needs.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod local;

pub use local::LocalBackend;

use crate::entities::{collection, task};

/// Error type for backend operations.
///
/// The UI does not branch on these variants; a rejected mutation is reported
/// uniformly as a destructive toast. The variants exist for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Payload for `create_collection`. Built only from a validated draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollectionArgs {
    pub name: String,
    /// Palette color name, lowercase.
    pub color: String,
}

/// Payload for `create_task`. Built only from a validated draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskArgs {
    pub collection_id: i32,
    pub content: String,
    /// Expiration date in YYYY-MM-DD format, if any.
    pub expires_at: Option<String>,
}

/// The mutation collaborator consumed by the UI layer.
///
/// Calls either eventually resolve or reject; there is no client-initiated
/// abort and no retry. Callers are expected to refresh the full view after a
/// successful mutation instead of patching local state.
#[async_trait]
pub trait MutationBackend: Send + Sync {
    /// Retrieve all collections, oldest first.
    async fn get_collections(&self) -> Result<Vec<collection::Model>>;

    /// Retrieve all tasks, in creation order.
    async fn get_tasks(&self) -> Result<Vec<task::Model>>;

    /// Create a collection, returning the stored record with its assigned id.
    async fn create_collection(&self, args: CreateCollectionArgs) -> Result<collection::Model>;

    /// Delete a collection and, by cascade, all of its tasks.
    async fn delete_collection(&self, id: i32) -> Result<()>;

    /// Create a task inside an existing collection.
    async fn create_task(&self, args: CreateTaskArgs) -> Result<task::Model>;
}
