//! Repository layer for database operations.
//!
//! Repository structs encapsulate database queries and keep the entities as
//! pure data models, following the Data Mapper pattern recommended by SeaORM.

pub mod collection;
pub mod task;

pub use collection::CollectionRepository;
pub use task::TaskRepository;
