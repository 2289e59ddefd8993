//! Local storage module for collection and task persistence
//!
//! This module provides database operations using SeaORM for:
//! - Collections
//! - Tasks

pub mod db;

pub use db::LocalStorage;
