//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Toast messages
pub const SUCCESS_COLLECTION_CREATED: &str = "Collection created successfully";
pub const SUCCESS_COLLECTION_DELETED: &str = "Collection deleted successfully";
pub const SUCCESS_TASK_CREATED: &str = "Task created successfully";
pub const ERROR_COLLECTION_CREATE_FAILED: &str = "Cannot create collection";
pub const ERROR_COLLECTION_DELETE_FAILED: &str = "Cannot delete collection";
pub const ERROR_TASK_CREATE_FAILED: &str = "Cannot create task";

// Empty states
pub const EMPTY_COLLECTION_MESSAGE: &str = "No tasks";
pub const EMPTY_LIST_MESSAGE: &str = "No collections yet. Press 'A' to create one.";

// Delete confirmation copy
pub const DELETE_CONFIRMATION_TITLE: &str = "Confirm Delete";
pub const DELETE_CONFIRMATION_BODY: &str =
    "This action cannot be undone. This will permanently delete the collection and all of its tasks.";

// Expiration placeholder shown when a task has no expiration date
pub const NO_EXPIRATION_LABEL: &str = "No expiration";

// How long a toast stays on screen
pub const TOAST_LIFETIME_SECS: u64 = 4;

// UI Layout Constants
/// Maximum width of the collection list in columns
pub const LIST_MAX_WIDTH: u16 = 70;
/// Minimum terminal width to render anything useful
pub const MIN_TERMINAL_WIDTH: u16 = 40;
