//! Core UI functionality for the RemindMe application.
//!
//! The UI follows a component-based architecture:
//!
//! 1. **Components** implement the [`Component`] trait for consistent
//!    event handling and rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are polled through the [`EventHandler`]
//! 4. **Background jobs** (mutations, data loads) run through the
//!    [`JobManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod job_manager;

pub use actions::{Action, DialogType, MutationOp, ToastKind};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use job_manager::{JobId, JobManager};
