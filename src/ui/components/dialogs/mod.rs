//! Dialog rendering modules.
//!
//! Each submodule renders one overlay; the state they render from lives in
//! [`crate::ui::components::DialogComponent`].

pub mod collection_sheet;
pub mod common;
pub mod confirm_dialog;
pub mod help_dialog;
pub mod task_dialog;
