//! Data service module for the RemindMe application.
//!
//! This module provides the [`MutationService`] struct, the application-facing
//! data layer sitting between the UI and the mutation backend. It forwards
//! already-validated payloads to the backend and serves the read queries the
//! full-view refresh relies on.
//!
//! The service performs no validation of its own: the UI always runs the
//! schemas in [`crate::validation`] synchronously before issuing a mutation,
//! so no invalid payload is ever sent.

pub mod collections;
pub mod tasks;

use std::sync::Arc;

use crate::backend::MutationBackend;

/// Service that owns the mutation backend handle.
///
/// Cloning is cheap; clones share the same backend. All operations are
/// asynchronous and either eventually resolve or reject; there is no
/// timeout or cancellation on an issued call.
#[derive(Clone)]
pub struct MutationService {
    backend: Arc<dyn MutationBackend>,
}

impl MutationService {
    pub fn new(backend: Arc<dyn MutationBackend>) -> Self {
        Self { backend }
    }

    pub(crate) fn backend(&self) -> &Arc<dyn MutationBackend> {
        &self.backend
    }
}
