use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::{Action, MutationOp, ToastKind};
use crate::service::MutationService;
use crate::validation::{ValidCollection, ValidTask};

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs mutations and data loads on background tokio tasks.
///
/// Each job reports its outcome as one or more [`Action`]s over an unbounded
/// channel; the app drains the channel on ticks. A mutation job sends exactly
/// one completion action (success or failure).
pub struct JobManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl JobManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> JobId {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        self.jobs.insert(
            job_id,
            BackgroundJob {
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        job_id
    }

    /// Load the full view (all collections, all tasks) from the backend.
    pub fn spawn_data_load(&mut self, service: MutationService) -> JobId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match (service.get_collections().await, service.get_tasks().await) {
                (Ok(collections), Ok(tasks)) => {
                    let _ = action_sender.send(Action::DataLoaded { collections, tasks });
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Failed to load data: {e}");
                    let _ = action_sender.send(Action::ShowToast {
                        kind: ToastKind::Destructive,
                        message: format!("Failed to load data: {e}"),
                    });
                }
            }
        });

        self.register(handle, "Loading data".to_string())
    }

    /// Issue the create-collection mutation with an already-validated payload.
    pub fn spawn_create_collection(&mut self, service: MutationService, valid: ValidCollection) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = format!("Create collection '{}'", valid.name);

        let handle = tokio::spawn(async move {
            let action = match service.create_collection(valid).await {
                Ok(model) => Action::CollectionCreated(model),
                Err(e) => Action::MutationFailed {
                    op: MutationOp::CreateCollection,
                    message: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Issue the delete-collection mutation. Called exactly once per
    /// confirmation; the caller guards against overlapping deletes.
    pub fn spawn_delete_collection(&mut self, service: MutationService, id: i32) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = format!("Delete collection {id}");

        let handle = tokio::spawn(async move {
            let action = match service.delete_collection(id).await {
                Ok(()) => Action::CollectionDeleted(id),
                Err(e) => Action::MutationFailed {
                    op: MutationOp::DeleteCollection,
                    message: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Issue the create-task mutation with an already-validated payload.
    pub fn spawn_create_task(&mut self, service: MutationService, valid: ValidTask) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = format!("Create task in collection {}", valid.collection_id);

        let handle = tokio::spawn(async move {
            let action = match service.create_task(valid).await {
                Ok(model) => Action::TaskCreated(model),
                Err(e) => Action::MutationFailed {
                    op: MutationOp::CreateTask,
                    message: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Drop bookkeeping for jobs whose tasks have finished.
    pub fn cleanup_finished_jobs(&mut self) -> usize {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for id in &finished {
            self.jobs.remove(id);
        }
        finished.len()
    }

    /// Number of jobs still running.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn cancel_all_jobs(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
    }
}

impl Drop for JobManager {
    fn drop(&mut self) {
        self.cancel_all_jobs();
    }
}
