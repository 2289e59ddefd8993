use crate::entities::{collection, task};
use crate::palette::CollectionColor;
use crate::validation::ValidTask;

/// Which mutation a completion or failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    CreateCollection,
    DeleteCollection,
    CreateTask,
}

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextCollection,
    PreviousCollection,
    ToggleExpanded,

    // Mutations issued by dialogs (payloads already validated)
    CreateCollection {
        name: String,
        color: CollectionColor,
    },
    DeleteCollection(i32),
    CreateTask(ValidTask),

    // Mutation outcomes reported by background jobs
    CollectionCreated(collection::Model),
    CollectionDeleted(i32),
    TaskCreated(task::Model),
    MutationFailed {
        op: MutationOp,
        message: String,
    },

    // Full-view refresh
    RefreshData,
    DataLoaded {
        collections: Vec<collection::Model>,
        tasks: Vec<task::Model>,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    ShowToast {
        kind: ToastKind,
        message: String,
    },
    CycleTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    /// Slide-over form collecting name + color for a new collection.
    CollectionCreate,
    /// Modal form scoped to one collection, id pre-filled and not editable.
    TaskCreate {
        collection_id: i32,
        collection_name: String,
        collection_color: CollectionColor,
    },
    /// Two-stage "are you sure" gate before the delete mutation fires.
    DeleteConfirmation {
        collection_id: i32,
        collection_name: String,
    },
    Help,
}
