//! Dialog orchestration.
//!
//! At most one overlay is visible at a time. This component owns the
//! ephemeral form state behind the create-collection and create-task
//! overlays, routes key events to whichever dialog is open, and reacts to
//! mutation outcomes: success closes the owning form and clears it, failure
//! re-enables the form with its values intact so the user can retry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::dialogs::{
    collection_sheet::{self, CollectionSheetState},
    confirm_dialog, help_dialog,
    task_dialog::{self, TaskDialogState},
};
use crate::theme::Theme;
use crate::ui::core::{Action, Component, DialogType, MutationOp};

#[derive(Default)]
pub struct DialogComponent {
    dialog: Option<DialogType>,
    collection_form: CollectionSheetState,
    task_form: Option<TaskDialogState>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.dialog.is_some()
    }

    fn open(&mut self, dialog: DialogType) {
        if let DialogType::TaskCreate {
            collection_id,
            collection_name,
            collection_color,
        } = &dialog
        {
            self.task_form = Some(TaskDialogState::new(
                *collection_id,
                collection_name.clone(),
                *collection_color,
            ));
        }
        self.dialog = Some(dialog);
    }

    fn close(&mut self) {
        match self.dialog.take() {
            Some(DialogType::CollectionCreate) => self.collection_form.reset(),
            Some(DialogType::TaskCreate { .. }) => self.task_form = None,
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent, collection_id: i32) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                // Close first so the mutation fires exactly once even if
                // Enter repeats before the next frame.
                self.dialog = None;
                Action::DeleteCollection(collection_id)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => Action::HideDialog,
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog.clone() {
            None => Action::None,
            Some(DialogType::CollectionCreate) => self.collection_form.handle_key_events(key),
            Some(DialogType::TaskCreate { .. }) => match self.task_form.as_mut() {
                Some(form) => form.handle_key_events(key),
                None => Action::HideDialog,
            },
            Some(DialogType::DeleteConfirmation { collection_id, .. }) => {
                self.handle_confirmation_key(key, collection_id)
            }
            Some(DialogType::Help) => Action::HideDialog,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog) => {
                self.open(dialog);
                Action::None
            }
            Action::HideDialog => {
                self.close();
                Action::None
            }
            Action::CollectionCreated(model) => {
                if matches!(self.dialog, Some(DialogType::CollectionCreate)) {
                    self.close();
                }
                Action::CollectionCreated(model)
            }
            Action::TaskCreated(model) => {
                if matches!(self.dialog, Some(DialogType::TaskCreate { .. })) {
                    self.close();
                }
                Action::TaskCreated(model)
            }
            Action::MutationFailed { op, message } => {
                match op {
                    MutationOp::CreateCollection => self.collection_form.submit_failed(),
                    MutationOp::CreateTask => {
                        if let Some(form) = self.task_form.as_mut() {
                            form.submit_failed();
                        }
                    }
                    MutationOp::DeleteCollection => {}
                }
                Action::MutationFailed { op, message }
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        match &self.dialog {
            Some(DialogType::CollectionCreate) => {
                collection_sheet::render(f, rect, &self.collection_form, theme);
            }
            Some(DialogType::TaskCreate { .. }) => {
                if let Some(form) = &self.task_form {
                    task_dialog::render(f, rect, form, theme);
                }
            }
            Some(DialogType::DeleteConfirmation { collection_name, .. }) => {
                confirm_dialog::render(f, rect, collection_name, theme);
            }
            Some(DialogType::Help) => help_dialog::render(f, rect, theme),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::CollectionColor;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(component: &mut DialogComponent, s: &str) {
        for c in s.chars() {
            component.handle_key_events(key(KeyCode::Char(c)));
        }
    }

    fn collection_model(id: i32, name: &str) -> crate::entities::collection::Model {
        crate::entities::collection::Model {
            id,
            name: name.to_string(),
            color: "sky".to_string(),
            created_at: "2026-08-24".to_string(),
        }
    }

    #[test]
    fn test_collection_round_trip_resets_form() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::CollectionCreate));
        assert!(component.is_visible());

        type_str(&mut component, "Groceries");
        component.handle_key_events(key(KeyCode::Tab));
        let action = component.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::CreateCollection { .. }));
        assert!(component.collection_form.submitting);

        component.update(Action::CollectionCreated(collection_model(1, "Groceries")));
        assert!(!component.is_visible());

        // Reopening shows a blank form
        component.update(Action::ShowDialog(DialogType::CollectionCreate));
        assert_eq!(component.collection_form.name.as_str(), "");
        assert_eq!(component.collection_form.color, None);
        assert!(!component.collection_form.submitting);
    }

    #[test]
    fn test_invalid_draft_blocks_submission() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::CollectionCreate));

        type_str(&mut component, "Work");
        let action = component.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::None));
        assert!(!component.collection_form.errors.is_empty());
        assert!(component.is_visible());
    }

    #[test]
    fn test_failure_keeps_form_open_with_values() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::CollectionCreate));
        type_str(&mut component, "Groceries");
        component.handle_key_events(key(KeyCode::Tab));
        component.handle_key_events(key(KeyCode::Enter));

        component.update(Action::MutationFailed {
            op: MutationOp::CreateCollection,
            message: "storage rejected".to_string(),
        });
        assert!(component.is_visible());
        assert_eq!(component.collection_form.name.as_str(), "Groceries");
        assert!(!component.collection_form.submitting);

        // Retry is possible
        let action = component.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::CreateCollection { .. }));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::CollectionCreate));
        type_str(&mut component, "abc");

        let action = component.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::HideDialog));
        component.update(action);
        assert!(!component.is_visible());

        // A second cancel is a no-op
        component.update(Action::HideDialog);
        assert!(!component.is_visible());
    }

    #[test]
    fn test_task_dialog_scoped_to_collection() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::TaskCreate {
            collection_id: 7,
            collection_name: "Groceries".to_string(),
            collection_color: CollectionColor::Poppy,
        }));

        type_str(&mut component, "Buy milk today");
        let action = component.handle_key_events(key(KeyCode::Enter));
        match action {
            Action::CreateTask(valid) => {
                assert_eq!(valid.collection_id, 7);
                assert_eq!(valid.content, "Buy milk today");
                assert_eq!(valid.expires_at, None);
            }
            other => panic!("expected CreateTask, got {other:?}"),
        }
    }

    #[test]
    fn test_task_dialog_cancel_is_idempotent() {
        let mut component = DialogComponent::new();
        let open = || Action::ShowDialog(DialogType::TaskCreate {
            collection_id: 7,
            collection_name: "Groceries".to_string(),
            collection_color: CollectionColor::Poppy,
        });

        component.update(open());
        type_str(&mut component, "half-typed");

        let action = component.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::HideDialog));
        component.update(action);
        assert!(!component.is_visible());
        assert!(component.task_form.is_none());

        // A second cancel is a no-op
        component.update(Action::HideDialog);
        assert!(!component.is_visible());

        // Reopening for the same collection shows a blank form, still bound
        component.update(open());
        let form = component.task_form.as_ref().unwrap();
        assert_eq!(form.collection_id, 7);
        assert_eq!(form.content.as_str(), "");
        assert_eq!(form.expires_at.as_str(), "");
        assert!(!form.submitting);
    }

    #[test]
    fn test_confirmation_fires_delete_once() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::DeleteConfirmation {
            collection_id: 3,
            collection_name: "Chores".to_string(),
        }));

        let action = component.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::DeleteCollection(3)));
        assert!(!component.is_visible());

        // A repeated Enter after the dialog closed reaches no dialog
        let action = component.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::None));
    }

    #[test]
    fn test_confirmation_cancel_does_not_delete() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::DeleteConfirmation {
            collection_id: 3,
            collection_name: "Chores".to_string(),
        }));

        let action = component.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::HideDialog));
        component.update(action);
        assert!(!component.is_visible());
    }

    #[test]
    fn test_double_submit_while_in_flight_is_ignored() {
        let mut component = DialogComponent::new();
        component.update(Action::ShowDialog(DialogType::CollectionCreate));
        type_str(&mut component, "Groceries");
        component.handle_key_events(key(KeyCode::Tab));

        let first = component.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(first, Action::CreateCollection { .. }));
        let second = component.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(second, Action::None));
    }
}
