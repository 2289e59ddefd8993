//! The root application component.
//!
//! Owns the component tree and the action pipeline. Key events go to the
//! open dialog when one is visible, otherwise to global shortcuts and then
//! the collection list. Every resulting action runs through each component's
//! `update` before the app handles what remains: spawning mutations, reacting
//! to their outcomes with a toast plus a single full-view refresh, and
//! updating shared state like the theme.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::{
    ERROR_COLLECTION_CREATE_FAILED, ERROR_COLLECTION_DELETE_FAILED, ERROR_TASK_CREATE_FAILED,
    MIN_TERMINAL_WIDTH, SUCCESS_COLLECTION_CREATED, SUCCESS_COLLECTION_DELETED, SUCCESS_TASK_CREATED,
};
use crate::service::MutationService;
use crate::theme::ThemeService;
use crate::ui::components::{CollectionsList, DialogComponent, StatusBar, ToastStack};
use crate::ui::core::{Action, Component, DialogType, EventType, JobManager, MutationOp, ToastKind};
use crate::ui::layout::LayoutManager;
use crate::validation::ValidCollection;

pub struct AppComponent {
    service: MutationService,
    theme_service: ThemeService,
    job_manager: JobManager,
    action_receiver: mpsc::UnboundedReceiver<Action>,

    collections_list: CollectionsList,
    dialog: DialogComponent,
    toasts: ToastStack,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: MutationService, theme_service: ThemeService, config: &Config) -> Self {
        let (mut job_manager, action_receiver) = JobManager::new();
        job_manager.spawn_data_load(service.clone());

        let mut collections_list = CollectionsList::new();
        collections_list.set_date_format(config.display.date_format.clone());

        Self {
            service,
            theme_service,
            job_manager,
            action_receiver,
            collections_list,
            dialog: DialogComponent::new(),
            toasts: ToastStack::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => {
                let action = self.route_key(key);
                self.handle_app_action(action);
            }
            EventType::Tick => {
                self.process_background_actions();
                self.toasts.expire();
                self.job_manager.cleanup_finished_jobs();
            }
            EventType::Resize(..) | EventType::Other => {}
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        match self.handle_global_key(key) {
            Action::None => self.collections_list.handle_key_events(key),
            action => action,
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('A'), _) => Action::ShowDialog(DialogType::CollectionCreate),
            (KeyCode::Char('t'), _) => Action::CycleTheme,
            (KeyCode::Char('r'), _) => Action::RefreshData,
            (KeyCode::Char('?'), _) => Action::ShowDialog(DialogType::Help),
            _ => Action::None,
        }
    }

    /// Drain completed background work. Called on every tick.
    fn process_background_actions(&mut self) {
        while let Ok(action) = self.action_receiver.try_recv() {
            self.handle_app_action(action);
        }
    }

    fn handle_app_action(&mut self, action: Action) {
        // Give every component a look before the app-level handling
        let action = self.dialog.update(action);
        let action = self.collections_list.update(action);
        let action = self.toasts.update(action);

        match action {
            Action::CreateCollection { name, color } => {
                self.job_manager
                    .spawn_create_collection(self.service.clone(), ValidCollection { name, color });
            }
            Action::DeleteCollection(id) => {
                self.job_manager.spawn_delete_collection(self.service.clone(), id);
            }
            Action::CreateTask(valid) => {
                self.job_manager.spawn_create_task(self.service.clone(), valid);
            }

            // Each successful mutation notifies and refreshes the view once
            Action::CollectionCreated(_) => {
                self.toasts.push(ToastKind::Success, SUCCESS_COLLECTION_CREATED.to_string());
                self.job_manager.spawn_data_load(self.service.clone());
            }
            Action::CollectionDeleted(_) => {
                self.toasts.push(ToastKind::Success, SUCCESS_COLLECTION_DELETED.to_string());
                self.job_manager.spawn_data_load(self.service.clone());
            }
            Action::TaskCreated(_) => {
                self.toasts.push(ToastKind::Success, SUCCESS_TASK_CREATED.to_string());
                self.job_manager.spawn_data_load(self.service.clone());
            }
            Action::MutationFailed { op, message } => {
                let prefix = match op {
                    MutationOp::CreateCollection => ERROR_COLLECTION_CREATE_FAILED,
                    MutationOp::DeleteCollection => ERROR_COLLECTION_DELETE_FAILED,
                    MutationOp::CreateTask => ERROR_TASK_CREATE_FAILED,
                };
                self.toasts
                    .push(ToastKind::Destructive, format!("{prefix}: {message}"));
            }

            Action::RefreshData => {
                self.job_manager.spawn_data_load(self.service.clone());
            }
            Action::DataLoaded { collections, tasks } => {
                self.collections_list.update_data(collections, tasks);
            }

            Action::CycleTheme => {
                self.theme_service.cycle_mode();
                log::info!("Theme mode set to {}", self.theme_service.mode());
            }
            Action::Quit => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let theme = self.theme_service.theme();

        if f.area().width < MIN_TERMINAL_WIDTH {
            let warning = ratatui::widgets::Paragraph::new("Terminal too narrow")
                .style(ratatui::style::Style::default().fg(theme.destructive));
            f.render_widget(warning, f.area());
            return;
        }

        let chunks = LayoutManager::main_layout(f.area());

        self.collections_list.render(f, chunks[0], &theme);
        StatusBar::render(
            f,
            chunks[1],
            &theme,
            self.theme_service.mode(),
            self.job_manager.job_count() > 0,
        );

        // Overlays draw on top of the full frame
        self.dialog.render(f, f.area(), &theme);
        self.toasts.render(f, f.area(), &theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LocalBackend;
    use crate::palette::CollectionColor;
    use crate::storage::LocalStorage;
    use crate::theme::ThemeMode;
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tokio::time::{timeout, Duration};

    async fn test_app() -> AppComponent {
        let storage = LocalStorage::new_in_memory().await.unwrap();
        let backend = Arc::new(LocalBackend::new(Arc::new(Mutex::new(storage))));
        let service = MutationService::new(backend);
        AppComponent::new(service, ThemeService::new(ThemeMode::Dark), &Config::default())
    }

    async fn next_background_action(app: &mut AppComponent) -> Action {
        timeout(Duration::from_secs(2), app.action_receiver.recv())
            .await
            .expect("background job did not report")
            .expect("action channel closed")
    }

    #[tokio::test]
    async fn test_create_collection_pipeline() {
        let mut app = test_app().await;
        // Initial data load
        let loaded = next_background_action(&mut app).await;
        assert!(matches!(loaded, Action::DataLoaded { .. }));

        app.handle_app_action(Action::CreateCollection {
            name: "Groceries".to_string(),
            color: CollectionColor::Poppy,
        });

        let outcome = next_background_action(&mut app).await;
        assert!(matches!(outcome, Action::CollectionCreated(_)));

        // Success notifies and triggers exactly one refresh
        app.handle_app_action(outcome);
        assert!(!app.toasts.is_empty());
        let refreshed = next_background_action(&mut app).await;
        match refreshed {
            Action::DataLoaded { collections, .. } => {
                assert_eq!(collections.len(), 1);
                assert_eq!(collections[0].name, "Groceries");
            }
            other => panic!("expected DataLoaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_missing_collection_reports_failure() {
        let mut app = test_app().await;
        let _ = next_background_action(&mut app).await;

        app.handle_app_action(Action::DeleteCollection(999));
        let outcome = next_background_action(&mut app).await;
        assert!(matches!(
            outcome,
            Action::MutationFailed {
                op: MutationOp::DeleteCollection,
                ..
            }
        ));

        // Failure surfaces as a destructive toast, list returns to idle
        app.handle_app_action(outcome);
        assert!(!app.toasts.is_empty());
        assert!(!app.collections_list.is_deleting());
    }

    #[tokio::test]
    async fn test_task_created_notifies_and_refreshes_once() {
        let mut app = test_app().await;
        let _ = next_background_action(&mut app).await;

        let jobs_before = app.job_manager.job_count();
        app.handle_app_action(Action::TaskCreated(crate::entities::task::Model {
            id: 1,
            collection_id: 1,
            content: "Water the plants".to_string(),
            expires_at: None,
            created_at: "2026-08-24".to_string(),
            is_completed: false,
        }));

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.job_manager.job_count(), jobs_before + 1);
    }

    #[tokio::test]
    async fn test_quit_action() {
        let mut app = test_app().await;
        assert!(!app.should_quit());
        app.handle_app_action(Action::Quit);
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_cycle_theme_action() {
        let mut app = test_app().await;
        let before = app.theme_service.mode();
        app.handle_app_action(Action::CycleTheme);
        assert_ne!(app.theme_service.mode(), before);
    }
}
