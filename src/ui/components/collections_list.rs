//! The collection list: one card per collection.
//!
//! Owns the per-card UI state the cards themselves render from: which card is
//! selected, which are collapsed (cards start expanded), and which collection
//! has a delete mutation in flight. A delete already in flight blocks further
//! delete confirmations for that collection until it resolves.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};
use std::collections::HashSet;
use std::str::FromStr;

use super::collection_card::CollectionCard;
use crate::constants::EMPTY_LIST_MESSAGE;
use crate::entities::{collection, task};
use crate::palette::CollectionColor;
use crate::theme::Theme;
use crate::ui::core::{Action, Component, DialogType, MutationOp};
use crate::ui::layout::LayoutManager;

#[derive(Default)]
pub struct CollectionsList {
    collections: Vec<collection::Model>,
    tasks: Vec<task::Model>,
    selected: usize,
    /// Ids of collapsed collections; cards are expanded by default.
    collapsed: HashSet<i32>,
    /// Collection id whose delete mutation is in flight, if any.
    deleting: Option<i32>,
    scroll_offset: usize,
    date_format: String,
}

impl CollectionsList {
    pub fn new() -> Self {
        Self {
            date_format: crate::utils::datetime::DATE_FORMAT.to_string(),
            ..Self::default()
        }
    }

    pub fn set_date_format(&mut self, format: String) {
        self.date_format = format;
    }

    pub fn update_data(&mut self, collections: Vec<collection::Model>, tasks: Vec<task::Model>) {
        self.collections = collections;
        self.tasks = tasks;
        if self.selected >= self.collections.len() {
            self.selected = self.collections.len().saturating_sub(1);
        }
        // Forget collapse state for collections that no longer exist
        let ids: HashSet<i32> = self.collections.iter().map(|c| c.id).collect();
        self.collapsed.retain(|id| ids.contains(id));
    }

    pub fn selected_collection(&self) -> Option<&collection::Model> {
        self.collections.get(self.selected)
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    fn tasks_for(&self, collection_id: i32) -> Vec<&task::Model> {
        self.tasks.iter().filter(|t| t.collection_id == collection_id).collect()
    }

    fn toggle_expanded(&mut self) {
        if let Some(collection) = self.collections.get(self.selected) {
            let id = collection.id;
            if !self.collapsed.remove(&id) {
                self.collapsed.insert(id);
            }
        }
    }

    fn open_task_dialog(&self) -> Action {
        match self.selected_collection() {
            Some(collection) => Action::ShowDialog(DialogType::TaskCreate {
                collection_id: collection.id,
                collection_name: collection.name.clone(),
                collection_color: CollectionColor::from_str(&collection.color)
                    .unwrap_or(CollectionColor::Sky),
            }),
            None => Action::None,
        }
    }

    fn open_delete_confirmation(&self) -> Action {
        let Some(collection) = self.selected_collection() else {
            return Action::None;
        };
        // One outstanding delete at a time
        if self.deleting.is_some() {
            log::warn!("Delete already in flight, ignoring delete request");
            return Action::None;
        }
        Action::ShowDialog(DialogType::DeleteConfirmation {
            collection_id: collection.id,
            collection_name: collection.name.clone(),
        })
    }
}

impl Component for CollectionsList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextCollection,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousCollection,
            KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleExpanded,
            KeyCode::Char('n') => self.open_task_dialog(),
            KeyCode::Char('d') => self.open_delete_confirmation(),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextCollection => {
                if !self.collections.is_empty() {
                    self.selected = (self.selected + 1).min(self.collections.len() - 1);
                }
                Action::None
            }
            Action::PreviousCollection => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            Action::ToggleExpanded => {
                self.toggle_expanded();
                Action::None
            }
            Action::DeleteCollection(id) => {
                // The confirmation fired; mark this card's delete in flight
                // and let the app spawn the mutation.
                self.deleting = Some(id);
                Action::DeleteCollection(id)
            }
            Action::CollectionDeleted(id) => {
                self.deleting = None;
                Action::CollectionDeleted(id)
            }
            Action::MutationFailed {
                op: MutationOp::DeleteCollection,
                message,
            } => {
                // Back to idle; the collection stays rendered and a later
                // delete attempt is possible.
                self.deleting = None;
                Action::MutationFailed {
                    op: MutationOp::DeleteCollection,
                    message,
                }
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let area = LayoutManager::list_area(rect);

        if self.collections.is_empty() {
            let empty = Paragraph::new(Line::from(EMPTY_LIST_MESSAGE)).style(Style::default().fg(theme.dim));
            f.render_widget(empty, area);
            return;
        }

        let cards: Vec<CollectionCard> = self
            .collections
            .iter()
            .enumerate()
            .map(|(i, collection)| CollectionCard {
                collection,
                tasks: self.tasks_for(collection.id),
                expanded: !self.collapsed.contains(&collection.id),
                selected: i == self.selected,
                deleting: self.deleting == Some(collection.id),
                date_format: &self.date_format,
            })
            .collect();
        let heights: Vec<u16> = cards.iter().map(CollectionCard::height).collect();

        // Keep the selected card fully in view. Worked out in a local since
        // the cards hold borrows of the list until rendering is done.
        let mut scroll_offset = self.scroll_offset.min(self.selected);
        while scroll_offset < self.selected {
            let visible: u16 = heights[scroll_offset..=self.selected].iter().sum();
            if visible <= area.height {
                break;
            }
            scroll_offset += 1;
        }

        let mut y = area.y;
        for (card, height) in cards.iter().zip(&heights).skip(scroll_offset) {
            if y + height > area.y + area.height {
                break;
            }
            card.render(f, Rect::new(area.x, y, area.width, *height), theme);
            y += height;
        }

        self.scroll_offset = scroll_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(id: i32, name: &str) -> collection::Model {
        collection::Model {
            id,
            name: name.to_string(),
            color: "sky".to_string(),
            created_at: "2026-08-24".to_string(),
        }
    }

    fn list_with(collections: Vec<collection::Model>) -> CollectionsList {
        let mut list = CollectionsList::new();
        list.update_data(collections, Vec::new());
        list
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut list = list_with(vec![collection(1, "Chores"), collection(2, "Groceries")]);

        list.update(Action::PreviousCollection);
        assert_eq!(list.selected_collection().unwrap().id, 1);

        list.update(Action::NextCollection);
        list.update(Action::NextCollection);
        list.update(Action::NextCollection);
        assert_eq!(list.selected_collection().unwrap().id, 2);
    }

    #[test]
    fn test_cards_start_expanded_and_toggle() {
        let mut list = list_with(vec![collection(1, "Chores")]);
        assert!(!list.collapsed.contains(&1));

        list.update(Action::ToggleExpanded);
        assert!(list.collapsed.contains(&1));

        list.update(Action::ToggleExpanded);
        assert!(!list.collapsed.contains(&1));
    }

    #[test]
    fn test_delete_guard_blocks_second_confirmation() {
        let mut list = list_with(vec![collection(1, "Chores")]);

        let first = list.open_delete_confirmation();
        assert!(matches!(first, Action::ShowDialog(DialogType::DeleteConfirmation { .. })));

        // Delete fires; a second confirmation attempt is swallowed
        list.update(Action::DeleteCollection(1));
        assert!(list.is_deleting());
        let second = list.open_delete_confirmation();
        assert!(matches!(second, Action::None));
    }

    #[test]
    fn test_delete_failure_returns_to_idle() {
        let mut list = list_with(vec![collection(1, "Chores")]);
        list.update(Action::DeleteCollection(1));
        assert!(list.is_deleting());

        list.update(Action::MutationFailed {
            op: MutationOp::DeleteCollection,
            message: "storage rejected".to_string(),
        });
        assert!(!list.is_deleting());
        // Collection is still listed and deletable again
        assert_eq!(list.selected_collection().unwrap().id, 1);
        assert!(matches!(
            list.open_delete_confirmation(),
            Action::ShowDialog(DialogType::DeleteConfirmation { .. })
        ));
    }

    #[test]
    fn test_delete_success_clears_flag() {
        let mut list = list_with(vec![collection(1, "Chores")]);
        list.update(Action::DeleteCollection(1));
        list.update(Action::CollectionDeleted(1));
        assert!(!list.is_deleting());
    }

    #[test]
    fn test_render_scrolls_selection_into_view() {
        use crate::theme::{ThemeMode, ThemeService};
        use ratatui::{backend::TestBackend, Terminal};

        let collections = (1..=6).map(|i| collection(i, &format!("Collection {i}"))).collect();
        let mut list = list_with(collections);
        for _ in 0..5 {
            list.update(Action::NextCollection);
        }

        // Six expanded empty cards are 5 lines each; 12 lines cannot fit them
        let theme = ThemeService::new(ThemeMode::Dark).theme();
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                list.render(f, area, &theme);
            })
            .unwrap();

        assert!(list.scroll_offset > 0);
        assert_eq!(list.selected_collection().unwrap().id, 6);
    }

    #[test]
    fn test_selection_clamped_after_refresh() {
        let mut list = list_with(vec![collection(1, "Chores"), collection(2, "Groceries")]);
        list.update(Action::NextCollection);
        assert_eq!(list.selected_collection().unwrap().id, 2);

        list.update_data(vec![collection(1, "Chores")], Vec::new());
        assert_eq!(list.selected_collection().unwrap().id, 1);
    }
}
