//! The create-task form, scoped to one collection.
//!
//! The owning collection is displayed read-only; only the content and the
//! optional expiration date are editable. Tab moves between the two fields.
//! The expiration row previews the parsed date in human terms, or the
//! no-expiration placeholder while the field is empty.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{
    create_dialog_block, create_errors_paragraph, create_input_paragraph, create_instructions_paragraph,
    create_selection_paragraph, InputField,
};
use crate::constants::NO_EXPIRATION_LABEL;
use crate::palette::CollectionColor;
use crate::theme::Theme;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use crate::validation::{self, FieldError, TaskDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TaskField {
    #[default]
    Content,
    ExpiresAt,
}

pub struct TaskDialogState {
    pub collection_id: i32,
    pub collection_name: String,
    pub collection_color: CollectionColor,
    pub content: InputField,
    pub expires_at: InputField,
    focused: TaskField,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
}

impl TaskDialogState {
    pub fn new(collection_id: i32, collection_name: String, collection_color: CollectionColor) -> Self {
        Self {
            collection_id,
            collection_name,
            collection_color,
            content: InputField::default(),
            expires_at: InputField::default(),
            focused: TaskField::default(),
            errors: Vec::new(),
            submitting: false,
        }
    }

    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    fn draft(&self) -> TaskDraft {
        TaskDraft {
            collection_id: self.collection_id,
            content: self.content.as_str().to_string(),
            expires_at: self.expires_at.as_str().to_string(),
        }
    }

    fn focused_input(&mut self) -> &mut InputField {
        match self.focused {
            TaskField::Content => &mut self.content,
            TaskField::ExpiresAt => &mut self.expires_at,
        }
    }

    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::None;
        }
        match validation::validate_task(&self.draft()) {
            Ok(valid) => {
                self.errors.clear();
                self.submitting = true;
                Action::CreateTask(valid)
            }
            Err(errors) => {
                self.errors = errors;
                Action::None
            }
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => {
                self.focused = match self.focused {
                    TaskField::Content => TaskField::ExpiresAt,
                    TaskField::ExpiresAt => TaskField::Content,
                };
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_input().backspace();
                Action::None
            }
            KeyCode::Char(c) => {
                self.focused_input().push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Human preview of the expiration as typed so far.
    fn expiration_preview(&self) -> String {
        let raw = self.expires_at.as_str().trim();
        if raw.is_empty() {
            return NO_EXPIRATION_LABEL.to_string();
        }
        match datetime::parse_date(raw) {
            Ok(_) => datetime::format_human_date(raw),
            Err(_) => "not a date yet".to_string(),
        }
    }
}

pub fn render(f: &mut Frame, rect: Rect, state: &TaskDialogState, theme: &Theme) {
    // collection row + content + expiration + preview + errors + instructions
    let error_lines = state.errors.len() as u16;
    let height = 2 + 3 + 3 + 3 + 1 + error_lines + 1;
    let area = LayoutManager::centered_rect_lines(60, height, rect);

    f.render_widget(Clear, area);

    let block = create_dialog_block(" New Task ", theme.accent);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(error_lines),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        create_selection_paragraph(
            state.collection_name.clone(),
            "Collection",
            state.collection_color.terminal_color(),
            theme,
        ),
        chunks[0],
    );

    f.render_widget(
        create_input_paragraph(
            state.content.as_str(),
            "Content",
            !state.submitting && state.focused == TaskField::Content,
            theme,
        ),
        chunks[1],
    );

    f.render_widget(
        create_input_paragraph(
            state.expires_at.as_str(),
            "Expires (YYYY-MM-DD, optional)",
            !state.submitting && state.focused == TaskField::ExpiresAt,
            theme,
        ),
        chunks[2],
    );

    let preview = Paragraph::new(Line::from(vec![
        Span::styled("  ⏱ ", Style::default().fg(theme.dim)),
        Span::styled(state.expiration_preview(), Style::default().fg(theme.dim)),
    ]));
    f.render_widget(preview, chunks[3]);

    if !state.errors.is_empty() {
        f.render_widget(create_errors_paragraph(&state.errors, theme), chunks[4]);
    }

    if state.submitting {
        let working = Paragraph::new(Line::from(Span::styled(
            "Creating...",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(working, chunks[5]);
    } else {
        let instructions = [
            ("Enter", theme.success, ": create  "),
            ("Tab", theme.accent, ": next field  "),
            ("Esc", theme.destructive, ": cancel"),
        ];
        f.render_widget(create_instructions_paragraph(&instructions, theme), chunks[5]);
    }
}
