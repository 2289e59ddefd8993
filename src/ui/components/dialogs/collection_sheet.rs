//! The create-collection form.
//!
//! Collects a name and a palette color. Validation runs on submit; violations
//! are rendered inline under their field and submission is blocked until the
//! draft passes. While the mutation is in flight the form stays open with its
//! values intact and ignores further submits.

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
use crate::palette::CollectionColor;
use crate::theme::Theme;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crate::validation::{self, CollectionDraft};

#[derive(Default)]
pub struct CollectionSheetState {
    pub name: InputField,
    pub color: Option<CollectionColor>,
    pub errors: Vec<crate::validation::FieldError>,
    pub submitting: bool,
}

impl CollectionSheetState {
    pub fn reset(&mut self) {
        self.name.clear();
        self.color = None;
        self.errors.clear();
        self.submitting = false;
    }

    /// The mutation finished with an error; re-enable the form, keep values.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    fn draft(&self) -> CollectionDraft {
        CollectionDraft {
            name: self.name.as_str().to_string(),
            color: self.color.map(|c| c.name().to_string()),
        }
    }

    fn cycle_color(&mut self) {
        self.color = Some(match self.color {
            Some(color) => color.next(),
            None => CollectionColor::ALL[0],
        });
    }

    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::None;
        }
        match validation::validate_collection(&self.draft()) {
            Ok(valid) => {
                self.errors.clear();
                self.submitting = true;
                Action::CreateCollection {
                    name: valid.name,
                    color: valid.color,
                }
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
                self.cycle_color();
                Action::None
            }
            KeyCode::Backspace => {
                self.name.backspace();
                Action::None
            }
            KeyCode::Char(c) => {
                self.name.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }
}

pub fn render(f: &mut Frame, rect: Rect, state: &CollectionSheetState, theme: &Theme) {
    // name input + color selector + errors + instructions, plus borders
    let error_lines = state.errors.len() as u16;
    let height = 2 + 3 + 3 + error_lines + 1;
    let area = LayoutManager::centered_rect_lines(60, height, rect);

    f.render_widget(Clear, area);

    let block = create_dialog_block(" New Collection ", theme.accent);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(error_lines),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        create_input_paragraph(state.name.as_str(), "Name", !state.submitting, theme),
        chunks[0],
    );

    let (color_label, color_value) = match state.color {
        Some(color) => (color.name().to_string(), color.terminal_color()),
        None => ("press Tab to pick".to_string(), theme.dim),
    };
    f.render_widget(
        create_selection_paragraph(color_label, "Color", color_value, theme),
        chunks[1],
    );

    if !state.errors.is_empty() {
        f.render_widget(create_errors_paragraph(&state.errors, theme), chunks[2]);
    }

    if state.submitting {
        let working = Paragraph::new(Line::from(Span::styled(
            "Creating...",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(working, chunks[3]);
    } else {
        let instructions = [
            ("Enter", theme.success, ": create  "),
            ("Tab", theme.accent, ": color  "),
            ("Esc", theme.destructive, ": cancel"),
        ];
        f.render_widget(create_instructions_paragraph(&instructions, theme), chunks[3]);
    }
}
