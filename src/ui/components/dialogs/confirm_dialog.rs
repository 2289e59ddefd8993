//! The delete confirmation gate.
//!
//! Deleting a collection is destructive and cascades to its tasks, so the
//! mutation only fires after an explicit confirmation here.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_instructions_paragraph};
use crate::constants::{DELETE_CONFIRMATION_BODY, DELETE_CONFIRMATION_TITLE};
use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

pub fn render(f: &mut Frame, rect: Rect, collection_name: &str, theme: &Theme) {
    let area = LayoutManager::centered_rect_lines(50, 9, rect);

    f.render_widget(Clear, area);

    let title = format!(" {DELETE_CONFIRMATION_TITLE} ");
    let block = create_dialog_block(&title, theme.destructive);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let name_line = Paragraph::new(Line::from(vec![
        Span::raw("Delete "),
        Span::styled(
            collection_name.to_string(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw("?"),
    ]))
    .style(Style::default().fg(theme.fg));
    f.render_widget(name_line, chunks[0]);

    let body = Paragraph::new(DELETE_CONFIRMATION_BODY)
        .style(Style::default().fg(theme.dim))
        .wrap(Wrap { trim: true });
    f.render_widget(body, chunks[1]);

    let instructions = [
        ("Enter", theme.destructive, ": delete  "),
        ("Esc", theme.dim, ": cancel"),
    ];
    f.render_widget(create_instructions_paragraph(&instructions, theme), chunks[2]);
}
