//! The help overlay: key bindings at a glance.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

use super::common::create_dialog_block;

const BINDINGS: &[(&str, &str)] = &[
    ("j / ↓", "next collection"),
    ("k / ↑", "previous collection"),
    ("Enter / Space", "expand or collapse"),
    ("A", "new collection"),
    ("n", "new task in selected collection"),
    ("d", "delete selected collection"),
    ("t", "cycle theme (light / dark / system)"),
    ("r", "refresh"),
    ("?", "this help"),
    ("q", "quit"),
];

pub fn render(f: &mut Frame, rect: Rect, theme: &Theme) {
    let area = LayoutManager::centered_rect_lines(50, BINDINGS.len() as u16 + 3, rect);

    f.render_widget(Clear, area);

    let block = create_dialog_block(" Help ", theme.accent);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:>14}"),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {desc}"), Style::default().fg(theme.fg)),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        "press any key to close",
        Style::default().fg(theme.dim),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
