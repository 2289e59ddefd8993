//! Rendering of a single collection card.
//!
//! A card shows the collection header (name in its palette color plus an
//! expand/collapse caret) and, when expanded, either the task list in
//! creation order with an aggregate progress indicator, or an empty-state
//! message. The footer carries the creation date and the deleting indicator
//! while a delete mutation is in flight.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::str::FromStr;

use crate::constants::EMPTY_COLLECTION_MESSAGE;
use crate::entities::{collection, task};
use crate::palette::CollectionColor;
use crate::theme::Theme;
use crate::utils::datetime;

const PROGRESS_BAR_WIDTH: usize = 20;

pub struct CollectionCard<'a> {
    pub collection: &'a collection::Model,
    /// Tasks of this collection, already in creation order.
    pub tasks: Vec<&'a task::Model>,
    pub expanded: bool,
    pub selected: bool,
    pub deleting: bool,
    /// Configured display format for the creation date.
    pub date_format: &'a str,
}

impl CollectionCard<'_> {
    /// Palette color of this card, falling back to the theme accent if the
    /// stored name is somehow unknown.
    fn color(&self, theme: &Theme) -> ratatui::style::Color {
        CollectionColor::from_str(&self.collection.color)
            .map(|c| c.terminal_color())
            .unwrap_or(theme.accent)
    }

    /// Total height in lines, including borders.
    pub fn height(&self) -> u16 {
        if !self.expanded {
            return 3; // header only
        }
        let body = if self.tasks.is_empty() {
            1 // empty-state line
        } else {
            1 + self.tasks.len() as u16 // progress line + one line per task
        };
        // borders + header + body + footer
        2 + 1 + body + 1
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let color = self.color(theme);

        let border_style = if self.selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let mut lines: Vec<Line> = Vec::new();

        // Header: name in the collection color, caret shows the expansion state
        let caret = if self.expanded { "▾" } else { "▸" };
        lines.push(Line::from(vec![
            Span::styled(
                self.collection.name.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(caret, Style::default().fg(theme.dim)),
        ]));

        if self.expanded {
            if self.tasks.is_empty() {
                lines.push(Line::from(Span::styled(
                    EMPTY_COLLECTION_MESSAGE,
                    Style::default().fg(theme.dim),
                )));
            } else {
                lines.push(self.progress_line(color, theme));
                for task in &self.tasks {
                    lines.push(self.task_line(task, theme));
                }
            }

            lines.push(self.footer_line(theme));
        }

        let paragraph = Paragraph::new(lines);
        f.render_widget(paragraph, inner);
    }

    /// Aggregate progress indicator: completed tasks over total.
    fn progress_line(&self, color: ratatui::style::Color, theme: &Theme) -> Line<'static> {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.is_completed).count();
        let filled = if total == 0 {
            0
        } else {
            (completed * PROGRESS_BAR_WIDTH) / total
        };

        Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled("░".repeat(PROGRESS_BAR_WIDTH - filled), Style::default().fg(theme.dim)),
            Span::styled(
                format!(" {completed}/{total}"),
                Style::default().fg(theme.dim),
            ),
        ])
    }

    fn task_line(&self, task: &task::Model, theme: &Theme) -> Line<'static> {
        let checkbox = if task.is_completed { "[x] " } else { "[ ] " };
        let content_style = if task.is_completed {
            Style::default().fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(theme.fg)
        };

        let mut spans = vec![
            Span::styled(checkbox, Style::default().fg(theme.dim)),
            Span::styled(task.content.clone(), content_style),
        ];

        if let Some(expires) = &task.expires_at {
            let expired = datetime::is_past(expires);
            let style = if expired {
                Style::default().fg(theme.destructive)
            } else {
                Style::default().fg(theme.dim)
            };
            spans.push(Span::styled(
                format!("  ⏱ {}", datetime::format_human_date(expires)),
                style,
            ));
        }

        Line::from(spans)
    }

    fn footer_line(&self, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(
                "Created {}",
                datetime::reformat(&self.collection.created_at, self.date_format)
            ),
            Style::default().fg(theme.dim),
        )];

        if self.deleting {
            spans.push(Span::styled(
                "  Deleting...",
                Style::default().fg(theme.destructive).add_modifier(Modifier::BOLD),
            ));
        }

        Line::from(spans)
    }
}
