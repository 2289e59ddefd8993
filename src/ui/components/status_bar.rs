//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::theme::{Theme, ThemeMode};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme, theme_mode: ThemeMode, busy: bool) {
        let status_text = if busy {
            "Working...".to_string()
        } else {
            format!(
                "A: new collection • n: new task • d: delete • Enter: expand • t: theme ({theme_mode}) • ?: help • q: quit"
            )
        };

        let status_color = if busy { theme.accent } else { theme.dim };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
