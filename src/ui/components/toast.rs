//! Transient toast notifications.
//!
//! Mutation outcomes surface here: a success toast after a create or delete,
//! a destructive-styled toast when a mutation rejects. Toasts expire on their
//! own after a few seconds; they carry no interaction.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::constants::TOAST_LIFETIME_SECS;
use crate::theme::Theme;
use crate::ui::core::{Action, Component, ToastKind};
use crate::ui::layout::LayoutManager;

struct Toast {
    kind: ToastKind,
    message: String,
    shown_at: Instant,
}

/// The toast stack, anchored to the bottom-right corner.
#[derive(Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: String) {
        self.toasts.push(Toast {
            kind,
            message,
            shown_at: Instant::now(),
        });
    }

    /// Drop toasts older than their lifetime. Called on ticks.
    pub fn expire(&mut self) {
        let lifetime = Duration::from_secs(TOAST_LIFETIME_SECS);
        self.toasts.retain(|t| t.shown_at.elapsed() < lifetime);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

impl Component for ToastStack {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowToast { kind, message } => {
                self.push(kind, message);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        if self.toasts.is_empty() {
            return;
        }

        let area = LayoutManager::toast_area(rect, self.toasts.len() as u16);
        f.render_widget(Clear, area);

        for (i, toast) in self.toasts.iter().enumerate() {
            let y = area.y + (i as u16) * 3;
            if y + 3 > area.y + area.height {
                break;
            }
            let toast_rect = Rect::new(area.x, y, area.width, 3);

            let (title, color) = match toast.kind {
                ToastKind::Success => ("Success", theme.success),
                ToastKind::Destructive => ("Error", theme.destructive),
            };

            let paragraph = Paragraph::new(Line::from(toast.message.as_str())).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .style(Style::default().fg(color)),
            );
            f.render_widget(paragraph, toast_rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_toast_action_is_consumed() {
        let mut stack = ToastStack::new();
        let result = stack.update(Action::ShowToast {
            kind: ToastKind::Success,
            message: "Collection created successfully".to_string(),
        });
        assert!(matches!(result, Action::None));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_other_actions_pass_through() {
        let mut stack = ToastStack::new();
        let result = stack.update(Action::Quit);
        assert!(matches!(result, Action::Quit));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_expire_keeps_fresh_toasts() {
        let mut stack = ToastStack::new();
        stack.push(ToastKind::Destructive, "Cannot delete collection".to_string());
        stack.expire();
        assert_eq!(stack.len(), 1);
    }
}
