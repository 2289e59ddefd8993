//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::LIST_MAX_WIDTH;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Main layout: collection list on top, status bar on the last line.
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Center the collection list horizontally, capped at a readable width.
    #[must_use]
    pub fn list_area(area: Rect) -> Rect {
        let width = area.width.min(LIST_MAX_WIDTH);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Bottom-right anchored area for the toast stack.
    #[must_use]
    pub fn toast_area(area: Rect, toast_count: u16) -> Rect {
        let width = area.width.min(44);
        let height = (toast_count * 3).min(area.height.saturating_sub(1));
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(height + 1);
        Rect::new(x, y, width, height)
    }
}
