use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::Theme;
use crate::validation::FieldError;

/// Creates a styled main dialog block
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block, with a visual cursor when focused
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    focused: bool,
    theme: &Theme,
) -> Paragraph<'a> {
    let input_display = if focused {
        format!("{input_buffer}█")
    } else {
        input_buffer.to_string()
    };

    let border_color = if focused { theme.fg } else { theme.dim };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(Style::default().fg(border_color))
        .style(Style::default().fg(theme.dim));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(theme.fg))
}

/// Creates a selection field block (read-only display with title)
pub fn create_selection_paragraph(value: String, field_title: &str, value_color: Color, theme: &Theme) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(Style::default().fg(theme.fg))
        .style(Style::default().fg(theme.dim));

    Paragraph::new(value).block(block).style(Style::default().fg(value_color))
}

/// Inline field errors, rendered inside the owning dialog
pub fn create_errors_paragraph(errors: &[FieldError], theme: &Theme) -> Paragraph<'static> {
    let lines: Vec<Line> = errors
        .iter()
        .map(|e| Line::from(Span::styled(e.message.clone(), Style::default().fg(theme.destructive))))
        .collect();
    Paragraph::new(lines)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], theme: &Theme) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(theme.dim)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// A single-line text input with the cursor pinned to the end.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub buffer: String,
}

impl InputField {
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}
