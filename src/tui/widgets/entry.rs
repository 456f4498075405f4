// Text entry overlay widget.
//
// A centered single-line input used for adding names and for entering
// an import path. Displayed on top of the main layout while
// `ViewState::entry` is set.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::{EntryPurpose, TextEntry};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 5;

/// Render the text entry overlay centered on the screen.
pub fn render(frame: &mut Frame, area: Rect, entry: &TextEntry) {
    let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", title(entry.purpose)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(vec![
            Span::raw(" > "),
            Span::styled(entry.buffer.clone(), Style::default().fg(Color::White)),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::styled(
            format!(" {}", hint(entry.purpose)),
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            " Enter: confirm, Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, dialog_area);
}

/// Dialog title for each entry purpose.
pub fn title(purpose: EntryPurpose) -> &'static str {
    match purpose {
        EntryPurpose::AddNames => "Add names",
        EntryPurpose::ImportPath => "Import file",
    }
}

/// Usage hint for each entry purpose.
pub fn hint(purpose: EntryPurpose) -> &'static str {
    match purpose {
        EntryPurpose::AddNames => "Separate names with commas",
        EntryPurpose::ImportPath => "Path to a text or CSV file",
    }
}

/// Compute a centered rectangle of the given size within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let clamped_width = width.min(area.width);
    let clamped_height = height.min(area.height);

    let vertical = Layout::vertical([Constraint::Length(clamped_height)])
        .flex(Flex::Center)
        .split(area);

    let horizontal = Layout::horizontal([Constraint::Length(clamped_width)])
        .flex(Flex::Center)
        .split(vertical[0]);

    horizontal[0]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_and_hints_differ_by_purpose() {
        assert_ne!(title(EntryPurpose::AddNames), title(EntryPurpose::ImportPath));
        assert_ne!(hint(EntryPurpose::AddNames), hint(EntryPurpose::ImportPath));
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut entry = TextEntry::new(EntryPurpose::AddNames);
        entry.buffer = "alice, bob".to_string();
        terminal
            .draw(|frame| render(frame, frame.area(), &entry))
            .unwrap();
    }

    #[test]
    fn render_clamps_on_tiny_terminal() {
        let backend = ratatui::backend::TestBackend::new(20, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let entry = TextEntry::new(EntryPurpose::ImportPath);
        terminal
            .draw(|frame| render(frame, frame.area(), &entry))
            .unwrap();
    }
}
