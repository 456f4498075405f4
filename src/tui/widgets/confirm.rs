// Confirmation overlay widget.
//
// Renders a centered modal dialog asking the user to confirm a
// destructive action. Displayed on top of the main layout while
// `ViewState::confirm` is set.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::PendingConfirm;

/// Height of the confirmation dialog. Width adapts to the question.
const DIALOG_HEIGHT: u16 = 5;

/// Render the confirmation overlay centered on the screen.
pub fn render(frame: &mut Frame, area: Rect, pending: PendingConfirm) {
    let (title, question) = dialog_text(pending);
    let width = (question.len() as u16).saturating_add(10);
    let dialog_area = centered_rect(width, DIALOG_HEIGHT, area);

    // Clear the area behind the dialog so it renders cleanly on top
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Line::from(vec![
        Span::raw(format!("  {} (", question)),
        Span::styled(
            "y",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("/"),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(")"),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, dialog_area);
}

/// Title and question for each confirmable action.
pub fn dialog_text(pending: PendingConfirm) -> (&'static str, &'static str) {
    match pending {
        PendingConfirm::Quit => ("Quit?", "Really quit?"),
        PendingConfirm::ClearRoster => ("Clear roster?", "Remove everyone from the roster?"),
        PendingConfirm::ResetHistory => ("Reset history?", "Forget all past winners?"),
        PendingConfirm::LoadDemo => ("Load demo?", "Append the demo names to the current roster?"),
    }
}

/// Compute a centered rectangle of the given size within `area`.
///
/// If the area is too small, the dialog is clamped to the available space.
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
    fn dialog_text_distinguishes_actions() {
        let (quit_title, _) = dialog_text(PendingConfirm::Quit);
        let (clear_title, clear_q) = dialog_text(PendingConfirm::ClearRoster);
        let (reset_title, reset_q) = dialog_text(PendingConfirm::ResetHistory);
        let (demo_title, demo_q) = dialog_text(PendingConfirm::LoadDemo);
        assert_ne!(quit_title, clear_title);
        assert_ne!(clear_title, reset_title);
        assert_ne!(reset_title, demo_title);
        assert!(clear_q.contains("roster"));
        assert!(reset_q.contains("winners"));
        assert!(demo_q.contains("demo"));
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let result = centered_rect(30, DIALOG_HEIGHT, area);
        assert_eq!(result.width, 30);
        assert_eq!(result.height, DIALOG_HEIGHT);
        let center_x = area.width / 2;
        let result_center_x = result.x + result.width / 2;
        assert!(
            (result_center_x as i32 - center_x as i32).unsigned_abs() <= 1,
            "Dialog should be horizontally centered"
        );
    }

    #[test]
    fn centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 10, 3);
        let result = centered_rect(40, DIALOG_HEIGHT, area);
        assert!(result.width <= area.width);
        assert!(result.height <= area.height);
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        for pending in [
            PendingConfirm::Quit,
            PendingConfirm::ClearRoster,
            PendingConfirm::ResetHistory,
            PendingConfirm::LoadDemo,
        ] {
            terminal
                .draw(|frame| render(frame, frame.area(), pending))
                .unwrap();
        }
    }
}
