// Banner widget: most recent winner, celebration, and transient notices.
//
// Notices take priority over the celebration, which takes priority over
// the plain winner line.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the banner row.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (line, title) = banner_line(state);
    let paragraph = Paragraph::new(line)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn banner_line(state: &ViewState) -> (Line<'static>, &'static str) {
    if let Some((ref text, _)) = state.notice {
        let line = Line::styled(text.clone(), Style::default().fg(Color::Yellow));
        return (line, "Notice");
    }
    if state.celebrate_until.is_some() {
        if let Some(ref winner) = state.winner {
            let line = Line::styled(
                format!("🎉  {}  🎉", winner.name),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
            return (line, "Winner");
        }
    }
    if let Some(ref winner) = state.winner {
        let line = Line::styled(
            format!("Last winner: {}", winner.name),
            Style::default().fg(Color::Green),
        );
        return (line, "Winner");
    }
    (
        Line::styled("No draws yet", Style::default().fg(Color::DarkGray)),
        "Winner",
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::IdGenerator;
    use std::time::{Duration, Instant};

    #[test]
    fn empty_state_shows_placeholder() {
        let state = ViewState::default();
        let (line, title) = banner_line(&state);
        assert_eq!(title, "Winner");
        assert_eq!(line.to_string(), "No draws yet");
    }

    #[test]
    fn winner_is_shown_after_a_draw() {
        let ids = IdGenerator::new();
        let mut state = ViewState::default();
        state.winner = Some(ids.person("alice"));
        let (line, _) = banner_line(&state);
        assert_eq!(line.to_string(), "Last winner: alice");
    }

    #[test]
    fn celebration_decorates_the_winner() {
        let ids = IdGenerator::new();
        let mut state = ViewState::default();
        state.winner = Some(ids.person("alice"));
        state.celebrate_until = Some(Instant::now() + Duration::from_secs(3));
        let (line, _) = banner_line(&state);
        assert!(line.to_string().contains("🎉"));
        assert!(line.to_string().contains("alice"));
    }

    #[test]
    fn notice_takes_priority_over_winner() {
        let ids = IdGenerator::new();
        let mut state = ViewState::default();
        state.winner = Some(ids.person("alice"));
        state.notice = Some(("exported".to_string(), Instant::now()));
        let (line, title) = banner_line(&state);
        assert_eq!(title, "Notice");
        assert_eq!(line.to_string(), "exported");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
