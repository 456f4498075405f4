// Draw wheel widget: the cycling name display and draw settings.
//
// While a spin is in flight the display name changes every cycle tick;
// once the spin completes it settles on the winner.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the draw panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let name_style = if state.spinning {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::raw(""),
        Line::styled(
            state.display_name.clone().unwrap_or_else(|| "---".to_string()),
            name_style,
        ),
        Line::raw(""),
        Line::styled(status_line(state), Style::default().fg(Color::White)),
        Line::styled(settings_line(state), Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL).title("Draw"));
    frame.render_widget(paragraph, area);
}

fn status_line(state: &ViewState) -> String {
    if state.spinning {
        "drawing...".to_string()
    } else if state.eligible_count == 0 {
        "no eligible candidates".to_string()
    } else {
        format!("{} eligible, s to draw", state.eligible_count)
    }
}

fn settings_line(state: &ViewState) -> String {
    format!(
        "repeats: {}   celebration: {}",
        on_off(state.settings.allow_repeats),
        on_off(state.settings.celebration)
    )
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_reflects_state() {
        let mut state = ViewState::default();
        assert_eq!(status_line(&state), "no eligible candidates");

        state.eligible_count = 4;
        assert_eq!(status_line(&state), "4 eligible, s to draw");

        state.spinning = true;
        assert_eq!(status_line(&state), "drawing...");
    }

    #[test]
    fn settings_line_shows_both_toggles() {
        let mut state = ViewState::default();
        assert_eq!(settings_line(&state), "repeats: off   celebration: on");
        state.settings.allow_repeats = true;
        state.settings.celebration = false;
        assert_eq!(settings_line(&state), "repeats: on   celebration: off");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(60, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.display_name = Some("alice".to_string());
        state.spinning = true;
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
