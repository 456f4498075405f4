// Help bar widget: per-tab keyboard shortcut hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::TabId;
use crate::tui::ViewState;

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state.active_tab),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the active tab.
pub fn help_text(tab: TabId) -> &'static str {
    match tab {
        TabId::Roster => {
            " 1-3:Tabs | a:Add i:Import m:Demo | j/k:Select x:Remove d:Dedup C:Clear | q:Quit"
        }
        TabId::Draw => " 1-3:Tabs | s:Draw t:Repeats e:Celebration R:Reset history | q:Quit",
        TabId::Groups => " 1-3:Tabs | +/-:Size g:Split | c:CSV y:Text | q:Quit",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_hints_with_quit() {
        for tab in [TabId::Roster, TabId::Draw, TabId::Groups] {
            let text = help_text(tab);
            assert!(!text.is_empty());
            assert!(text.contains("q:Quit"), "{tab:?} hints should mention quit");
        }
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
