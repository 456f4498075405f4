// Status bar widget: tab bar and roster counters.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::group::group_count;
use crate::protocol::TabId;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [tab bar] [people / eligible / winners counters]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![Span::raw(" ")];
    spans.extend(tab_spans(state.active_tab));

    spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        format!(
            "{} people, {} eligible, {} past winners, {} groups of {}",
            state.people.len(),
            state.eligible_count,
            state.history.len(),
            group_count(state.people.len(), state.group_size),
            state.group_size
        ),
        Style::default().fg(Color::White),
    ));

    if state.spinning {
        spans.push(Span::styled(
            "  drawing...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Build tab indicator spans with the active tab highlighted.
/// E.g. "[1:Roster] [2:Draw] [3:Groups]"
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let tabs = [(TabId::Roster, 1), (TabId::Draw, 2), (TabId::Groups, 3)];

    let mut spans = Vec::new();
    for (tab_id, ordinal) in tabs {
        let style = if tab_id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("[{}:{}]", ordinal, tab_label(tab_id)),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Return the label for a tab.
pub fn tab_label(tab: TabId) -> &'static str {
    match tab {
        TabId::Roster => "Roster",
        TabId::Draw => "Draw",
        TabId::Groups => "Groups",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
