// History sidebar: past winners, most recent first.
//
// Scrollable with [ and ] keys.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the winner history into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    if state.history.is_empty() {
        let paragraph = Paragraph::new("  No winners yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("History"));
        frame.render_widget(paragraph, area);
        return;
    }

    let total = state.history.len();
    let visible_rows = (area.height as usize).saturating_sub(2);
    let max_offset = total.saturating_sub(visible_rows);
    let offset = state
        .scroll_offset
        .get("history")
        .copied()
        .unwrap_or(0)
        .min(max_offset);

    let items: Vec<ListItem> = state
        .history
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows.max(1))
        .map(|(index, person)| {
            // The newest entry sits at the top
            let style = if index == 0 {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {:>3}. {}", index + 1, person.name),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("History ({})", total)),
    );
    frame.render_widget(list, area);

    if total > visible_rows {
        let mut scrollbar_state = ScrollbarState::new(max_offset).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
