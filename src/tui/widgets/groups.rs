// Groups widget: the result of the most recent random split.
//
// One header row per group followed by its members, matching the
// labels used by the CSV and text exports.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::export::group_label;
use crate::roster::Person;
use crate::tui::ViewState;

/// Render the groups panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let title = format!("Groups (size {})", state.group_size);

    if state.groups.is_empty() {
        let paragraph = Paragraph::new("  No groups yet. g: split, +/-: group size")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = group_lines(&state.groups);
    let total = lines.len();
    let visible_rows = (area.height as usize).saturating_sub(2);
    let max_offset = total.saturating_sub(visible_rows);
    let offset = state
        .scroll_offset
        .get("groups")
        .copied()
        .unwrap_or(0)
        .min(max_offset);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(offset)
        .take(visible_rows.max(1))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
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

fn group_lines(groups: &[Vec<Person>]) -> Vec<ListItem<'static>> {
    let mut items = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" {} ({})", group_label(index), group.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))));
        for person in group {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("   {}", person.name),
                Style::default().fg(Color::White),
            ))));
        }
    }
    items
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
