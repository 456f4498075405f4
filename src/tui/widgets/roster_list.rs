// Roster list widget: everyone currently in the roster.
//
// Repeated names are flagged so the user knows a duplicate sweep would
// change something. The selected row is highlighted; x/Delete removes it.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::roster::Person;
use crate::tui::ViewState;

/// Render the roster panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    if state.people.is_empty() {
        let paragraph = Paragraph::new("  Roster is empty. a: add names, i: import, m: demo")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Roster"));
        frame.render_widget(paragraph, area);
        return;
    }

    // Visible row count: subtract 2 for borders
    let visible_rows = (area.height as usize).saturating_sub(2);
    let total = state.people.len();

    // Keep the selection on screen
    let max_offset = total.saturating_sub(visible_rows);
    let offset = state
        .selected
        .saturating_sub(visible_rows.saturating_sub(1))
        .min(max_offset);

    let items: Vec<ListItem> = state
        .people
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows.max(1))
        .map(|(index, person)| {
            let duplicate = state.duplicate_names.contains(&person.name);
            format_person(index, person, duplicate, index == state.selected)
        })
        .collect();

    let title = if state.duplicate_names.is_empty() {
        format!("Roster ({})", total)
    } else {
        format!(
            "Roster ({}, {} duplicated names)",
            total,
            state.duplicate_names.len()
        )
    };

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

/// Format a single roster row as a ListItem.
fn format_person<'a>(index: usize, person: &Person, duplicate: bool, selected: bool) -> ListItem<'a> {
    let text = format!(" {}", format_person_text(index, person, duplicate));

    let mut style = if duplicate {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    if selected {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    ListItem::new(Line::from(Span::styled(text, style)))
}

/// The text of a roster row: right-aligned ordinal, name, duplicate marker.
pub fn format_person_text(index: usize, person: &Person, duplicate: bool) -> String {
    let marker = if duplicate { "  (dup)" } else { "" };
    format!("{:>3}. {}{}", index + 1, person.name, marker)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
