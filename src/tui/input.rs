// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (tab switching,
// roster selection, modal overlays).

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{EntryPurpose, PendingConfirm, TextEntry, ViewState};
use crate::protocol::{TabId, UserCommand};

/// Smallest selectable group size. Splitting into groups of one is
/// never useful, so the UI stops at two; the engine itself only
/// requires a size of at least one.
const MIN_GROUP_SIZE: usize = 2;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded
/// to the app orchestrator. Returns `None` when the key press was
/// handled locally by mutating `ViewState` (tab switching, selection,
/// opening a modal) or ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    // Confirmation mode: only y confirms, n/Esc cancel, everything else blocked
    if view_state.confirm.is_some() {
        return handle_confirm(key_event, view_state);
    }

    // Text entry mode: capture printable characters and special keys
    if view_state.entry.is_some() {
        return handle_entry(key_event, view_state);
    }

    // Normal mode key dispatch
    match key_event.code {
        // Tab switching
        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Roster;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::Draw;
            None
        }
        KeyCode::Char('3') => {
            view_state.active_tab = TabId::Groups;
            None
        }
        KeyCode::Tab => {
            view_state.active_tab = match view_state.active_tab {
                TabId::Roster => TabId::Draw,
                TabId::Draw => TabId::Groups,
                TabId::Groups => TabId::Roster,
            };
            None
        }

        // Roster selection; on other tabs the arrows scroll that tab's panel
        KeyCode::Up | KeyCode::Char('k') => {
            if view_state.active_tab == TabId::Roster {
                view_state.selected = view_state.selected.saturating_sub(1);
            } else {
                let key = panel_scroll_key(view_state);
                scroll_up(view_state, key, 1);
            }
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if view_state.active_tab == TabId::Roster {
                let last = view_state.people.len().saturating_sub(1);
                view_state.selected = (view_state.selected + 1).min(last);
            } else {
                let key = panel_scroll_key(view_state);
                scroll_down(view_state, key, 1);
            }
            None
        }

        // History sidebar scrolling from any tab
        KeyCode::Char('[') => {
            scroll_up(view_state, "history", 1);
            None
        }
        KeyCode::Char(']') => {
            scroll_down(view_state, "history", 1);
            None
        }

        // Esc dismisses the current notice
        KeyCode::Esc => {
            view_state.notice = None;
            None
        }

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            view_state.confirm = Some(PendingConfirm::Quit);
            None
        }

        _ => handle_tab_key(key_event, view_state),
    }
}

/// Keys that only apply on a specific tab.
fn handle_tab_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match (view_state.active_tab, key_event.code) {
        // --- Roster tab ---
        (TabId::Roster, KeyCode::Char('a')) => {
            view_state.entry = Some(TextEntry::new(EntryPurpose::AddNames));
            None
        }
        (TabId::Roster, KeyCode::Char('i')) => {
            view_state.entry = Some(TextEntry::new(EntryPurpose::ImportPath));
            None
        }
        (TabId::Roster, KeyCode::Char('m')) => {
            if view_state.people.is_empty() {
                Some(UserCommand::LoadDemo)
            } else {
                // Appending sample data to real names deserves a prompt.
                view_state.confirm = Some(PendingConfirm::LoadDemo);
                None
            }
        }
        (TabId::Roster, KeyCode::Char('d')) => Some(UserCommand::RemoveDuplicates),
        (TabId::Roster, KeyCode::Char('x')) | (TabId::Roster, KeyCode::Delete) => view_state
            .people
            .get(view_state.selected)
            .map(|person| UserCommand::RemovePerson(person.id.clone())),
        (TabId::Roster, KeyCode::Char('C')) => {
            if !view_state.people.is_empty() {
                view_state.confirm = Some(PendingConfirm::ClearRoster);
            }
            None
        }

        // --- Draw tab ---
        (TabId::Draw, KeyCode::Char('s')) | (TabId::Draw, KeyCode::Char(' ')) => {
            (!view_state.spinning).then_some(UserCommand::StartDraw)
        }
        (TabId::Draw, KeyCode::Char('t')) => Some(UserCommand::ToggleRepeats),
        (TabId::Draw, KeyCode::Char('e')) => Some(UserCommand::ToggleCelebration),
        (TabId::Draw, KeyCode::Char('R')) => {
            if !view_state.history.is_empty() {
                view_state.confirm = Some(PendingConfirm::ResetHistory);
            }
            None
        }

        // --- Groups tab ---
        (TabId::Groups, KeyCode::Char('+')) | (TabId::Groups, KeyCode::Char('=')) => {
            let cap = view_state.people.len().max(MIN_GROUP_SIZE);
            let size = (view_state.group_size + 1).min(cap);
            (size != view_state.group_size).then_some(UserCommand::SetGroupSize(size))
        }
        (TabId::Groups, KeyCode::Char('-')) => {
            let size = view_state.group_size.saturating_sub(1).max(MIN_GROUP_SIZE);
            (size != view_state.group_size).then_some(UserCommand::SetGroupSize(size))
        }
        (TabId::Groups, KeyCode::Char('g')) => Some(UserCommand::SplitGroups),
        (TabId::Groups, KeyCode::Char('c')) => Some(UserCommand::ExportCsv),
        (TabId::Groups, KeyCode::Char('y')) => Some(UserCommand::ExportText),

        _ => None,
    }
}

/// Handle key events while a confirmation modal is up.
///
/// - `y` confirms and sends the pending command
/// - `n` or `Esc` cancels (returns to normal mode)
/// - `q` also confirms when the pending action is Quit
/// - All other keys are blocked (no-op)
fn handle_confirm(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let pending = view_state.confirm?;
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            view_state.confirm = None;
            Some(confirmed_command(pending))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') if pending == PendingConfirm::Quit => {
            view_state.confirm = None;
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm = None;
            None
        }
        _ => None, // Block all other input
    }
}

fn confirmed_command(pending: PendingConfirm) -> UserCommand {
    match pending {
        PendingConfirm::Quit => UserCommand::Quit,
        PendingConfirm::ClearRoster => UserCommand::ClearRoster,
        PendingConfirm::ResetHistory => UserCommand::ResetHistory,
        PendingConfirm::LoadDemo => UserCommand::LoadDemo,
    }
}

/// Handle key events while the text entry overlay is up.
///
/// - Printable characters are appended to the buffer
/// - Backspace removes the last character
/// - Enter commits (empty buffers just close the overlay)
/// - Esc cancels, discarding the buffer
fn handle_entry(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.entry = None;
            None
        }
        KeyCode::Enter => {
            let entry = view_state.entry.take()?;
            if entry.buffer.trim().is_empty() {
                return None;
            }
            match entry.purpose {
                EntryPurpose::AddNames => Some(UserCommand::AddNames(entry.buffer)),
                EntryPurpose::ImportPath => {
                    Some(UserCommand::ImportFile(PathBuf::from(entry.buffer.trim())))
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(ref mut entry) = view_state.entry {
                entry.buffer.pop();
            }
            None
        }
        KeyCode::Char(c) => {
            if let Some(ref mut entry) = view_state.entry {
                entry.buffer.push(c);
            }
            None
        }
        _ => None,
    }
}

/// Which scroll offset the arrow keys drive on the current tab: the
/// Groups tab owns its own panel, everywhere else they move the
/// history sidebar.
fn panel_scroll_key(view_state: &ViewState) -> &'static str {
    match view_state.active_tab {
        TabId::Groups => "groups",
        _ => "history",
    }
}

fn scroll_up(view_state: &mut ViewState, key: &str, lines: usize) {
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_sub(lines);
}

fn scroll_down(view_state: &mut ViewState, key: &str, lines: usize) {
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_add(lines);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
