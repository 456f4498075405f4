// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors relevant parts of the application
// state. The app orchestrator pushes `UiUpdate` messages over an mpsc channel;
// the TUI applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::draw::DrawSettings;
use crate::protocol::{AppSnapshot, TabId, UiUpdate, UserCommand};
use crate::roster::Person;

use layout::build_layout;

/// How long a transient notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// How long the winner celebration banner stays on screen.
const CELEBRATION_TTL: Duration = Duration::from_secs(3);

// ---------------------------------------------------------------------------
// Modal state
// ---------------------------------------------------------------------------

/// Destructive actions that require a y/n confirmation before the
/// command is sent to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    Quit,
    ClearRoster,
    ResetHistory,
    /// Appending the demo names to a roster that already has people.
    LoadDemo,
}

/// What the text entry overlay is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPurpose {
    /// Free text parsed into names (newline entered as commas).
    AddNames,
    /// Path to a text/CSV file to import.
    ImportPath,
}

/// A single-line text entry overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub purpose: EntryPurpose,
    pub buffer: String,
}

impl TextEntry {
    pub fn new(purpose: EntryPurpose) -> Self {
        TextEntry {
            purpose,
            buffer: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated via `UiUpdate` messages from the app orchestrator. The
/// `render_frame` function reads this struct to draw the dashboard.
pub struct ViewState {
    /// Mirror of the roster, in insertion order.
    pub people: Vec<Person>,
    /// Names that appear more than once in the roster.
    pub duplicate_names: HashSet<String>,
    /// Index of the selected roster row.
    pub selected: usize,
    /// Draw toggles as the orchestrator last reported them.
    pub settings: DrawSettings,
    /// How many people the next draw can pick from.
    pub eligible_count: usize,
    /// Whether a spin is in flight.
    pub spinning: bool,
    /// The name currently shown on the wheel (cycling or final).
    pub display_name: Option<String>,
    /// The most recent winner.
    pub winner: Option<Person>,
    /// Past winners, most recent first.
    pub history: Vec<Person>,
    /// Target group size for the next split.
    pub group_size: usize,
    /// Result of the most recent group split.
    pub groups: Vec<Vec<Person>>,
    /// Which tab is active in the main panel.
    pub active_tab: TabId,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// Transient message and when it expires.
    pub notice: Option<(String, Instant)>,
    /// Winner celebration banner deadline, if one is showing.
    pub celebrate_until: Option<Instant>,
    /// Active confirmation modal, if any.
    pub confirm: Option<PendingConfirm>,
    /// Active text entry overlay, if any.
    pub entry: Option<TextEntry>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            people: Vec::new(),
            duplicate_names: HashSet::new(),
            selected: 0,
            settings: DrawSettings::default(),
            eligible_count: 0,
            spinning: false,
            display_name: None,
            winner: None,
            history: Vec::new(),
            group_size: 1,
            groups: Vec::new(),
            active_tab: TabId::Roster,
            scroll_offset: HashMap::new(),
            notice: None,
            celebrate_until: None,
            confirm: None,
            entry: None,
        }
    }
}

impl ViewState {
    /// Apply a full state snapshot from the app orchestrator.
    ///
    /// Replaces every mirrored field. TUI-local state (tab, modals,
    /// scroll offsets, notices) is left unchanged, except that the
    /// roster selection is clamped to the new roster length.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        self.people = snapshot.people;
        self.duplicate_names = snapshot.duplicate_names;
        self.settings = snapshot.settings;
        self.eligible_count = snapshot.eligible_count;
        self.spinning = snapshot.spinning;
        self.winner = snapshot.winner;
        self.history = snapshot.history;
        self.group_size = snapshot.group_size;
        self.groups = snapshot.groups;

        if !self.spinning {
            self.display_name = self.winner.as_ref().map(|w| w.name.clone());
        }
        self.selected = self.selected.min(self.people.len().saturating_sub(1));
    }

    /// Drop the notice and celebration banners once their deadlines pass.
    pub fn expire_banners(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|(_, until)| *until <= now) {
            self.notice = None;
        }
        if self.celebrate_until.is_some_and(|until| until <= now) {
            self.celebrate_until = None;
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::CycleName(name) => {
            state.display_name = Some(name);
        }
        UiUpdate::DrawFinished { winner, celebrate } => {
            state.display_name = Some(winner.name.clone());
            state.winner = Some(*winner);
            if celebrate {
                state.celebrate_until = Some(Instant::now() + CELEBRATION_TTL);
            }
        }
        UiUpdate::Notice(text) => {
            state.notice = Some((text, Instant::now() + NOTICE_TTL));
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::banner::render(frame, layout.banner, state);

    match state.active_tab {
        TabId::Roster => widgets::roster_list::render(frame, layout.main_panel, state),
        TabId::Draw => widgets::wheel::render(frame, layout.main_panel, state),
        TabId::Groups => widgets::groups::render(frame, layout.main_panel, state),
    }
    widgets::history::render(frame, layout.sidebar, state);
    widgets::help_bar::render(frame, layout.help_bar, state);

    // Modal overlays sit on top of everything else.
    if let Some(ref entry) = state.entry {
        widgets::entry::render(frame, frame.area(), entry);
    }
    if let Some(confirm) = state.confirm {
        widgets::confirm::render(frame, frame.area(), confirm);
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal even on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    // ~30 fps render interval.
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // Updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quitting = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quitting {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse events, resize events, etc. -- ignore
                    }
                    Some(Err(_)) | None => {
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                view_state.expire_banners(Instant::now());
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
