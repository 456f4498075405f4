// Message types shared between the app orchestrator and the TUI.
//
// The TUI sends `UserCommand`s over one mpsc channel; the orchestrator
// answers with `UiUpdate`s over another. State only ever flows in whole
// snapshots (plus the high-frequency cosmetic cycle names), so the TUI
// can never drift out of sync with the authoritative state.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::draw::DrawSettings;
use crate::roster::{Person, PersonId};

/// Which tab is active in the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Roster,
    Draw,
    Groups,
}

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Parse free text and append the records to the roster.
    AddNames(String),
    /// Read a text/CSV file and append its parsed names.
    ImportFile(PathBuf),
    /// Append the built-in demo roster.
    LoadDemo,
    /// Remove one person by id.
    RemovePerson(PersonId),
    /// Drop repeated names, keeping first occurrences.
    RemoveDuplicates,
    /// Drop everyone. The TUI confirms before sending this.
    ClearRoster,
    /// Begin a draw spin.
    StartDraw,
    /// Flip the allow-repeats eligibility toggle.
    ToggleRepeats,
    /// Flip the celebration toggle.
    ToggleCelebration,
    /// Clear draw history. The TUI confirms before sending this.
    ResetHistory,
    /// Change the target group size.
    SetGroupSize(usize),
    /// Run a fresh random group split.
    SplitGroups,
    /// Export the current groups as CSV.
    ExportCsv,
    /// Export the current groups as plain text.
    ExportText,
    /// Shut down.
    Quit,
}

/// Complete display state pushed to the TUI after every mutation.
#[derive(Debug, Clone, Default)]
pub struct AppSnapshot {
    pub people: Vec<Person>,
    pub duplicate_names: HashSet<String>,
    pub settings: DrawSettings,
    pub eligible_count: usize,
    pub spinning: bool,
    pub winner: Option<Person>,
    pub history: Vec<Person>,
    pub group_size: usize,
    pub groups: Vec<Vec<Person>>,
}

/// Updates pushed from the orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Full display state; replaces everything the TUI mirrors.
    StateSnapshot(Box<AppSnapshot>),
    /// Cosmetic name cycling while a spin is in flight.
    CycleName(String),
    /// A spin completed with this winner.
    DrawFinished { winner: Box<Person>, celebrate: bool },
    /// A transient user-visible message (errors, export destinations).
    Notice(String),
}
