// Application state and orchestration logic.
//
// The central event loop that coordinates user commands from the TUI with
// the draw engine's two timers: a short recurring tick that drives the
// cosmetic name cycling, and a one-shot deadline that selects the actual
// winner. Both timers live inside the select loop, so breaking out of the
// loop (quit, channel closed) cancels them together and nothing can fire
// after teardown.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::draw::{spin_duration, DrawEngine, DrawSettings};
use crate::export::{FileExport, FsExport};
use crate::group::split_into_groups;
use crate::protocol::{AppSnapshot, UiUpdate, UserCommand};
use crate::roster::{parse_names, store, IdGenerator, Person, Roster};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
///
/// Owned exclusively by the orchestrator loop; every mutation happens in
/// response to a single `UserCommand` or timer event, so there is no
/// locking anywhere.
pub struct AppState {
    pub config: Config,
    pub roster: Roster,
    pub ids: IdGenerator,
    pub draw: DrawEngine,
    /// Result of the most recent group split, kept until the next run.
    pub groups: Vec<Vec<Person>>,
    /// Current target group size.
    pub group_size: usize,
    /// Absolute deadline of the in-flight spin. `Some` exactly while the
    /// draw engine is spinning.
    spin_deadline: Option<Instant>,
    rng: StdRng,
    exporter: Box<dyn FileExport + Send + Sync>,
}

impl AppState {
    /// Create a new AppState with an injected export capability.
    pub fn new(config: Config, exporter: Box<dyn FileExport + Send + Sync>) -> Self {
        let settings = DrawSettings {
            allow_repeats: config.draw.allow_repeats,
            celebration: config.draw.celebration,
        };
        let group_size = config.group.default_size;
        AppState {
            config,
            roster: Roster::new(),
            ids: IdGenerator::new(),
            draw: DrawEngine::new(settings),
            groups: Vec::new(),
            group_size,
            spin_deadline: None,
            rng: StdRng::from_entropy(),
            exporter,
        }
    }

    /// Create an AppState with the filesystem exporter derived from config.
    pub fn from_config(config: Config) -> Self {
        let dir = config
            .export
            .dir
            .clone()
            .unwrap_or_else(FsExport::default_dir);
        let exporter = Box::new(FsExport::new(dir));
        AppState::new(config, exporter)
    }

    /// Build an `AppSnapshot` from the current application state.
    ///
    /// Everything the TUI displays is captured here so the view can be
    /// replaced wholesale after each mutation.
    pub fn build_snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            people: self.roster.people().to_vec(),
            duplicate_names: self.roster.duplicate_names(),
            settings: self.draw.settings,
            eligible_count: self.draw.eligible_count(&self.roster),
            spinning: self.draw.is_spinning(),
            winner: self.draw.winner().cloned(),
            history: self.draw.history().to_vec(),
            group_size: self.group_size,
            groups: self.groups.clone(),
        }
    }

    fn add_people(&mut self, people: Vec<Person>) {
        if people.is_empty() {
            return;
        }
        info!("Adding {} people to the roster", people.len());
        self.roster.extend(people);
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Listens on the command channel and the two draw timers with
/// `tokio::select!`. Pushes `UiUpdate`s through `ui_tx` for the TUI
/// render loop. Returns when the user quits or the command channel
/// closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    // Recurring tick for the cosmetic name cycling. Only polled while a
    // spin is in flight (see the branch precondition below). The first
    // tick completes immediately; consume it so cycling starts one full
    // tick after a spin begins.
    let mut cycle_tick = tokio::time::interval(state.config.draw.cycle_tick());
    cycle_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    cycle_tick.tick().await;

    // Initial snapshot so the TUI has something to render.
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(state.build_snapshot())))
        .await;

    loop {
        tokio::select! {
            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- Cosmetic cycling (only while spinning) ---
            _ = cycle_tick.tick(), if state.draw.is_spinning() => {
                if let Some(name) = state.draw.cycle(&state.roster, &mut state.rng) {
                    let _ = ui_tx.send(UiUpdate::CycleName(name)).await;
                }
            }

            // --- Spin completion (one-shot, absolute deadline) ---
            _ = tokio::time::sleep_until(state.spin_deadline.unwrap_or_else(Instant::now)),
                if state.spin_deadline.is_some() =>
            {
                finish_spin(&mut state, &ui_tx).await;
            }
        }
    }

    // Breaking out of the loop drops both timer futures; cancel the
    // engine too so state is consistent if teardown races a spin.
    state.draw.cancel();
    state.spin_deadline = None;
    info!("Application event loop exiting");
    Ok(())
}

/// Handle a user command from the TUI.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::AddNames(text) => {
            // Blank input parses to zero records: a silent no-op.
            let people = parse_names(&text, &state.ids);
            state.add_people(people);
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::ImportFile(path) => {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let people = parse_names(&text, &state.ids);
                    if people.is_empty() {
                        // A file with no names is treated like blank input.
                        info!("No names found in {}", path.display());
                        return;
                    }
                    info!("Imported {} names from {}", people.len(), path.display());
                    let _ = ui_tx
                        .send(UiUpdate::Notice(format!(
                            "imported {} names from {}",
                            people.len(),
                            path.display()
                        )))
                        .await;
                    state.add_people(people);
                    send_snapshot(state, ui_tx).await;
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                    let _ = ui_tx
                        .send(UiUpdate::Notice(format!(
                            "could not read {}: {}",
                            path.display(),
                            e
                        )))
                        .await;
                }
            }
        }
        UserCommand::LoadDemo => {
            info!("Loading demo roster");
            state.add_people(store::demo_people(&state.ids));
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::RemovePerson(id) => {
            if state.roster.remove(&id) {
                send_snapshot(state, ui_tx).await;
            } else {
                warn!("RemovePerson for unknown id {id}");
            }
        }
        UserCommand::RemoveDuplicates => {
            let removed = state.roster.remove_duplicates();
            info!("Removed {} duplicate records", removed);
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::ClearRoster => {
            // An in-flight spin has nothing left to draw from; abort it
            // before its deadline fires.
            if state.draw.is_spinning() {
                state.draw.cancel();
                state.spin_deadline = None;
            }
            info!("Clearing roster ({} people)", state.roster.len());
            state.roster.clear();
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::StartDraw => match state.draw.start(&state.roster) {
            Ok(()) => {
                let (min, max) = state.config.draw.spin_window();
                let duration = spin_duration(min, max, &mut state.rng);
                state.spin_deadline = Some(Instant::now() + duration);
                info!("Draw started, completing in {:?}", duration);
                send_snapshot(state, ui_tx).await;
            }
            Err(e) => {
                warn!("Draw rejected: {e}");
                let _ = ui_tx.send(UiUpdate::Notice(e.to_string())).await;
            }
        },
        UserCommand::ToggleRepeats => {
            state.draw.settings.allow_repeats = !state.draw.settings.allow_repeats;
            info!(
                "allow_repeats toggled to {}",
                state.draw.settings.allow_repeats
            );
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::ToggleCelebration => {
            state.draw.settings.celebration = !state.draw.settings.celebration;
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::ResetHistory => {
            info!(
                "Resetting draw history ({} entries)",
                state.draw.history().len()
            );
            state.draw.reset_history();
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::SetGroupSize(size) => {
            state.group_size = size.max(1);
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::SplitGroups => {
            state.groups =
                split_into_groups(state.roster.people(), state.group_size, &mut state.rng);
            info!(
                "Split {} people into {} groups of target size {}",
                state.roster.len(),
                state.groups.len(),
                state.group_size
            );
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::ExportCsv => {
            report_export(state.exporter.export_csv(&state.groups), ui_tx).await;
        }
        UserCommand::ExportText => {
            report_export(state.exporter.export_text(&state.groups), ui_tx).await;
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

/// Complete an in-flight spin: independent winner selection and UI updates.
async fn finish_spin(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    state.spin_deadline = None;
    match state.draw.finish(&state.roster, &mut state.rng) {
        Ok(winner) => {
            info!("Draw complete: {} wins", winner.name);
            let celebrate = state.draw.settings.celebration;
            let _ = ui_tx
                .send(UiUpdate::DrawFinished {
                    winner: Box::new(winner),
                    celebrate,
                })
                .await;
            send_snapshot(state, ui_tx).await;
        }
        Err(e) => {
            // Possible if the roster was cleared mid-spin without the
            // guard above (e.g. future command paths); surface it rather
            // than inventing a winner.
            warn!("Spin finished with no candidates: {e}");
            let _ = ui_tx.send(UiUpdate::Notice(e.to_string())).await;
            send_snapshot(state, ui_tx).await;
        }
    }
}

async fn send_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(state.build_snapshot())))
        .await;
}

async fn report_export(
    result: Result<std::path::PathBuf, crate::export::ExportError>,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match result {
        Ok(path) => {
            info!("Exported groups to {}", path.display());
            let _ = ui_tx
                .send(UiUpdate::Notice(format!("exported to {}", path.display())))
                .await;
        }
        Err(e) => {
            warn!("Export failed: {e}");
            let _ = ui_tx.send(UiUpdate::Notice(e.to_string())).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
