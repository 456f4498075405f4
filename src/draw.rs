// Lucky draw state machine.
//
// Idle -> Spinning -> Idle. While spinning, a cosmetic cycle picks random
// eligible names purely for display; the winner comes from an independent
// fresh draw when the spin deadline fires, so the last cycled name is not
// necessarily the winner. The timers themselves live in the orchestrator
// loop (`app::run`), which keeps this module pure and testable.

use std::collections::HashSet;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::{Person, PersonId, Roster};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("no eligible candidates; reset the history or allow repeats")]
    NoCandidates,

    #[error("a draw is already in flight")]
    AlreadySpinning,
}

// ---------------------------------------------------------------------------
// Settings and phase
// ---------------------------------------------------------------------------

/// Eligibility toggle plus cosmetic feedback toggle; nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSettings {
    /// When true, past winners stay eligible.
    pub allow_repeats: bool,
    /// When true, a winner triggers the celebration banner.
    pub celebration: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        DrawSettings {
            allow_repeats: false,
            celebration: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Spinning,
}

// ---------------------------------------------------------------------------
// DrawEngine
// ---------------------------------------------------------------------------

/// Draw state: settings, prepend-ordered history, and the current phase.
///
/// The history is never deduplicated; with repeats allowed the same person
/// can appear any number of times.
#[derive(Debug)]
pub struct DrawEngine {
    pub settings: DrawSettings,
    history: Vec<Person>,
    winner: Option<Person>,
    phase: DrawPhase,
}

impl DrawEngine {
    pub fn new(settings: DrawSettings) -> Self {
        DrawEngine {
            settings,
            history: Vec::new(),
            winner: None,
            phase: DrawPhase::Idle,
        }
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == DrawPhase::Spinning
    }

    /// Winners, most recent first.
    pub fn history(&self) -> &[Person] {
        &self.history
    }

    /// The most recently selected winner, if any since the last reset.
    pub fn winner(&self) -> Option<&Person> {
        self.winner.as_ref()
    }

    /// The current eligible set: the full roster when repeats are allowed,
    /// otherwise the roster minus (by id) anyone already in the history.
    pub fn eligible<'a>(&self, roster: &'a Roster) -> Vec<&'a Person> {
        if self.settings.allow_repeats {
            return roster.people().iter().collect();
        }
        let drawn: HashSet<&PersonId> = self.history.iter().map(|p| &p.id).collect();
        roster
            .people()
            .iter()
            .filter(|p| !drawn.contains(&p.id))
            .collect()
    }

    pub fn eligible_count(&self, roster: &Roster) -> usize {
        self.eligible(roster).len()
    }

    /// Begin a draw. Rejected when one is already in flight or when the
    /// eligible set is empty; in both cases state is left untouched.
    pub fn start(&mut self, roster: &Roster) -> Result<(), DrawError> {
        if self.is_spinning() {
            return Err(DrawError::AlreadySpinning);
        }
        if self.eligible(roster).is_empty() {
            return Err(DrawError::NoCandidates);
        }
        self.winner = None;
        self.phase = DrawPhase::Spinning;
        Ok(())
    }

    /// Cosmetic display cycling: a uniformly random eligible name.
    ///
    /// Has no effect on the final outcome and no effect on state; returns
    /// `None` when not spinning or nothing is eligible.
    pub fn cycle<R: Rng>(&self, roster: &Roster, rng: &mut R) -> Option<String> {
        if !self.is_spinning() {
            return None;
        }
        let candidates = self.eligible(roster);
        if candidates.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..candidates.len());
        Some(candidates[index].name.clone())
    }

    /// Complete the draw: an independent uniform selection from the
    /// eligible set, prepended to the history. Transitions back to Idle
    /// whether or not a winner could be selected.
    pub fn finish<R: Rng>(&mut self, roster: &Roster, rng: &mut R) -> Result<Person, DrawError> {
        self.phase = DrawPhase::Idle;
        let candidates = self.eligible(roster);
        if candidates.is_empty() {
            return Err(DrawError::NoCandidates);
        }
        let index = rng.gen_range(0..candidates.len());
        let selected = candidates[index].clone();
        self.history.insert(0, selected.clone());
        self.winner = Some(selected.clone());
        Ok(selected)
    }

    /// Abort an in-flight spin without selecting a winner.
    pub fn cancel(&mut self) {
        self.phase = DrawPhase::Idle;
    }

    /// Clear the history and the winner display.
    pub fn reset_history(&mut self) {
        self.history.clear();
        self.winner = None;
    }
}

/// Pick a spin duration uniformly inside the configured window.
pub fn spin_duration<R: Rng>(min: Duration, max: Duration, rng: &mut R) -> Duration {
    let lo = min.as_millis() as u64;
    let hi = (max.as_millis() as u64).max(lo);
    Duration::from_millis(rng.gen_range(lo..=hi))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
