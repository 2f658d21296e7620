//! Round state and core simulation types
//!
//! A `RoundState` lives for exactly one round. Restarting builds a new one;
//! nothing is ever reset field by field.

use glam::Vec2;
use rand::Rng;

use super::catalog::CargoKind;
use super::collision::Rect;
use super::dock::{DockGrid, DockItem};
use super::manifest::Manifest;
use super::weight::{admits, required_satisfied};
use crate::consts::*;
use crate::layout::{BOAT_ZONE, DOCK_AREA, PLAYER_START, SCREEN};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Boat left with the required cargo
    Won,
    /// Countdown ran out before the manifest was complete
    Failed,
}

/// Round phase, in strict forward order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Boat sails in; no gameplay
    Docking { started_at: f64 },
    /// Countdown running, player loads cargo
    Allocation,
    /// Cargo being secured
    Lashing { started_at: f64 },
    /// Boat sails off screen
    Departing,
    /// Terminal; waits for restart
    Ended(Outcome),
}

impl Phase {
    /// Position in the forward order (phases never go backwards)
    pub fn ordinal(&self) -> u8 {
        match self {
            Phase::Docking { .. } => 0,
            Phase::Allocation => 1,
            Phase::Lashing { .. } => 2,
            Phase::Departing => 3,
            Phase::Ended(_) => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Docking { .. } => "docking",
            Phase::Allocation => "allocation",
            Phase::Lashing { .. } => "lashing",
            Phase::Departing => "departing",
            Phase::Ended(Outcome::Won) => "ended (won)",
            Phase::Ended(Outcome::Failed) => "ended (failed)",
        }
    }
}

/// One clipboard row: a supply and whether the player asked for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub kind: CargoKind,
    pub requested: bool,
}

/// Result of trying to put the carried item aboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Loaded(CargoKind),
    /// Would exceed capacity; the item went back to the dock
    Refused(CargoKind),
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    pub phase: Phase,
    pub manifest: Manifest,
    /// Supply rows in display order
    pub clipboard: Vec<ClipboardEntry>,
    /// Requested supplies currently on the dock, in spawn order
    pub dock_items: Vec<DockItem>,
    pub dock: DockGrid,
    pub carrying: Option<CargoKind>,
    /// Cargo aboard, in load order; never shrinks
    pub loaded: Vec<CargoKind>,
    pub player: Rect,
    /// Boat hull left edge
    pub boat_x: f32,
    /// When the allocation countdown started
    pub countdown_start: Option<f64>,
    /// When readiness first held (cleared if it is lost)
    pub requirements_met_at: Option<f64>,
}

impl RoundState {
    /// Start a fresh round at time `now` with a random manifest
    pub fn new<R: Rng + ?Sized>(rng: &mut R, now: f64) -> Self {
        Self::with_parts(Manifest::generate(rng), DockGrid::for_area(DOCK_AREA), now)
    }

    pub fn with_parts(manifest: Manifest, dock: DockGrid, now: f64) -> Self {
        let clipboard = manifest
            .supply
            .iter()
            .map(|&kind| ClipboardEntry { kind, requested: false })
            .collect();

        Self {
            phase: Phase::Docking { started_at: now },
            manifest,
            clipboard,
            dock_items: Vec::new(),
            dock,
            carrying: None,
            loaded: Vec::new(),
            player: Rect::new(PLAYER_START.x, PLAYER_START.y, PLAYER_SIZE, PLAYER_SIZE),
            boat_x: BOAT_START_X,
            countdown_start: None,
            requirements_met_at: None,
        }
    }

    /// Move to `next`, which must come later in the phase order
    pub fn enter(&mut self, next: Phase) {
        debug_assert!(
            next.ordinal() > self.phase.ordinal(),
            "phase went backwards: {} -> {}",
            self.phase.name(),
            next.name()
        );
        log::info!("Phase {} -> {}", self.phase.name(), next.name());
        self.phase = next;
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn won(&self) -> bool {
        self.outcome() == Some(Outcome::Won)
    }

    pub fn failed(&self) -> bool {
        self.outcome() == Some(Outcome::Failed)
    }

    pub fn is_loaded(&self, kind: CargoKind) -> bool {
        self.loaded.contains(&kind)
    }

    pub fn is_requested(&self, kind: CargoKind) -> bool {
        self.clipboard
            .iter()
            .any(|e| e.kind == kind && e.requested)
    }

    pub fn dock_item(&self, kind: CargoKind) -> Option<&DockItem> {
        self.dock_items.iter().find(|d| d.kind == kind)
    }

    fn set_requested(&mut self, kind: CargoKind, requested: bool) {
        if let Some(entry) = self.clipboard.iter_mut().find(|e| e.kind == kind) {
            entry.requested = requested;
        }
    }

    /// Readiness to depart: every required item is aboard
    pub fn is_ready(&self) -> bool {
        required_satisfied(&self.loaded, &self.manifest.required)
    }

    /// Countdown left, clamped at zero; full countdown before allocation starts
    pub fn remaining_time(&self, now: f64) -> f64 {
        match self.countdown_start {
            Some(start) => countdown_remaining(now - start),
            None => COUNTDOWN_SECONDS,
        }
    }

    /// Seconds until the soft-lock guard lashes the cargo (while ready)
    pub fn auto_lash_in(&self, now: f64) -> f64 {
        match self.requirements_met_at {
            Some(met) => (AUTO_LASH_DELAY - (now - met)).max(0.0),
            None => AUTO_LASH_DELAY,
        }
    }

    /// Flip a clipboard row. Loaded rows are locked; returns whether anything changed.
    pub fn toggle(&mut self, kind: CargoKind) -> bool {
        if self.is_loaded(kind) {
            return false;
        }
        match self.clipboard.iter_mut().find(|e| e.kind == kind) {
            Some(entry) => {
                entry.requested = !entry.requested;
                true
            }
            None => false,
        }
    }

    /// Bring the dock in line with the clipboard.
    ///
    /// Unrequested supplies leave the dock; requested ones that are neither
    /// loaded nor carried get a slot. Returns the kinds refused for lack of
    /// space (their rows are un-checked).
    pub fn sync_dock(&mut self) -> Vec<CargoKind> {
        let clipboard = &self.clipboard;
        self.dock_items.retain(|item| {
            clipboard
                .iter()
                .any(|e| e.kind == item.kind && e.requested)
        });

        let wanted: Vec<CargoKind> = self
            .clipboard
            .iter()
            .filter(|e| e.requested)
            .map(|e| e.kind)
            .filter(|&k| !self.is_loaded(k) && self.carrying != Some(k))
            .collect();

        let mut refused = Vec::new();
        for kind in wanted {
            if self.dock_item(kind).is_some() {
                continue;
            }
            match self.dock.first_free(&self.dock_items) {
                Some(slot) => {
                    let rect = self.dock.slots()[slot];
                    self.dock_items.push(DockItem { kind, slot, rect });
                }
                None => {
                    log::debug!("Dock full, refusing to spawn {kind}");
                    self.set_requested(kind, false);
                    refused.push(kind);
                }
            }
        }
        refused
    }

    /// Move the player by a held direction (each axis -1, 0 or 1)
    pub fn move_player(&mut self, direction: Vec2) {
        let mult = if self.carrying.is_some() { CARRY_SPEED_MULT } else { 1.0 };
        let step = (PLAYER_SPEED * mult).floor();
        let dir = Vec2::new(direction.x.signum_or_zero(), direction.y.signum_or_zero());
        self.player.translate(dir * step);
        self.player.clamp_within(&SCREEN);
    }

    /// Pick up the first dock item the player touches (hands must be empty)
    pub fn try_pick_up(&mut self) -> Option<CargoKind> {
        if self.carrying.is_some() {
            return None;
        }
        let idx = self
            .dock_items
            .iter()
            .position(|item| self.player.overlaps(&item.rect))?;
        let item = self.dock_items.remove(idx);
        self.carrying = Some(item.kind);
        self.set_requested(item.kind, false);
        Some(item.kind)
    }

    /// Try to put the carried item aboard if the player is in the boat zone
    pub fn try_deliver(&mut self) -> Option<Delivery> {
        if self.carrying.is_some() && self.player.overlaps(&BOAT_ZONE) {
            self.load_carried()
        } else {
            None
        }
    }

    /// Capacity-checked load of the carried item.
    ///
    /// Either way the row ends up checked: locked when loaded, or respawned on
    /// the dock when refused.
    pub fn load_carried(&mut self) -> Option<Delivery> {
        let kind = self.carrying.take()?;
        self.set_requested(kind, true);

        if self.is_loaded(kind) {
            log::debug!("{kind} already aboard, dropping the duplicate");
            return None;
        }

        if admits(&self.loaded, kind) {
            self.loaded.push(kind);
            Some(Delivery::Loaded(kind))
        } else {
            log::info!("{kind} refused: boat would be over capacity");
            self.sync_dock();
            Some(Delivery::Refused(kind))
        }
    }
}

/// Displayed countdown after `elapsed` seconds of allocation; never negative
pub fn countdown_remaining(elapsed: f64) -> f64 {
    (COUNTDOWN_SECONDS - elapsed).max(0.0)
}

trait SignumOrZero {
    fn signum_or_zero(self) -> Self;
}

impl SignumOrZero for f32 {
    fn signum_or_zero(self) -> f32 {
        if self > 0.0 {
            1.0
        } else if self < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}
