//! Per-frame round step
//!
//! One call per rendered frame. Timers compare `now` against timestamps stored
//! in the state; only the departing boat integrates `dt`.

use glam::Vec2;

use super::autopilot;
use super::catalog::CargoKind;
use super::state::{Delivery, Outcome, Phase, RoundState};
use crate::consts::*;
use crate::layout::clipboard_row_at;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys, each axis -1, 0 or 1 (y down)
    pub movement: Vec2,
    /// Confirm departure (Space)
    pub confirm: bool,
    /// Left click position in game pixels
    pub click: Option<Vec2>,
    /// Start a new round (R); only honored once the round has ended
    pub restart: bool,
    /// Idle/demo mode - the autopilot plays the round
    pub idle_mode: bool,
}

/// Things that happened during a frame (drive audio and the HUD)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundEvent {
    PhaseChanged(Phase),
    PickedUp(CargoKind),
    Loaded(CargoKind),
    /// Delivery would have exceeded capacity
    Refused(CargoKind),
    /// No free dock slot for a requested supply
    SpawnRefused(CargoKind),
    Victory,
    Failed,
    Restarted,
}

/// Advance the round by one frame
pub fn tick(state: &mut RoundState, input: &TickInput, now: f64, dt: f32) -> Vec<RoundEvent> {
    let mut events = Vec::new();

    let mut input = input.clone();
    if input.idle_mode {
        let auto = autopilot::drive(state);
        input.movement = auto.movement;
        input.confirm |= auto.confirm;
        if input.click.is_none() {
            input.click = auto.click;
        }
    }
    let input = &input;

    match state.phase {
        Phase::Docking { started_at } => {
            let t = ((now - started_at) / DOCK_SECONDS).max(0.0);
            if t >= 1.0 {
                state.boat_x = BOAT_TARGET_X;
                state.countdown_start = Some(now);
                state.requirements_met_at = None;
                change_phase(state, Phase::Allocation, &mut events);
            } else {
                // Boat sails in from the left
                state.boat_x = BOAT_START_X + (BOAT_TARGET_X - BOAT_START_X) * t as f32;
            }
        }

        Phase::Allocation => allocation_step(state, input, now, &mut events),

        Phase::Lashing { started_at } => {
            if now - started_at >= LASH_SECONDS {
                change_phase(state, Phase::Departing, &mut events);
            }
        }

        Phase::Departing => {
            state.boat_x += DEPART_SPEED * dt;
            if state.boat_x > DEPART_EXIT_X {
                change_phase(state, Phase::Ended(Outcome::Won), &mut events);
                events.push(RoundEvent::Victory);
            }
        }

        Phase::Ended(_) => {}
    }

    events
}

fn allocation_step(state: &mut RoundState, input: &TickInput, now: f64, events: &mut Vec<RoundEvent>) {
    if input.confirm && state.is_ready() {
        change_phase(state, Phase::Lashing { started_at: now }, events);
        return;
    }

    if let Some(pos) = input.click {
        if let Some(row) = clipboard_row_at(pos, state.clipboard.len()) {
            let kind = state.clipboard[row].kind;
            if state.toggle(kind) {
                events.extend(state.sync_dock().into_iter().map(RoundEvent::SpawnRefused));
            }
        }
    }

    let remaining = state.remaining_time(now);
    if state.is_ready() {
        let met_at = *state.requirements_met_at.get_or_insert(now);
        // Soft-lock guard: a ready boat never waits forever for confirm
        if now - met_at >= AUTO_LASH_DELAY || remaining <= 0.0 {
            log::debug!("Auto-lashing after {:.2}s ready", now - met_at);
            change_phase(state, Phase::Lashing { started_at: now }, events);
            return;
        }
    } else {
        state.requirements_met_at = None;
        if remaining <= 0.0 {
            log::warn!(
                "Countdown expired with {}/{} required items aboard",
                state
                    .manifest
                    .required
                    .iter()
                    .filter(|k| state.is_loaded(**k))
                    .count(),
                state.manifest.required.len()
            );
            change_phase(state, Phase::Ended(Outcome::Failed), events);
            events.push(RoundEvent::Failed);
            return;
        }
    }

    state.move_player(input.movement);

    if let Some(kind) = state.try_pick_up() {
        events.push(RoundEvent::PickedUp(kind));
    }

    match state.try_deliver() {
        Some(Delivery::Loaded(kind)) => events.push(RoundEvent::Loaded(kind)),
        Some(Delivery::Refused(kind)) => events.push(RoundEvent::Refused(kind)),
        None => {}
    }

    events.extend(state.sync_dock().into_iter().map(RoundEvent::SpawnRefused));
}

fn change_phase(state: &mut RoundState, next: Phase, events: &mut Vec<RoundEvent>) {
    state.enter(next);
    events.push(RoundEvent::PhaseChanged(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DOCK_AREA, clipboard_checkbox};
    use crate::sim::dock::DockGrid;
    use crate::sim::manifest::Manifest;
    use CargoKind::*;
    use proptest::prelude::*;

    fn manifest() -> Manifest {
        Manifest {
            required: vec![Medicine, Food, Water],
            supply: vec![Food, Blanket, Medicine, Ballast, Water, ExtraSail],
        }
    }

    /// Round already in allocation with the countdown started at t = 0
    fn allocating() -> RoundState {
        let mut state = RoundState::with_parts(manifest(), DockGrid::for_area(DOCK_AREA), 0.0);
        state.phase = Phase::Allocation;
        state.countdown_start = Some(0.0);
        state.boat_x = BOAT_TARGET_X;
        state
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn click_row(row: usize) -> TickInput {
        TickInput {
            click: Some(clipboard_checkbox(row).center()),
            ..Default::default()
        }
    }

    #[test]
    fn test_docking_to_allocation() {
        let mut state = RoundState::with_parts(manifest(), DockGrid::for_area(DOCK_AREA), 0.0);

        tick(&mut state, &idle(), 0.8, FRAME_DT);
        assert!(matches!(state.phase, Phase::Docking { .. }));
        assert!((state.boat_x - 0.0).abs() < 0.01); // halfway from -300 to 300

        let events = tick(&mut state, &idle(), 1.6, FRAME_DT);
        assert_eq!(state.phase, Phase::Allocation);
        assert_eq!(state.countdown_start, Some(1.6));
        assert_eq!(state.boat_x, BOAT_TARGET_X);
        assert_eq!(events, vec![RoundEvent::PhaseChanged(Phase::Allocation)]);
    }

    #[test]
    fn test_no_gameplay_while_docking() {
        let mut state = RoundState::with_parts(manifest(), DockGrid::for_area(DOCK_AREA), 0.0);
        tick(&mut state, &click_row(0), 0.1, FRAME_DT);
        assert!(!state.is_requested(Food));
    }

    #[test]
    fn test_click_toggles_and_spawns() {
        let mut state = allocating();
        tick(&mut state, &click_row(2), 1.0, FRAME_DT);
        assert!(state.is_requested(Medicine));
        assert!(state.dock_item(Medicine).is_some());

        tick(&mut state, &click_row(2), 1.1, FRAME_DT);
        assert!(!state.is_requested(Medicine));
        assert!(state.dock_items.is_empty());
    }

    #[test]
    fn test_click_on_loaded_row_is_ignored() {
        let mut state = allocating();
        state.loaded.push(Food);
        state.clipboard[0].requested = true;
        let before = state.clipboard.clone();

        tick(&mut state, &click_row(0), 1.0, FRAME_DT);
        assert_eq!(state.clipboard, before);
        assert!(state.dock_items.is_empty());
    }

    #[test]
    fn test_countdown_expiry_fails_round() {
        let mut state = allocating();
        state.loaded.push(Food);

        tick(&mut state, &idle(), 44.0, FRAME_DT);
        assert_eq!(state.phase, Phase::Allocation);

        let events = tick(&mut state, &idle(), 46.0, FRAME_DT);
        assert_eq!(state.phase, Phase::Ended(Outcome::Failed));
        assert!(state.failed());
        assert!(!state.won());
        assert!(events.contains(&RoundEvent::Failed));
        assert_eq!(state.remaining_time(46.0), 0.0);
    }

    #[test]
    fn test_auto_lash_after_delay() {
        let mut state = allocating();
        state.loaded.extend([Medicine, Food, Water]);

        tick(&mut state, &idle(), 10.0, FRAME_DT);
        assert_eq!(state.phase, Phase::Allocation);
        assert_eq!(state.requirements_met_at, Some(10.0));

        tick(&mut state, &idle(), 11.9, FRAME_DT);
        assert_eq!(state.phase, Phase::Allocation);

        tick(&mut state, &idle(), 12.0, FRAME_DT);
        assert_eq!(state.phase, Phase::Lashing { started_at: 12.0 });
    }

    #[test]
    fn test_ready_at_countdown_end_still_departs() {
        let mut state = allocating();
        state.loaded.extend([Medicine, Food, Water]);

        tick(&mut state, &idle(), 45.0, FRAME_DT);
        assert_eq!(state.phase, Phase::Lashing { started_at: 45.0 });
    }

    #[test]
    fn test_confirm_only_when_ready() {
        let mut state = allocating();
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };

        tick(&mut state, &confirm, 3.0, FRAME_DT);
        assert_eq!(state.phase, Phase::Allocation);

        state.loaded.extend([Medicine, Food, Water]);
        tick(&mut state, &confirm, 3.1, FRAME_DT);
        assert_eq!(state.phase, Phase::Lashing { started_at: 3.1 });
    }

    #[test]
    fn test_lashing_then_departure_wins() {
        let mut state = allocating();
        state.loaded.extend([Medicine, Food, Water]);
        state.phase = Phase::Lashing { started_at: 20.0 };

        tick(&mut state, &idle(), 21.0, FRAME_DT);
        assert!(matches!(state.phase, Phase::Lashing { .. }));
        tick(&mut state, &idle(), 21.25, FRAME_DT);
        assert_eq!(state.phase, Phase::Departing);

        let mut now = 21.25;
        let mut victory = false;
        for _ in 0..600 {
            now += f64::from(FRAME_DT);
            let events = tick(&mut state, &idle(), now, FRAME_DT);
            victory |= events.contains(&RoundEvent::Victory);
            if state.outcome().is_some() {
                break;
            }
        }
        assert!(victory);
        assert!(state.won());
        assert!(state.boat_x > DEPART_EXIT_X);
    }

    #[test]
    fn test_pickup_and_delivery_through_tick() {
        let mut state = allocating();
        tick(&mut state, &click_row(4), 1.0, FRAME_DT); // Water
        let rect = state.dock_item(Water).map(|d| d.rect).expect("spawned");
        state.player.x = rect.x;
        state.player.y = rect.y;

        let events = tick(&mut state, &idle(), 1.1, FRAME_DT);
        assert!(events.contains(&RoundEvent::PickedUp(Water)));
        assert_eq!(state.carrying, Some(Water));

        state.player.y = 50.0;
        let events = tick(&mut state, &idle(), 1.2, FRAME_DT);
        assert!(events.contains(&RoundEvent::Loaded(Water)));
        assert_eq!(state.loaded, vec![Water]);
        assert!(state.is_requested(Water));
    }

    #[test]
    fn test_ended_round_is_frozen() {
        let mut state = allocating();
        state.phase = Phase::Ended(Outcome::Failed);
        let events = tick(&mut state, &click_row(0), 100.0, FRAME_DT);
        assert!(events.is_empty());
        assert!(!state.is_requested(Food));
    }

    proptest! {
        #[test]
        fn prop_ready_boat_auto_lashes_after_delay(t0 in 0.0f64..30.0, d in 0.0f64..4.0) {
            let mut state = allocating();
            state.loaded.extend([Medicine, Food, Water]);

            tick(&mut state, &idle(), t0, FRAME_DT);
            prop_assert_eq!(state.requirements_met_at, Some(t0));

            let t1 = t0 + d;
            tick(&mut state, &idle(), t1, FRAME_DT);
            let lashing = matches!(state.phase, Phase::Lashing { .. });
            prop_assert_eq!(lashing, t1 - t0 >= AUTO_LASH_DELAY);
        }
    }
}
