//! Idle/demo autopilot
//!
//! Plays a round the simple way: request one missing required item, fetch it,
//! carry it straight up to the boat, and confirm once everything is aboard.

use glam::Vec2;

use super::state::{Phase, RoundState};
use super::tick::TickInput;
use crate::layout::{BOAT_ZONE, clipboard_checkbox};

/// Per-axis distance under which the autopilot stops steering
const DEADZONE: f32 = 2.0;

/// Decide this frame's input from the current state
pub fn drive(state: &RoundState) -> TickInput {
    let mut input = TickInput::default();
    if state.phase != Phase::Allocation {
        return input;
    }

    if state.is_ready() {
        input.confirm = true;
        return input;
    }

    if state.carrying.is_some() {
        let target = Vec2::new(state.player.center().x, BOAT_ZONE.center().y);
        input.movement = steer(state.player.center(), target);
        return input;
    }

    // Drop stray requests so they do not block slots or get picked up en route
    if let Some(row) = state
        .clipboard
        .iter()
        .position(|e| e.requested && !state.is_loaded(e.kind) && !state.manifest.is_required(e.kind))
    {
        input.click = Some(clipboard_checkbox(row).center());
        return input;
    }

    let Some(next) = state
        .manifest
        .required
        .iter()
        .copied()
        .find(|&k| !state.is_loaded(k))
    else {
        return input;
    };

    if let Some(item) = state.dock_item(next) {
        input.movement = steer(state.player.center(), item.rect.center());
    } else if !state.is_requested(next) {
        if let Some(row) = state.clipboard.iter().position(|e| e.kind == next) {
            input.click = Some(clipboard_checkbox(row).center());
        }
    }

    input
}

fn steer(from: Vec2, to: Vec2) -> Vec2 {
    let axis = |d: f32| {
        if d > DEADZONE {
            1.0
        } else if d < -DEADZONE {
            -1.0
        } else {
            0.0
        }
    };
    let d = to - from;
    Vec2::new(axis(d.x), axis(d.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::layout::DOCK_AREA;
    use crate::sim::catalog::CargoKind::{self, *};
    use crate::sim::dock::DockGrid;
    use crate::sim::manifest::Manifest;
    use crate::sim::session::Session;
    use crate::sim::state::Outcome;
    use crate::sim::tick::tick;

    fn allocating() -> RoundState {
        let manifest = Manifest {
            required: vec![Water, Medicine, Food],
            supply: vec![Ballast, Food, Blanket, Medicine, Water, ExtraSail],
        };
        let mut state = RoundState::with_parts(manifest, DockGrid::for_area(DOCK_AREA), 0.0);
        state.phase = Phase::Allocation;
        state.countdown_start = Some(0.0);
        state
    }

    #[test]
    fn test_requests_first_missing_required() {
        let state = allocating();
        let input = drive(&state);
        assert_eq!(input.click, Some(clipboard_checkbox(4).center()));
        assert_eq!(input.movement, Vec2::ZERO);
    }

    #[test]
    fn test_unchecks_strays_first() {
        let mut state = allocating();
        state.toggle(Blanket);
        state.sync_dock();
        assert_eq!(drive(&state).click, Some(clipboard_checkbox(2).center()));
    }

    #[test]
    fn test_carries_straight_up() {
        let mut state = allocating();
        state.carrying = Some(Water);
        let input = drive(&state);
        assert_eq!(input.movement, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_confirms_when_ready() {
        let mut state = allocating();
        state.loaded.extend([Food, Water, Medicine]);
        assert!(drive(&state).confirm);
    }

    #[test]
    fn test_inactive_outside_allocation() {
        let mut state = allocating();
        state.phase = Phase::Departing;
        let input = drive(&state);
        assert!(!input.confirm && input.click.is_none());
        assert_eq!(input.movement, Vec2::ZERO);
    }

    fn play_out(state: &mut RoundState) -> f64 {
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut now = 0.0;
        for _ in 0..(FPS as usize * 120) {
            now += f64::from(FRAME_DT);
            tick(state, &input, now, FRAME_DT);
            if state.outcome().is_some() {
                break;
            }
        }
        now
    }

    #[test]
    fn test_autopilot_wins_a_round() {
        let mut state = allocating();
        let finished_at = play_out(&mut state);
        assert_eq!(state.outcome(), Some(Outcome::Won));
        assert!(finished_at < COUNTDOWN_SECONDS);
        for kind in [Water, Medicine, Food] {
            assert!(state.loaded.contains(&kind));
        }
    }

    #[test]
    fn test_autopilot_wins_seeded_rounds() {
        for seed in [1u64, 2, 3, 42, 1234] {
            let mut session = Session::new(seed, 0.0);
            play_out(&mut session.round);
            assert!(session.round.won(), "seed {seed} did not win");
            let required: Vec<CargoKind> = session.round.manifest.required.clone();
            assert!(required.iter().all(|k| session.round.is_loaded(*k)));
        }
    }
}
