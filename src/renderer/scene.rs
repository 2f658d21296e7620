//! Scene building
//!
//! Turns a `RoundState` into a triangle list in game pixels. Pure, so the
//! draw order can be tested without a GPU.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{BOAT_Y, PASSENGER_COUNT};
use crate::layout::{BOAT_ZONE, DOCK_AREA, HULL_H, HULL_W, PANEL, SCREEN, clipboard_checkbox};
use crate::sim::{Phase, Rect, RoundState};

/// Build the frame's geometry, back to front
pub fn build_scene(round: &RoundState) -> Vec<Vertex> {
    let mut v = Vec::with_capacity(2048);

    v.extend(shapes::rect(&SCREEN, colors::BACKGROUND));
    v.extend(shapes::rect(&BOAT_ZONE, colors::WATER));
    v.extend(dock(&DOCK_AREA));
    v.extend(shapes::rect(&PANEL, colors::PANEL));

    v.extend(boat(round.boat_x, BOAT_Y, round.loaded.len()));

    if round.phase.ordinal() >= Phase::Allocation.ordinal() {
        for (i, entry) in round.clipboard.iter().enumerate() {
            let bx = clipboard_checkbox(i);
            let fill = if round.is_loaded(entry.kind) {
                colors::CHECKBOX_LOCKED
            } else {
                colors::CHECKBOX
            };
            v.extend(shapes::rect(&bx, fill));
            if entry.requested {
                v.extend(check_mark(bx.x, bx.y));
            }
        }

        for item in &round.dock_items {
            v.extend(shapes::rect(&item.rect, colors::CRATE));
            v.extend(shapes::rect_outline(&item.rect, 2.0, colors::CRATE_EDGE));
        }

        if round.phase == Phase::Allocation {
            v.extend(shapes::rect(&round.player, colors::PLAYER));
        }
    }

    if round.outcome().is_some() {
        v.extend(shapes::rect(&SCREEN, colors::OVERLAY));
    }

    v
}

fn dock(area: &Rect) -> Vec<Vertex> {
    let mut v = shapes::rect(area, colors::DOCK);
    let mut y = area.y + 26.0;
    while y < area.bottom() {
        v.extend(shapes::line(
            Vec2::new(area.x, y),
            Vec2::new(area.right(), y),
            2.0,
            colors::DOCK_PLANK,
        ));
        y += 26.0;
    }
    v
}

/// Hull, mast and sail, the passengers, and one crate per loaded item
fn boat(x: f32, y: f32, cargo: usize) -> Vec<Vertex> {
    let mut v = Vec::new();

    let hull = [
        Vec2::new(x, y),
        Vec2::new(x + HULL_W, y),
        Vec2::new(x + HULL_W - 18.0, y + HULL_H),
        Vec2::new(x + 18.0, y + HULL_H),
    ];
    v.extend(shapes::polygon(&hull, colors::HULL));

    let mast_x = x + 114.0;
    v.extend(shapes::line(
        Vec2::new(mast_x, y),
        Vec2::new(mast_x, y - 46.0),
        3.0,
        colors::MAST,
    ));
    let sail = [
        Vec2::new(mast_x + 2.0, y - 44.0),
        Vec2::new(mast_x + 2.0, y - 14.0),
        Vec2::new(mast_x + 40.0, y - 14.0),
    ];
    v.extend(shapes::polygon(&sail, colors::SAIL));

    for i in 0..PASSENGER_COUNT {
        let center = Vec2::new(x + 250.0 - i as f32 * 18.0, y - 6.0);
        v.extend(shapes::circle(center, 6.0, colors::PASSENGER, 12));
    }

    for i in 0..cargo {
        let r = Rect::new(x + 20.0 + i as f32 * 22.0, y - 6.0, 18.0, 12.0);
        v.extend(shapes::rect(&r, colors::CRATE));
    }

    v
}

fn check_mark(x: f32, y: f32) -> Vec<Vertex> {
    let mut v = shapes::line(Vec2::new(x + 2.0, y + 9.0), Vec2::new(x + 8.0, y + 15.0), 3.0, colors::CHECK);
    v.extend(shapes::line(
        Vec2::new(x + 8.0, y + 15.0),
        Vec2::new(x + 16.0, y + 5.0),
        3.0,
        colors::CHECK,
    ));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DOCK_AREA;
    use crate::sim::{CargoKind, DockGrid, Manifest, Outcome};

    fn round() -> RoundState {
        let manifest = Manifest {
            required: vec![CargoKind::Food, CargoKind::Water, CargoKind::Blanket],
            supply: vec![
                CargoKind::Food,
                CargoKind::Ballast,
                CargoKind::Water,
                CargoKind::Blanket,
                CargoKind::Medicine,
                CargoKind::ExtraSail,
            ],
        };
        RoundState::with_parts(manifest, DockGrid::for_area(DOCK_AREA), 0.0)
    }

    fn count(v: &[Vertex], color: [f32; 4]) -> usize {
        v.iter().filter(|p| p.color == color).count()
    }

    #[test]
    fn test_docking_hides_player_and_clipboard() {
        let scene = build_scene(&round());
        assert_eq!(count(&scene, colors::PLAYER), 0);
        assert_eq!(count(&scene, colors::CHECKBOX), 0);
        assert_eq!(count(&scene, colors::OVERLAY), 0);
    }

    #[test]
    fn test_allocation_draws_player_rows_and_crates() {
        let mut state = round();
        state.phase = Phase::Allocation;
        state.toggle(CargoKind::Water);
        state.sync_dock();

        let scene = build_scene(&state);
        assert_eq!(count(&scene, colors::PLAYER), 6);
        assert_eq!(count(&scene, colors::CHECKBOX), 6 * 6);
        assert_eq!(count(&scene, colors::CHECK), 12);
        assert_eq!(count(&scene, colors::CRATE_EDGE), 24);
    }

    #[test]
    fn test_loaded_cargo_stacks_on_boat() {
        let mut state = round();
        let before = count(&build_scene(&state), colors::CRATE);
        state.loaded.extend([CargoKind::Food, CargoKind::Water]);
        let after = count(&build_scene(&state), colors::CRATE);
        assert_eq!(after - before, 12);
    }

    #[test]
    fn test_end_overlay_is_last() {
        let mut state = round();
        state.phase = Phase::Ended(Outcome::Won);
        let scene = build_scene(&state);
        assert_eq!(count(&scene, colors::OVERLAY), 6);
        assert_eq!(scene.last().map(|p| p.color), Some(colors::OVERLAY));
        assert_eq!(count(&scene, colors::PLAYER), 0);
    }
}
