//! Screen layout shared by the simulation and the renderer
//!
//! The simulation owns these rectangles (it hit-tests against them); the
//! renderer only draws them.

use glam::Vec2;

use crate::consts::*;
use crate::sim::Rect;

/// Harbor strip along the top: deliver cargo by walking into it
pub const BOAT_ZONE: Rect = Rect::new(0.0, 0.0, WIDTH, 95.0);
/// Wooden dock where requested supplies appear
pub const DOCK_AREA: Rect = Rect::new(80.0, 230.0, 320.0, 260.0);
/// Clipboard/status panel on the left
pub const PANEL: Rect = Rect::new(0.0, 0.0, 260.0, HEIGHT);
/// Whole play area (player is clamped to this)
pub const SCREEN: Rect = Rect::new(0.0, 0.0, WIDTH, HEIGHT);

pub const PLAYER_START: Vec2 = Vec2::new(120.0, 420.0);

/// Dock slot grid
pub const SLOT_MARGIN_X: f32 = 20.0;
pub const SLOT_MARGIN_TOP: f32 = 80.0;
pub const SLOT_CELL_W: f32 = 52.0;
pub const SLOT_CELL_H: f32 = 48.0;
pub const SLOT_W: f32 = 46.0;
pub const SLOT_H: f32 = 36.0;

/// Clipboard rows
pub const CLIPBOARD_TOP: f32 = 226.0;
pub const CLIPBOARD_ROW_H: f32 = 26.0;
pub const CHECKBOX_X: f32 = 20.0;
pub const CHECKBOX_SIZE: f32 = 18.0;

/// Boat drawing
pub const HULL_W: f32 = 280.0;
pub const HULL_H: f32 = 34.0;

/// Checkbox for the clipboard row at `index` (supply display order)
pub fn clipboard_checkbox(index: usize) -> Rect {
    Rect::new(
        CHECKBOX_X,
        CLIPBOARD_TOP + index as f32 * CLIPBOARD_ROW_H,
        CHECKBOX_SIZE,
        CHECKBOX_SIZE,
    )
}

/// Which clipboard row (if any) a click at `pos` lands on
pub fn clipboard_row_at(pos: Vec2, rows: usize) -> Option<usize> {
    (0..rows).find(|&i| clipboard_checkbox(i).contains_point(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_hit_test() {
        assert_eq!(clipboard_row_at(Vec2::new(25.0, 230.0), 6), Some(0));
        assert_eq!(clipboard_row_at(Vec2::new(25.0, 226.0 + 26.0 * 5.0 + 2.0), 6), Some(5));
        // Between rows
        assert_eq!(clipboard_row_at(Vec2::new(25.0, 226.0 + 20.0), 6), None);
        // Past the last row
        assert_eq!(clipboard_row_at(Vec2::new(25.0, 226.0 + 26.0 * 6.0 + 2.0), 6), None);
    }

    #[test]
    fn test_dock_inside_screen() {
        assert!(DOCK_AREA.right() <= WIDTH);
        assert!(DOCK_AREA.bottom() <= HEIGHT);
        assert!(!DOCK_AREA.overlaps(&BOAT_ZONE));
    }
}
