//! Dock spawn grid
//!
//! Requested supplies appear in a fixed grid of non-overlapping slots inside
//! the dock. When every slot is taken, nothing else can spawn.

use super::catalog::CargoKind;
use super::collision::Rect;
use crate::layout::{SLOT_CELL_H, SLOT_CELL_W, SLOT_H, SLOT_MARGIN_TOP, SLOT_MARGIN_X, SLOT_W};

/// Pre-computed spawn slots, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct DockGrid {
    slots: Vec<Rect>,
}

impl DockGrid {
    /// Lay out as many slots as fit inside `area` (always at least one)
    pub fn for_area(area: Rect) -> Self {
        let left = area.x + SLOT_MARGIN_X;
        let top = area.y + SLOT_MARGIN_TOP;
        let cols = (((area.w - 2.0 * SLOT_MARGIN_X) / SLOT_CELL_W).floor() as usize).max(1);
        let rows = (((area.h - SLOT_MARGIN_TOP - 2.0 * SLOT_MARGIN_X) / SLOT_CELL_H).floor() as usize).max(1);

        let mut slots = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                slots.push(Rect::new(
                    left + c as f32 * SLOT_CELL_W,
                    top + r as f32 * SLOT_CELL_H,
                    SLOT_W,
                    SLOT_H,
                ));
            }
        }
        Self { slots }
    }

    pub fn from_slots(slots: Vec<Rect>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Rect] {
        &self.slots
    }

    /// First slot not listed in `occupied`
    pub fn first_free(&self, occupied: &[DockItem]) -> Option<usize> {
        (0..self.slots.len()).find(|i| occupied.iter().all(|item| item.slot != *i))
    }
}

/// A requested supply waiting on the dock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockItem {
    pub kind: CargoKind,
    pub slot: usize,
    pub rect: Rect,
}
