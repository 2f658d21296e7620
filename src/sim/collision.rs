//! Collision detection for axis-aligned rectangles
//!
//! Everything that can touch in Tiny Cove is a box: the player, dock crates,
//! the boat zone and the clipboard checkboxes.

use glam::Vec2;

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Point test, inclusive on the top/left edge and exclusive on the bottom/right
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Move the rectangle so it lies inside `bounds` (size is kept)
    pub fn clamp_within(&mut self, bounds: &Rect) {
        if self.w >= bounds.w {
            self.x = bounds.x + (bounds.w - self.w) / 2.0;
        } else {
            self.x = self.x.clamp(bounds.x, bounds.right() - self.w);
        }
        if self.h >= bounds.h {
            self.y = bounds.y + (bounds.h - self.h) / 2.0;
        } else {
            self.y = self.y.clamp(bounds.y, bounds.bottom() - self.h);
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let inside = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_contains_point_edges() {
        let r = Rect::new(20.0, 226.0, 18.0, 18.0);
        assert!(r.contains_point(Vec2::new(20.0, 226.0)));
        assert!(r.contains_point(Vec2::new(29.0, 235.0)));
        assert!(!r.contains_point(Vec2::new(38.0, 235.0)));
        assert!(!r.contains_point(Vec2::new(29.0, 244.0)));
    }

    #[test]
    fn test_clamp_within_screen() {
        let bounds = Rect::new(0.0, 0.0, 900.0, 600.0);
        let mut r = Rect::new(-5.0, 590.0, 26.0, 26.0);
        r.clamp_within(&bounds);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 574.0);

        let mut inside = Rect::new(100.0, 100.0, 26.0, 26.0);
        inside.clamp_within(&bounds);
        assert_eq!(inside, Rect::new(100.0, 100.0, 26.0, 26.0));
    }
}
