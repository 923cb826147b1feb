//! Axis-aligned rectangles in screen space
//!
//! y grows downward, so `top < bottom`. Overlap is strict: boxes that only
//! share an edge do not collide, which is what lets the player stand on a
//! row of blocks without touching the ones beside it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Panics on a non-positive or non-finite size
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(
            w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite(),
            "rectangle size must be positive, got {w}x{h}"
        );
        Self { x, y, w, h }
    }

    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Strict intersection test
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Whether the two boxes share any horizontal band
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.y < other.bottom() && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let touching = Rect::new(32.0, 0.0, 32.0, 32.0);
        let below = Rect::new(0.0, 32.0, 32.0, 32.0);
        let inside = Rect::new(16.0, 16.0, 32.0, 32.0);

        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_edge_setters() {
        let mut r = Rect::new(10.0, 10.0, 32.0, 32.0);
        r.set_bottom(100.0);
        assert_eq!(r.top(), 68.0);
        r.set_top(5.0);
        assert_eq!(r.bottom(), 37.0);
        r.set_right(64.0);
        assert_eq!(r.left(), 32.0);
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(150.0, 150.0), 32.0, 32.0);
        assert_eq!(r.left(), 134.0);
        assert_eq!(r.top(), 134.0);
        assert_eq!(r.center(), Vec2::new(150.0, 150.0));
    }

    #[test]
    #[should_panic(expected = "rectangle size must be positive")]
    fn test_zero_width_panics() {
        let _ = Rect::new(0.0, 0.0, 0.0, 10.0);
    }
}
