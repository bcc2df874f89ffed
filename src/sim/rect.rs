//! Axis-aligned rectangle geometry
//!
//! Screen space: positions are top-left anchored and y grows downward,
//! so `bottom` is the larger y coordinate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A box defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Midpoint of the top edge
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    /// Strict overlap test: rectangles sharing only an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Copy displaced by `delta`
    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect {
            pos: self.pos + delta,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 25.0, 50.0, 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        let far = Rect::new(200.0, 0.0, 50.0, 50.0);
        assert!(!a.intersects(&far));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        // Shares the right edge of `a`
        let beside = Rect::new(50.0, 0.0, 50.0, 50.0);
        assert!(!a.intersects(&beside));
        // Shares the bottom edge of `a`
        let below = Rect::new(0.0, 50.0, 50.0, 50.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(25.0, 25.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(10.0, 20.0, 50.0, 50.0);
        let moved = r.translated(Vec2::new(0.0, 3.0));
        assert_eq!(moved.pos, Vec2::new(10.0, 23.0));
        assert_eq!(moved.size, r.size);
        // Original untouched
        assert_eq!(r.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_edges_and_top_center() {
        let r = Rect::new(10.0, 20.0, 50.0, 100.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.top_center(), Vec2::new(35.0, 20.0));
    }
}
