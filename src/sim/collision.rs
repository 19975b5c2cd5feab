//! Axis-aligned bounding box collision
//!
//! Every gameplay overlap test (bullet/enemy, enemy/player, pickup/player)
//! goes through `Rect::overlaps`. Edges that merely touch do not collide.

use glam::Vec2;

/// Top-left anchored box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on all four edges
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Anything with a collision box
pub trait Hitbox {
    fn rect(&self) -> Rect;

    fn hits(&self, other: &impl Hitbox) -> bool {
        self.rect().overlaps(&other.rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&rect(2.0, 2.0, 1.0, 1.0))); // contained
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0))); // right edge
        assert!(!a.overlaps(&rect(-10.0, 0.0, 10.0, 10.0))); // left edge
        assert!(!a.overlaps(&rect(0.0, 10.0, 10.0, 10.0))); // bottom edge
        assert!(!a.overlaps(&rect(0.0, -10.0, 10.0, 10.0))); // top edge
        assert!(!a.overlaps(&rect(10.0, 10.0, 5.0, 5.0))); // corner
    }

    #[test]
    fn test_edges_and_center() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_disjoint() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(50.0, 50.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.5, -3.0, 4.0, 4.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}
