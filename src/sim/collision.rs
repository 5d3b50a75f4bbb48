//! Collision detection between the actor and lane traffic
//!
//! Everything here is a pure function over bounding rectangles. Overlap uses
//! strict inequalities: two rectangles sharing only an edge or a corner do
//! not collide, so traffic in an adjacent lane can never clip an actor that
//! stays in its own row.

use super::body::{Body, Rect};

/// Check whether two rectangles overlap
///
/// Strict on every edge: rectangles that merely touch do not count.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Check the actor against every obstacle in collection order
///
/// Short-circuits on the first hit; one overlap is all the caller needs.
pub fn hit_any(actor: &Body, obstacles: &[Body]) -> bool {
    let rect = actor.rect();
    obstacles
        .iter()
        .any(|obstacle| overlaps(rect, obstacle.rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    #[test]
    fn test_overlapping_interiors() {
        let a = rect(0.0, 0.0, 32.0, 32.0);
        let b = rect(16.0, 16.0, 32.0, 32.0);
        assert!(overlaps(a, b));
        assert!(overlaps(b, a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = rect(0.0, 0.0, 64.0, 64.0);
        let inner = rect(16.0, 16.0, 8.0, 8.0);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 32.0, 32.0);
        // Shares the full right edge
        assert!(!overlaps(a, rect(32.0, 0.0, 32.0, 32.0)));
        // Shares the full bottom edge
        assert!(!overlaps(a, rect(0.0, 32.0, 32.0, 32.0)));
        // Shares only the bottom-right corner
        assert!(!overlaps(a, rect(32.0, 32.0, 32.0, 32.0)));
    }

    #[test]
    fn test_separated_rects() {
        let a = rect(0.0, 0.0, 32.0, 32.0);
        let b = rect(100.0, 0.0, 32.0, 32.0);
        assert!(!overlaps(a, b));
    }

    #[test]
    fn test_hit_any_ignores_other_lanes() {
        // Actor on the bottom row, obstacle five lanes up at the same x
        let actor = Body::new(Vec2::new(320.0, 448.0), Vec2::splat(32.0));
        let obstacle = Body::new(Vec2::new(320.0, 192.0), Vec2::new(64.0, 32.0));
        assert!(!hit_any(&actor, &[obstacle]));
    }

    #[test]
    fn test_hit_any_finds_late_hit() {
        let actor = Body::new(Vec2::new(100.0, 200.0), Vec2::splat(32.0));
        let miss = Body::new(Vec2::new(400.0, 200.0), Vec2::new(64.0, 32.0));
        let hit = Body::new(Vec2::new(90.0, 200.0), Vec2::new(64.0, 32.0));
        assert!(hit_any(&actor, &[miss, hit]));
    }

    #[test]
    fn test_hit_any_empty_field() {
        let actor = Body::new(Vec2::new(320.0, 448.0), Vec2::splat(32.0));
        assert!(!hit_any(&actor, &[]));
    }
}
