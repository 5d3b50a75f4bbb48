//! Rectangular bodies on the playfield
//!
//! One shape serves both kinds of entity: the player-driven actor and every
//! lane obstacle are axis-aligned rectangles anchored at their top-left
//! corner. Obstacles only ever move horizontally, so a body carries a scalar
//! speed and a facing flag rather than a velocity vector.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

/// A movable rectangle: the actor or one lane obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner in field coordinates
    pub pos: Vec2,
    /// Extent in pixels (fixed after construction)
    pub size: Vec2,
    /// Horizontal speed in grid units per second (unused by the actor)
    pub speed: f32,
    /// Lane travel direction (unused by the actor)
    pub facing_right: bool,
}

impl Body {
    /// A stationary body with the lane fields at their neutral values
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            speed: 0.0,
            facing_right: true,
        }
    }

    /// Bounding rectangle at the current position
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            max: self.pos + self.size,
        }
    }
}
