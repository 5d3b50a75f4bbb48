//! Lane traffic generation
//!
//! Produces the obstacle field for one run: `LANE_COUNT` horizontal lanes,
//! each filled left to right by a placement cursor that starts one obstacle
//! width off-screen and advances a random gap per slot. The cursor never
//! moves backwards, so obstacles within a lane stay in placement order and
//! are never born overlapping.

use glam::Vec2;
use rand::Rng;

use super::body::Body;
use crate::consts::*;

/// Generate a fresh obstacle field in lane-major order
///
/// The caller replaces its whole collection with the result. Late slots can
/// land past the right field edge; those drive into view (or wrap) once the
/// simulation starts moving them.
pub fn generate_field(rng: &mut impl Rng) -> Vec<Body> {
    let size = Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
    let mut obstacles = Vec::with_capacity((LANE_COUNT * OBSTACLES_PER_LANE) as usize);

    for lane in 0..LANE_COUNT {
        let y = (LANE_TOP_MARGIN + lane) as f32 * GRID_SIZE;
        let mut cursor = -OBSTACLE_WIDTH;

        for _ in 0..OBSTACLES_PER_LANE {
            let x = cursor + rng.random_range(GAP_MIN..GAP_MAX) * GRID_SIZE;

            obstacles.push(Body {
                pos: Vec2::new(x, y),
                size,
                speed: rng.random_range(OBSTACLE_SPEED_MIN..OBSTACLE_SPEED_MAX),
                facing_right: rng.random_bool(0.5),
            });

            cursor = x;
        }
    }

    log::debug!(
        "generated {} obstacles across {} lanes",
        obstacles.len(),
        LANE_COUNT
    );
    obstacles
}
