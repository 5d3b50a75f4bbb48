//! The simulation tick
//!
//! One call advances the whole world by one frame: actor movement, lane
//! traffic, collision scan, countdown, win check, in that fixed order. The
//! scheduler owns the clock and hands in the elapsed seconds; nothing here
//! reads wall time or device state.

use super::collision::hit_any;
use super::state::{Phase, World};
use crate::consts::*;

/// Input signals for a single tick (level-triggered)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub restart: bool,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput, elapsed: f32) {
    // Terminal phases only listen for the restart signal
    if world.phase != Phase::Playing {
        if input.restart {
            world.reset();
        }
        return;
    }

    // A scheduler clock that steps backwards counts as a zero-length frame
    let elapsed = elapsed.max(0.0);

    // Actor movement; opposed signals cancel
    let step = GRID_SIZE * elapsed * ACTOR_SPEED;
    if input.left {
        world.actor.pos.x -= step;
    }
    if input.right {
        world.actor.pos.x += step;
    }
    if input.up {
        world.actor.pos.y -= step;
    }
    if input.down {
        world.actor.pos.y += step;
    }

    // Keep the actor on the field
    world.actor.pos.x = world.actor.pos.x.clamp(0.0, FIELD_WIDTH - world.actor.size.x);
    world.actor.pos.y = world.actor.pos.y.clamp(0.0, FIELD_HEIGHT - world.actor.size.y);

    // Lane traffic wraps once it is fully off the field; obstacles born past
    // the right edge drive into view instead of teleporting
    for obstacle in &mut world.obstacles {
        let step = obstacle.speed * elapsed * GRID_SIZE;
        if obstacle.facing_right {
            obstacle.pos.x += step;
            if obstacle.pos.x > FIELD_WIDTH {
                obstacle.pos.x = -obstacle.size.x;
            }
        } else {
            obstacle.pos.x -= step;
            if obstacle.pos.x < -obstacle.size.x {
                obstacle.pos.x = FIELD_WIDTH;
            }
        }
    }

    let hit = hit_any(&world.actor, &world.obstacles);
    if hit {
        world.phase = Phase::Lost;
    }

    // Whole-second countdown: frames shorter than a second leave it untouched
    world.countdown -= elapsed as i32;
    if world.countdown <= 0 {
        world.phase = Phase::Lost;
    }

    // Win check runs last: reaching the top row on the same frame as a
    // collision or timeout still counts as a win
    if world.actor.pos.y <= 0.0 {
        world.phase = Phase::Won;
    }

    match world.phase {
        Phase::Won => log::info!("run won with {}s on the clock", world.countdown),
        Phase::Lost => log::info!(
            "run lost ({})",
            if hit { "hit by traffic" } else { "out of time" }
        ),
        Phase::Playing => {}
    }
}
