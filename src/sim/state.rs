//! World state and the run phase machine
//!
//! Everything the simulation mutates lives in one owned `World`; callers
//! pass it into `tick` explicitly. The RNG rides inside, so a run seed
//! fully determines every field the world will ever generate.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::lanes::generate_field;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Playing,
    /// The actor reached the top row before time ran out
    Won,
    /// A collision or the countdown ended the run
    Lost,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Run seed, kept for diagnostics
    pub seed: u64,
    /// RNG behind every generated field; restarts keep drawing from it
    pub rng: Pcg32,
    /// The player-driven body
    pub actor: Body,
    /// Lane traffic in lane-major order
    pub obstacles: Vec<Body>,
    /// Whole seconds remaining
    pub countdown: i32,
    /// Current phase
    pub phase: Phase,
}

impl World {
    /// Create a world and generate its first field
    pub fn new(seed: u64) -> Self {
        log::info!("new world, seed {seed}");
        let mut world = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            actor: Body::new(spawn_point(), Vec2::splat(ACTOR_SIZE)),
            obstacles: Vec::new(),
            countdown: INITIAL_COUNTDOWN,
            phase: Phase::Playing,
        };
        world.reset();
        world
    }

    /// Start a fresh run: new field, actor back at spawn, full countdown
    ///
    /// Construction and restart share this path so the two cannot drift.
    /// The RNG stream carries on from wherever it sits, so successive runs
    /// see different traffic while the run seed still reproduces the whole
    /// sequence.
    pub fn reset(&mut self) {
        self.obstacles = generate_field(&mut self.rng);
        self.actor.pos = spawn_point();
        self.countdown = INITIAL_COUNTDOWN;
        self.phase = Phase::Playing;
    }
}

/// Actor spawn: bottom row, horizontally centered on the grid
pub fn spawn_point() -> Vec2 {
    Vec2::new(
        (GRID_COLS / 2) as f32 * GRID_SIZE,
        (GRID_ROWS - 1) as f32 * GRID_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_starts_playing() {
        let world = World::new(12345);
        assert_eq!(world.phase, Phase::Playing);
        assert_eq!(world.countdown, INITIAL_COUNTDOWN);
        assert_eq!(
            world.obstacles.len(),
            (LANE_COUNT * OBSTACLES_PER_LANE) as usize
        );
    }

    #[test]
    fn test_spawn_is_bottom_center() {
        let world = World::new(12345);
        assert_eq!(world.actor.pos, Vec2::new(320.0, 448.0));
        assert_eq!(world.actor.size, Vec2::splat(ACTOR_SIZE));
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = World::new(42);
        let b = World::new(42);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_reset_continues_rng_stream() {
        let mut world = World::new(42);
        let first_field = world.obstacles.clone();
        world.reset();
        // Second run draws fresh traffic rather than replaying the first
        assert_ne!(world.obstacles, first_field);
        assert_eq!(world.phase, Phase::Playing);
        assert_eq!(world.countdown, INITIAL_COUNTDOWN);
    }

    #[test]
    fn test_reset_respawns_actor() {
        let mut world = World::new(42);
        world.actor.pos = Vec2::new(0.0, 0.0);
        world.phase = Phase::Won;
        world.reset();
        assert_eq!(world.actor.pos, spawn_point());
        assert_eq!(world.phase, Phase::Playing);
    }
}
