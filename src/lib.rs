//! Scuttle Run - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world state, tick, collisions, lane generation)
//! - `platform`: Boundary contracts for input polling, asset lookup and the render sink
//! - `scene`: Per-frame draw-request composition for the rendering collaborator

pub mod platform;
pub mod scene;
pub mod sim;

pub use platform::{AssetKey, AssetProvider, Control, InputSource, RenderSink};
pub use sim::{Body, Phase, Rect, TickInput, World};

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions in pixels
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Base spatial quantum - speeds and placement gaps scale by this
    pub const GRID_SIZE: f32 = 32.0;
    /// Field size in grid units
    pub const GRID_COLS: u32 = (FIELD_WIDTH / GRID_SIZE) as u32;
    pub const GRID_ROWS: u32 = (FIELD_HEIGHT / GRID_SIZE) as u32;

    /// Actor defaults - one grid cell square
    pub const ACTOR_SIZE: f32 = GRID_SIZE;
    /// Actor speed multiplier (grid units per second while a signal is held)
    pub const ACTOR_SPEED: f32 = 5.0;

    /// Obstacle lanes
    pub const LANE_COUNT: u32 = 5;
    pub const OBSTACLES_PER_LANE: u32 = 6;
    /// Rows reserved between the field top and the first lane
    pub const LANE_TOP_MARGIN: u32 = 5;

    /// Obstacle defaults - two grid units wide, one tall
    pub const OBSTACLE_WIDTH: f32 = GRID_SIZE * 2.0;
    pub const OBSTACLE_HEIGHT: f32 = GRID_SIZE;
    /// Obstacle speed range (grid units per second)
    pub const OBSTACLE_SPEED_MIN: f32 = 1.5;
    pub const OBSTACLE_SPEED_MAX: f32 = 3.0;
    /// Placement gap range between lane neighbours (grid units)
    pub const GAP_MIN: f32 = 3.0;
    pub const GAP_MAX: f32 = 6.0;

    /// Countdown start value (whole seconds)
    pub const INITIAL_COUNTDOWN: i32 = 60;
}
