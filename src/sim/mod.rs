//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Elapsed time arrives as an argument, never from a clock
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod lanes;
pub mod state;
pub mod tick;

pub use body::{Body, Rect};
pub use collision::{hit_any, overlaps};
pub use lanes::generate_field;
pub use state::{Phase, World, spawn_point};
pub use tick::{TickInput, tick};
