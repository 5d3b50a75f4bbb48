//! Boundary contracts toward the host program
//!
//! The simulation never talks to a window, a keyboard, or a GPU. The host
//! supplies an input source to poll, an asset provider to query, and a
//! render sink that receives draw requests; the surfaces here are the whole
//! conversation.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::TickInput;

/// Abstract control signals the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Restart,
}

/// Level-triggered input polling, answered fresh every frame
pub trait InputSource {
    fn is_down(&self, control: Control) -> bool;
}

impl TickInput {
    /// Snapshot all five control signals for one tick
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            left: source.is_down(Control::MoveLeft),
            right: source.is_down(Control::MoveRight),
            up: source.is_down(Control::MoveUp),
            down: source.is_down(Control::MoveDown),
            restart: source.is_down(Control::Restart),
        }
    }
}

/// The images the scene asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Actor,
    Obstacle,
    Background,
}

/// Asset lookup; absence is a normal answer, never an error
pub trait AssetProvider {
    type Image;

    fn image(&self, key: AssetKey) -> Option<&Self::Image>;
}

/// Receives draw requests in back-to-front order, one call each
pub trait RenderSink {
    type Image;

    /// Draw an image at `pos` stretched to `size`; `None` asks the sink to
    /// stand in a solid placeholder of the same footprint
    fn draw(&mut self, image: Option<&Self::Image>, pos: Vec2, size: Vec2);

    /// Draw an overlay text line
    fn draw_text(&mut self, text: &str);
}

/// Fixed logical field dimensions for the host to letterbox to
pub fn layout() -> (f32, f32) {
    (FIELD_WIDTH, FIELD_HEIGHT)
}
