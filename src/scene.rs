//! Frame composition
//!
//! Turns a world snapshot into an ordered stream of draw requests for the
//! host's render sink. Missing art degrades per element: decoration the
//! scene cannot draw is skipped, while the actor falls back to a sink-drawn
//! placeholder because the game is unplayable without it.

use glam::Vec2;
use log::debug;

use crate::platform::{AssetKey, AssetProvider, RenderSink, layout};
use crate::sim::{Phase, World};

/// Emit one frame's draw requests, back to front
pub fn present<I>(
    world: &World,
    assets: &impl AssetProvider<Image = I>,
    sink: &mut impl RenderSink<Image = I>,
) {
    let (width, height) = layout();

    match assets.image(AssetKey::Background) {
        Some(image) => sink.draw(Some(image), Vec2::ZERO, Vec2::new(width, height)),
        None => debug!("background image missing, skipping"),
    }

    match assets.image(AssetKey::Obstacle) {
        Some(image) => {
            for obstacle in &world.obstacles {
                sink.draw(Some(image), obstacle.pos, obstacle.size);
            }
        }
        None => debug!("obstacle image missing, skipping traffic"),
    }

    // The actor must stay visible even without art
    let actor = assets.image(AssetKey::Actor);
    if actor.is_none() {
        debug!("actor image missing, requesting placeholder");
    }
    sink.draw(actor, world.actor.pos, world.actor.size);

    sink.draw_text(&format!("Time: {}", world.countdown));

    match world.phase {
        Phase::Playing => {}
        Phase::Won => sink.draw_text("You Win! Press SPACE to restart"),
        Phase::Lost => sink.draw_text("Game Over! Press SPACE to restart"),
    }
}
