//! Per-tick driver: the canonical order of one simulation step
//!
//! Packaged so every caller steps a level the same way. Player movement
//! against terrain belongs to the outer input layer; what happens here is
//! the part the core owns: actor behavior and actor-on-player contact.

use super::level::{Level, Touch};

/// Advance a level by one step of `dt` seconds
///
/// Step order: count the terminal animation window down when the level is
/// already decided, run every actor's behavior, then feed the first actor
/// touching the player into the outcome state machine. Ticking a finished
/// level is harmless; drivers usually stop once [`Level::is_finished`]
/// reports true.
pub fn tick(level: &mut Level, dt: f64) {
    if level.status.is_some() {
        level.finish_delay -= dt;
    }
    level.act(dt);

    let contact = level
        .player()
        .and_then(|player| level.actor_at(player))
        .map(|hit| (Touch::from(hit.kind), hit.id()));
    if let Some((kind, id)) = contact {
        level.player_touched(kind, Some(id));
    }
}
