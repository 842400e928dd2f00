//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep, no hidden clock
//! - Seeded RNG only, injected at construction time
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod grid;
pub mod level;
pub mod tick;

pub use actor::{Actor, ActorKind, FireballKind};
pub use grid::{Obstacle, ObstacleGrid};
pub use level::{Level, Status, Touch};
pub use tick::tick;
