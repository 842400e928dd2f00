//! Dark Blue - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, obstacle grid, win/lose state)
//! - `plan`: Level plans, parsed from rows of symbols
//!
//! The crate owns no loop, clock or input: a driver builds a level, calls
//! [`sim::tick`] (or the `Level` methods directly) with its own timestep and
//! inspects the outcome. Coordinates are tile units, x right, y down.

pub mod plan;
pub mod sim;

pub use plan::{ActorTemplate, LevelParser};
pub use sim::{Actor, ActorKind, FireballKind, Level, Obstacle, ObstacleGrid, Status, Touch, tick};

/// Game configuration constants
pub mod consts {
    use glam::DVec2;

    /// Simulation timestep the demo runner uses (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Terminal animation window in seconds, counted down after a level is
    /// decided
    pub const FINISH_DELAY: f64 = 1.0;

    /// Player box, anchored to its tile shifted up so the extra half tile
    /// of height sticks out of the top
    pub const PLAYER_OFFSET: DVec2 = DVec2::new(0.0, -0.5);
    pub const PLAYER_SIZE: DVec2 = DVec2::new(0.8, 1.5);

    /// Coin box, centered within its tile
    pub const COIN_OFFSET: DVec2 = DVec2::new(0.2, 0.1);
    pub const COIN_SIZE: DVec2 = DVec2::new(0.6, 0.6);
    /// Spring phase advance in radians per second
    pub const COIN_SPRING_SPEED: f64 = 8.0;
    /// Spring amplitude in tiles
    pub const COIN_SPRING_DIST: f64 = 0.07;

    /// Fireball defaults
    pub const FIREBALL_SIZE: DVec2 = DVec2::new(1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: DVec2 = DVec2::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: DVec2 = DVec2::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: DVec2 = DVec2::new(0.0, 3.0);
}
