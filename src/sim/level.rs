//! The level: terrain plus an actor roster and the win/lose state machine
//!
//! A level never advances itself. The driver calls [`Level::act`] each tick,
//! reports player contacts through [`Level::player_touched`] and counts
//! `finish_delay` down once a terminal status is set; everything here is a
//! query or a transition on that externally driven state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::grid::{Obstacle, ObstacleGrid};
use crate::consts::FINISH_DELAY;

/// Terminal outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Won,
    Lost,
}

/// Kind tag for anything the player can run into
///
/// Terrain and actor kinds funnel into one tag space so the outcome rules
/// live in a single match. The `From` impls below are the only mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Touch {
    Wall,
    Lava,
    Fireball,
    Coin,
    Player,
    Generic,
}

impl From<Obstacle> for Touch {
    fn from(obstacle: Obstacle) -> Self {
        match obstacle {
            Obstacle::Wall => Touch::Wall,
            Obstacle::Lava => Touch::Lava,
        }
    }
}

impl From<ActorKind> for Touch {
    fn from(kind: ActorKind) -> Self {
        match kind {
            ActorKind::Generic => Touch::Generic,
            ActorKind::Player => Touch::Player,
            ActorKind::Fireball(_) => Touch::Fireball,
            ActorKind::Coin { .. } => Touch::Coin,
        }
    }
}

/// One playable level: static terrain, a shrinking actor roster and the
/// outcome state
#[derive(Debug, Clone)]
pub struct Level {
    grid: ObstacleGrid,
    actors: Vec<Actor>,
    /// Terminal outcome; `None` while the level is undecided
    pub status: Option<Status>,
    /// Terminal animation window in seconds, counted down by the driver
    /// once `status` is set
    pub finish_delay: f64,
    player_id: Option<u32>,
}

impl Level {
    /// Take ownership of terrain and actors, assign roster ids and cache
    /// the player
    ///
    /// The first `Player`-kind actor becomes the level's player; extra
    /// players are legal but only ever act as ordinary actors.
    pub fn new(grid: ObstacleGrid, mut actors: Vec<Actor>) -> Self {
        for (i, actor) in actors.iter_mut().enumerate() {
            actor.id = i as u32;
        }
        let mut players = actors
            .iter()
            .filter(|a| matches!(a.kind, ActorKind::Player));
        let player_id = players.next().map(Actor::id);
        if players.next().is_some() {
            log::warn!("level has more than one player; the first one is the player");
        }
        log::debug!(
            "level ready: {}x{} tiles, {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Self {
            grid,
            actors,
            status: None,
            finish_delay: FINISH_DELAY,
            player_id,
        }
    }

    /// Width in tiles
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height in tiles
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The terrain
    #[inline]
    pub fn grid(&self) -> &ObstacleGrid {
        &self.grid
    }

    /// The remaining actors, in roster order
    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Terrain classification under a rectangle; see
    /// [`ObstacleGrid::obstacle_at`] for the priority rules
    #[inline]
    pub fn obstacle_at(&self, pos: DVec2, size: DVec2) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Actor with the given roster id, if still present
    pub fn actor(&self, id: u32) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// The cached player actor, if the level has one
    pub fn player(&self) -> Option<&Actor> {
        self.player_id.and_then(|id| self.actor(id))
    }

    /// First actor in roster order whose box overlaps `query`
    ///
    /// `query` itself never matches, even when it sits in this roster;
    /// overlap identity is per instance, not per value.
    pub fn actor_at(&self, query: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.overlaps(query))
    }

    /// True when no remaining actor's kind maps to `kind`
    pub fn no_more_actors(&self, kind: Touch) -> bool {
        !self.actors.iter().any(|a| Touch::from(a.kind) == kind)
    }

    /// Remove the actor with the given id, if it is still present
    ///
    /// The roster only ever shrinks after construction.
    pub fn remove_actor(&mut self, id: u32) {
        if let Some(index) = self.actors.iter().position(|a| a.id == id) {
            self.actors.remove(index);
        }
    }

    /// Run every actor's behavior for one step against the terrain
    ///
    /// The pass never adds or removes actors; removal happens only through
    /// [`Level::player_touched`].
    pub fn act(&mut self, dt: f64) {
        let grid = &self.grid;
        for actor in &mut self.actors {
            actor.act(dt, grid);
        }
    }

    /// Apply one player contact to the outcome state machine
    ///
    /// `Lava` and `Fireball` lose the level. `Coin` removes the touched
    /// coin and wins the level once no coin remains; an id that no longer
    /// resolves, or resolves to something that is not a coin, does nothing.
    /// Every other kind is a no-op, as is any contact once the level is
    /// already decided.
    ///
    /// # Panics
    ///
    /// Panics when `kind` is `Touch::Coin` and `actor` is `None`: reporting
    /// a coin pickup without saying which coin is a caller bug.
    pub fn player_touched(&mut self, kind: Touch, actor: Option<u32>) {
        if self.status.is_some() {
            return;
        }
        match kind {
            Touch::Lava | Touch::Fireball => {
                log::debug!("level lost: player touched {kind:?}");
                self.status = Some(Status::Lost);
            }
            Touch::Coin => {
                let Some(id) = actor else {
                    panic!("coin contact reported without an actor id");
                };
                let is_coin = self
                    .actor(id)
                    .is_some_and(|a| Touch::from(a.kind) == Touch::Coin);
                if is_coin {
                    self.remove_actor(id);
                    if self.no_more_actors(Touch::Coin) {
                        log::debug!("level won: last coin collected");
                        self.status = Some(Status::Won);
                    }
                }
            }
            _ => {}
        }
    }

    /// True once a terminal status is set and the terminal animation
    /// window has fully elapsed
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }
}
