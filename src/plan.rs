//! Level plans: rows of symbols turned into terrain and actors
//!
//! A plan is a slice of row strings, one character per tile. Terrain
//! symbols are fixed; actor symbols go through a configurable dictionary so
//! callers decide what spawns. Symbols nobody claims are empty space, never
//! an error.

use std::collections::HashMap;

use glam::DVec2;
use rand::Rng;

use crate::sim::{Actor, Level, Obstacle, ObstacleGrid};

/// Spawnable actor archetype a plan symbol can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorTemplate {
    Player,
    Coin,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl ActorTemplate {
    /// Build the actor this template stands for, anchored at a tile
    pub fn build(self, tile: DVec2, rng: &mut impl Rng) -> Actor {
        match self {
            ActorTemplate::Player => Actor::player(tile),
            ActorTemplate::Coin => Actor::coin(tile, rng),
            ActorTemplate::HorizontalFireball => Actor::horizontal_fireball(tile),
            ActorTemplate::VerticalFireball => Actor::vertical_fireball(tile),
            ActorTemplate::FireRain => Actor::fire_rain(tile),
        }
    }
}

/// Terrain meaning of a plan symbol, if it has one
pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
    match symbol {
        'x' => Some(Obstacle::Wall),
        '!' => Some(Obstacle::Lava),
        _ => None,
    }
}

/// Turns plan text into levels through a symbol-to-actor dictionary
#[derive(Debug, Clone)]
pub struct LevelParser {
    dictionary: HashMap<char, ActorTemplate>,
}

impl Default for LevelParser {
    /// The standard dictionary: `@` player, `o` coin, `=` and `|` patrol
    /// fireballs, `v` fire rain
    fn default() -> Self {
        Self::new(HashMap::from([
            ('@', ActorTemplate::Player),
            ('o', ActorTemplate::Coin),
            ('=', ActorTemplate::HorizontalFireball),
            ('|', ActorTemplate::VerticalFireball),
            ('v', ActorTemplate::FireRain),
        ]))
    }
}

impl LevelParser {
    pub fn new(dictionary: HashMap<char, ActorTemplate>) -> Self {
        Self { dictionary }
    }

    /// Template a symbol maps to, if the dictionary claims it
    pub fn actor_from_symbol(&self, symbol: char) -> Option<ActorTemplate> {
        self.dictionary.get(&symbol).copied()
    }

    /// Terrain half of a plan
    ///
    /// Actor symbols and unclaimed symbols read as open space, and each row
    /// keeps its own length.
    pub fn create_grid(&self, plan: &[String]) -> Vec<Vec<Option<Obstacle>>> {
        plan.iter()
            .map(|row| row.chars().map(obstacle_from_symbol).collect())
            .collect()
    }

    /// Actor half of a plan, in row-major plan order
    pub fn create_actors(&self, plan: &[String], rng: &mut impl Rng) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                if let Some(template) = self.actor_from_symbol(symbol) {
                    actors.push(template.build(DVec2::new(x as f64, y as f64), rng));
                }
            }
        }
        actors
    }

    /// Build a complete level from a plan
    pub fn parse(&self, plan: &[String], rng: &mut impl Rng) -> Level {
        let grid = ObstacleGrid::new(self.create_grid(plan));
        let actors = self.create_actors(plan, rng);
        Level::new(grid, actors)
    }
}
