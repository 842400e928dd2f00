//! Moving entities: bounding boxes, overlap tests and per-kind behavior
//!
//! Every dynamic thing in a level is an `Actor`: a position, a size, a
//! speed and a kind tag that selects its `act` behavior. Actors know how to
//! probe terrain through [`ObstacleGrid::obstacle_at`] but never touch each
//! other here; actor-vs-actor contact is the level's business.

use std::f64::consts::PI;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::ObstacleGrid;
use crate::consts::*;

/// Behavior tag, carrying whatever per-kind state the behavior needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Inert rectangle with no behavior of its own
    Generic,
    /// The avatar; movement comes from the outer input layer, so `act` is a
    /// no-op here
    Player,
    Fireball(FireballKind),
    /// Collectible bobbing on a sine spring around a fixed anchor
    Coin { anchor: DVec2, phase: f64 },
}

/// How a fireball reacts when its next step would enter an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireballKind {
    /// Reverses direction, keeping its current position
    Bounce,
    /// Jumps back to its spawn point, keeping its speed
    Rain { spawn: DVec2 },
}

/// A rectangular entity in level coordinates
///
/// `pos` and `size` define an axis-aligned box via min/max per axis, so a
/// negative size still yields a valid box. `id` is assigned when a level
/// adopts the actor and is how levels address actors; it plays no part in
/// geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub pos: DVec2,
    pub size: DVec2,
    pub speed: DVec2,
    pub kind: ActorKind,
    pub(crate) id: u32,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(DVec2::ZERO, DVec2::ONE, DVec2::ZERO)
    }
}

impl Actor {
    /// Generic actor with an explicit box and speed
    pub fn new(pos: DVec2, size: DVec2, speed: DVec2) -> Self {
        Self {
            pos,
            size,
            speed,
            kind: ActorKind::Generic,
            id: 0,
        }
    }

    /// The avatar, anchored to a tile and shifted up so its taller box
    /// stands on the tile
    pub fn player(tile: DVec2) -> Self {
        Self {
            pos: tile + PLAYER_OFFSET,
            size: PLAYER_SIZE,
            speed: DVec2::ZERO,
            kind: ActorKind::Player,
            id: 0,
        }
    }

    /// A coin centered in its tile, with a randomized spring phase so coins
    /// placed together do not bob in lockstep
    pub fn coin(tile: DVec2, rng: &mut impl Rng) -> Self {
        let anchor = tile + COIN_OFFSET;
        Self {
            pos: anchor,
            size: COIN_SIZE,
            speed: DVec2::ZERO,
            kind: ActorKind::Coin {
                anchor,
                phase: rng.random_range(0.0..PI),
            },
            id: 0,
        }
    }

    /// A bouncing fireball with an arbitrary speed
    pub fn fireball(pos: DVec2, speed: DVec2) -> Self {
        Self {
            pos,
            size: FIREBALL_SIZE,
            speed,
            kind: ActorKind::Fireball(FireballKind::Bounce),
            id: 0,
        }
    }

    /// Fireball patrolling left-right
    pub fn horizontal_fireball(tile: DVec2) -> Self {
        Self::fireball(tile, HORIZONTAL_FIREBALL_SPEED)
    }

    /// Fireball patrolling up-down
    pub fn vertical_fireball(tile: DVec2) -> Self {
        Self::fireball(tile, VERTICAL_FIREBALL_SPEED)
    }

    /// Fireball that falls and restarts from its spawn tile on impact
    pub fn fire_rain(tile: DVec2) -> Self {
        Self {
            pos: tile,
            size: FIREBALL_SIZE,
            speed: FIRE_RAIN_SPEED,
            kind: ActorKind::Fireball(FireballKind::Rain { spawn: tile }),
            id: 0,
        }
    }

    /// Level-assigned handle, stable across removals
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Left edge of the bounding box
    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x.min(self.pos.x + self.size.x)
    }

    /// Right edge of the bounding box
    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x.max(self.pos.x + self.size.x)
    }

    /// Top edge of the bounding box
    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y.min(self.pos.y + self.size.y)
    }

    /// Bottom edge of the bounding box
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y.max(self.pos.y + self.size.y)
    }

    /// Open-interval box overlap: shared edges and corners do not count
    ///
    /// An actor never overlaps itself, where "itself" means the same
    /// instance. Two distinct actors with identical boxes do overlap; value
    /// equality is not identity.
    pub fn overlaps(&self, other: &Actor) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// Advance this actor by `dt` seconds against the given terrain
    pub fn act(&mut self, dt: f64, grid: &ObstacleGrid) {
        match &mut self.kind {
            ActorKind::Fireball(kind) => {
                let kind = *kind;
                let next = self.pos + self.speed * dt;
                if grid.obstacle_at(next, self.size).is_none() {
                    self.pos = next;
                } else {
                    match kind {
                        FireballKind::Bounce => self.speed = -self.speed,
                        FireballKind::Rain { spawn } => self.pos = spawn,
                    }
                }
            }
            ActorKind::Coin { anchor, phase } => {
                *phase += COIN_SPRING_SPEED * dt;
                let bob = DVec2::new(0.0, phase.sin() * COIN_SPRING_DIST);
                let anchor = *anchor;
                self.pos = anchor + bob;
            }
            ActorKind::Generic | ActorKind::Player => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Obstacle;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn seeded_rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    /// Grid of the given dimensions with no obstacles at all
    fn open_grid(width: usize, height: usize) -> ObstacleGrid {
        ObstacleGrid::new(vec![vec![None; width]; height])
    }

    #[test]
    fn test_default_actor() {
        let a = Actor::default();
        assert_eq!(a.pos, DVec2::ZERO);
        assert_eq!(a.size, DVec2::ONE);
        assert_eq!(a.speed, DVec2::ZERO);
        assert_eq!(a.kind, ActorKind::Generic);
    }

    #[test]
    fn test_bbox_edges() {
        let a = Actor::new(DVec2::new(1.0, 2.0), DVec2::new(2.0, 3.0), DVec2::ZERO);
        assert_eq!(a.left(), 1.0);
        assert_eq!(a.right(), 3.0);
        assert_eq!(a.top(), 2.0);
        assert_eq!(a.bottom(), 5.0);
    }

    #[test]
    fn test_bbox_negative_size() {
        let a = Actor::new(DVec2::new(1.0, 1.0), DVec2::new(-2.0, -3.0), DVec2::ZERO);
        assert_eq!(a.left(), -1.0);
        assert_eq!(a.right(), 1.0);
        assert_eq!(a.top(), -2.0);
        assert_eq!(a.bottom(), 1.0);
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = Actor::new(DVec2::ZERO, DVec2::ONE, DVec2::ZERO);
        let b = Actor::new(DVec2::new(1.0, 0.0), DVec2::ONE, DVec2::ZERO);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let c = Actor::new(DVec2::new(0.9, 0.0), DVec2::ONE, DVec2::ZERO);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_corner_touching_is_not_overlap() {
        let a = Actor::new(DVec2::ZERO, DVec2::ONE, DVec2::ZERO);
        let b = Actor::new(DVec2::new(1.0, 1.0), DVec2::ONE, DVec2::ZERO);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let big = Actor::new(DVec2::ZERO, DVec2::new(4.0, 4.0), DVec2::ZERO);
        let small = Actor::new(DVec2::new(1.0, 1.0), DVec2::new(0.5, 0.5), DVec2::ZERO);
        assert!(big.overlaps(&small));
        assert!(small.overlaps(&big));
    }

    #[test]
    fn test_actor_never_overlaps_itself() {
        let a = Actor::new(DVec2::ZERO, DVec2::ONE, DVec2::ZERO);
        assert!(!a.overlaps(&a));
        // A distinct actor with the very same box is a different instance
        // and does overlap.
        let twin = a.clone();
        assert!(a.overlaps(&twin));
    }

    #[test]
    fn test_player_constructor() {
        let p = Actor::player(DVec2::new(5.0, 5.0));
        assert_eq!(p.pos, DVec2::new(5.0, 4.5));
        assert_eq!(p.size, DVec2::new(0.8, 1.5));
        assert_eq!(p.speed, DVec2::ZERO);
        assert_eq!(p.kind, ActorKind::Player);
    }

    #[test]
    fn test_coin_constructor() {
        let mut rng = seeded_rng();
        let c = Actor::coin(DVec2::new(3.0, 2.0), &mut rng);
        assert_eq!(c.pos, DVec2::new(3.2, 2.1));
        assert_eq!(c.size, DVec2::new(0.6, 0.6));
        match c.kind {
            ActorKind::Coin { anchor, phase } => {
                assert_eq!(anchor, c.pos);
                assert!((0.0..PI).contains(&phase));
            }
            other => panic!("expected coin kind, got {other:?}"),
        }
    }

    #[test]
    fn test_coin_phases_vary() {
        let mut rng = seeded_rng();
        let phases: Vec<f64> = (0..32)
            .map(|_| match Actor::coin(DVec2::ZERO, &mut rng).kind {
                ActorKind::Coin { phase, .. } => phase,
                _ => unreachable!(),
            })
            .collect();
        assert!(phases.iter().all(|p| (0.0..PI).contains(p)));
        assert!(phases.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_fireball_constructors() {
        let h = Actor::horizontal_fireball(DVec2::new(2.0, 3.0));
        assert_eq!(h.pos, DVec2::new(2.0, 3.0));
        assert_eq!(h.size, DVec2::ONE);
        assert_eq!(h.speed, DVec2::new(2.0, 0.0));
        assert_eq!(h.kind, ActorKind::Fireball(FireballKind::Bounce));

        let v = Actor::vertical_fireball(DVec2::new(2.0, 3.0));
        assert_eq!(v.speed, DVec2::new(0.0, 2.0));

        let r = Actor::fire_rain(DVec2::new(2.0, 3.0));
        assert_eq!(r.speed, DVec2::new(0.0, 3.0));
        assert_eq!(
            r.kind,
            ActorKind::Fireball(FireballKind::Rain {
                spawn: DVec2::new(2.0, 3.0)
            })
        );
    }

    #[test]
    fn test_fireball_moves_through_open_space() {
        let grid = open_grid(5, 5);
        let mut f = Actor::horizontal_fireball(DVec2::ZERO);
        f.act(0.25, &grid);
        assert_eq!(f.pos, DVec2::new(0.5, 0.0));
        assert_eq!(f.speed, DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_fireball_bounces_off_wall() {
        // Wall at column 2 of a one-row strip; a unit fireball stepping from
        // x=0 with speed (2, 0) and dt=1 would land exactly on it.
        let grid = ObstacleGrid::new(vec![vec![None, None, Some(Obstacle::Wall)]]);
        let mut f = Actor::horizontal_fireball(DVec2::ZERO);
        f.act(1.0, &grid);
        assert_eq!(f.pos, DVec2::ZERO);
        assert_eq!(f.speed, DVec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_fire_rain_resets_to_spawn() {
        let grid = ObstacleGrid::new(vec![
            vec![None],
            vec![None],
            vec![Some(Obstacle::Wall)],
        ]);
        let mut r = Actor::fire_rain(DVec2::ZERO);
        r.act(0.25, &grid);
        assert_eq!(r.pos, DVec2::new(0.0, 0.75));
        r.act(0.25, &grid);
        assert_eq!(r.pos, DVec2::ZERO);
        assert_eq!(r.speed, DVec2::new(0.0, 3.0));
    }

    #[test]
    fn test_coin_bobs_around_fixed_anchor() {
        let mut rng = seeded_rng();
        let mut c = Actor::coin(DVec2::new(1.0, 1.0), &mut rng);
        let (anchor, phase0) = match c.kind {
            ActorKind::Coin { anchor, phase } => (anchor, phase),
            _ => unreachable!(),
        };
        let grid = open_grid(3, 3);

        c.act(0.05, &grid);
        let expected = phase0 + COIN_SPRING_SPEED * 0.05;
        assert!((c.pos.y - (anchor.y + expected.sin() * COIN_SPRING_DIST)).abs() < 1e-12);
        assert_eq!(c.pos.x, anchor.x);

        for _ in 0..100 {
            c.act(0.05, &grid);
            assert!((c.pos.y - anchor.y).abs() <= COIN_SPRING_DIST + 1e-12);
            assert_eq!(c.pos.x, anchor.x);
        }
        match c.kind {
            ActorKind::Coin { anchor: a, .. } => assert_eq!(a, anchor),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_player_and_generic_do_not_act() {
        let grid = open_grid(3, 3);
        let mut p = Actor::player(DVec2::new(1.0, 1.0));
        p.speed = DVec2::new(5.0, 5.0);
        let before = p.pos;
        p.act(1.0, &grid);
        assert_eq!(p.pos, before);

        let mut g = Actor::new(DVec2::ZERO, DVec2::ONE, DVec2::new(1.0, 0.0));
        g.act(1.0, &grid);
        assert_eq!(g.pos, DVec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -10.0f64..10.0,
            ay in -10.0f64..10.0,
            aw in -3.0f64..3.0,
            ah in -3.0f64..3.0,
            bx in -10.0f64..10.0,
            by in -10.0f64..10.0,
            bw in -3.0f64..3.0,
            bh in -3.0f64..3.0,
        ) {
            let a = Actor::new(DVec2::new(ax, ay), DVec2::new(aw, ah), DVec2::ZERO);
            let b = Actor::new(DVec2::new(bx, by), DVec2::new(bw, bh), DVec2::ZERO);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_self_overlap_is_always_false(
            x in -10.0f64..10.0,
            y in -10.0f64..10.0,
            w in -3.0f64..3.0,
            h in -3.0f64..3.0,
        ) {
            let a = Actor::new(DVec2::new(x, y), DVec2::new(w, h), DVec2::ZERO);
            prop_assert!(!a.overlaps(&a));
        }
    }
}
