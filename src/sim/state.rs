//! Simulation state and core types
//!
//! The `World` owns everything the physics touches: the ball collection, the
//! viewport boundary, the latest accelerometer sample and the reset RNG. The
//! host passes it by `&mut` to `tick`/`reset`, so a tick can never observe a
//! collection mid-reallocation.

use glam::I64Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A rigid disc. All spatial fields are fixed-point (device pixels x SCALE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: I64Vec2,
    pub vel: I64Vec2,
    /// Constant after creation, always > 0
    pub radius: i64,
    /// Collision-response weighting only, always >= 1
    pub mass: i64,
    /// Percent of normal-relative velocity kept (sign-inverted) on a bounce, 0..=100
    pub restitution: i64,
    /// Per-tick velocity damping percent applied before integration, 0..=100
    pub friction: i64,
    /// Display-only tag (0xRRGGBB), irrelevant to physics
    pub color: u32,
}

impl Ball {
    /// New ball with the stock response parameters. A degenerate radius is
    /// bumped to 1 so the containment math never sees a zero-size disc.
    pub fn new(pos: I64Vec2, vel: I64Vec2, radius: i64, color: u32) -> Self {
        Self {
            pos,
            vel,
            radius: radius.max(1),
            mass: BALL_MASS,
            restitution: BALL_RESTITUTION,
            friction: BALL_FRICTION,
            color,
        }
    }
}

/// Viewport containment policy, chosen once at world construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    /// Independent clamp against four edges
    Rect { width: i64, height: i64 },
    /// Radial clamp against a circle
    Round { center: I64Vec2, radius: i64 },
}

impl Boundary {
    /// Rectangular viewport from device-pixel dimensions.
    pub fn rect(width_px: i64, height_px: i64) -> Self {
        Self::Rect {
            width: width_px * SCALE,
            height: height_px * SCALE,
        }
    }

    /// Circular viewport from a device-pixel diameter, centered in its
    /// bounding square.
    pub fn round(diameter_px: i64) -> Self {
        let radius = diameter_px * SCALE / 2;
        Self::Round {
            center: I64Vec2::new(radius, radius),
            radius,
        }
    }

    /// Bounding rectangle (fixed-point), used as the spawn area.
    pub fn bounding(&self) -> (i64, i64) {
        match *self {
            Self::Rect { width, height } => (width, height),
            Self::Round { radius, .. } => (radius * 2, radius * 2),
        }
    }
}

/// Latest 3-axis accelerometer sample. Overwritten in place, last one wins;
/// z is carried for the sensor contract but never read by the physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelSample {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Read-only drawing snapshot of one ball, in fixed-point scale
/// (divide by SCALE for device pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBall {
    pub x: i64,
    pub y: i64,
    pub radius: i64,
    pub color: u32,
}

/// The simulation world (deterministic; randomness confined to `reset`).
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) balls: Vec<Ball>,
    pub(crate) boundary: Boundary,
    pub(crate) accel: AccelSample,
    rng: Pcg32,
    /// Seed the RNG was created from, for reproducing a run
    pub seed: u64,
    /// Ticks advanced since the last reset
    pub time_ticks: u64,
}

impl World {
    /// Create a world and populate it with `ball_count` balls.
    pub fn new(boundary: Boundary, ball_count: u32, seed: u64) -> Self {
        let mut world = Self {
            balls: Vec::new(),
            boundary,
            accel: AccelSample::default(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            time_ticks: 0,
        };
        world.reset(ball_count);
        world
    }

    /// Replace the whole ball collection with `ball_count` freshly spawned
    /// balls (stock parameters, random positions inside the viewport minus
    /// radius, bounded random velocities, cyclic palette colors).
    ///
    /// A count of 0 is clamped to 1. The host must not have a tick in flight:
    /// cancel its timer, reset, then re-arm.
    pub fn reset(&mut self, ball_count: u32) {
        let ball_count = ball_count.max(1);
        let (width, height) = self.boundary.bounding();
        let mut balls = Vec::with_capacity(ball_count as usize);
        for i in 0..ball_count as usize {
            let radius = BALL_RADIUS;
            let pos = I64Vec2::new(
                spawn_coord(&mut self.rng, radius, width),
                spawn_coord(&mut self.rng, radius, height),
            );
            let vel = I64Vec2::new(
                self.rng.random_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED),
                self.rng.random_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED),
            );
            balls.push(Ball::new(pos, vel, radius, PALETTE[i % PALETTE.len()]));
        }
        self.balls = balls;
        self.time_ticks = 0;
        log::info!("world reset: {} balls, boundary {:?}", ball_count, self.boundary);
    }

    /// Overwrite the latest accelerometer sample (last-sample-wins).
    pub fn set_acceleration(&mut self, x: i64, y: i64, z: i64) {
        self.accel = AccelSample { x, y, z };
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Drawing snapshot of every ball, in fixed-point scale.
    pub fn renderables(&self) -> Vec<RenderBall> {
        self.balls
            .iter()
            .map(|b| RenderBall {
                x: b.pos.x,
                y: b.pos.y,
                radius: b.radius,
                color: b.color,
            })
            .collect()
    }
}

/// Uniform spawn coordinate in [radius, extent - radius); falls back to the
/// midpoint when the viewport is too small to fit the ball.
fn spawn_coord(rng: &mut Pcg32, radius: i64, extent: i64) -> i64 {
    if extent - radius <= radius {
        return extent / 2;
    }
    rng.random_range(radius..extent - radius)
}
