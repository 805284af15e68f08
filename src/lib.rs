//! Tiltball - accelerometer-driven bouncing balls
//!
//! Core modules:
//! - `sim`: Deterministic fixed-point simulation (integration, collisions, containment)
//! - `settings`: Host-facing configuration (ball count, tick rate)
//!
//! The host runtime (windowing, timers, the accelerometer itself, drawing) is
//! deliberately absent: it feeds acceleration samples in, calls `tick`, and
//! reads renderable circles back out.

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{AccelSample, Ball, Boundary, RenderBall, World};

/// Simulation constants
pub mod consts {
    /// Fixed-point scaling factor. All stored positions, velocities and radii
    /// are device-pixel values multiplied by SCALE; divide on the way out.
    pub const SCALE: i64 = 128;

    /// Default tick rate hint for the host's timer (ticks per second)
    pub const DEFAULT_FPS: u32 = 60;
    /// Default number of balls in a freshly reset world
    pub const DEFAULT_BALL_COUNT: u32 = 20;

    /// Ball defaults (radius is 7.5 device pixels in fixed point)
    pub const BALL_RADIUS: i64 = 75 * SCALE / 10;
    pub const BALL_RESTITUTION: i64 = 80;
    pub const BALL_FRICTION: i64 = 90;
    pub const BALL_MASS: i64 = 1;
    /// Spawn velocities are uniform in [-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED)
    pub const MAX_SPAWN_SPEED: i64 = 5 * SCALE;

    /// Cyclic ball palette (0xRRGGBB display tags, irrelevant to physics)
    pub const PALETTE: [u32; 6] = [
        0xAA55FF, // violet
        0x55AAAA, // cadet blue
        0x00FF00, // green
        0xFF00AA, // magenta
        0x0055FF, // blue
        0xFFFFFF, // white
    ];
}
