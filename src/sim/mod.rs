//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Integer fixed-point arithmetic only (no floats anywhere in the tick path)
//! - Seeded RNG, consulted only during `World::reset`
//! - Stable iteration order (ball index order)
//! - No rendering or platform dependencies

pub mod intmath;
pub mod state;
pub mod tick;

pub use intmath::{dist_sqr, isqrt};
pub use state::{AccelSample, Ball, Boundary, RenderBall, World};
pub use tick::{resolve_collision, tick};
