//! Tiltball headless driver
//!
//! Stands in for the host runtime: builds a world, feeds it a canned tilt
//! sweep instead of a real accelerometer, ticks it, and logs renderable
//! snapshots. Usage:
//!
//! ```text
//! tiltball [rect|round] [seed] [ticks]
//! ```

use tiltball::consts::SCALE;
use tiltball::sim::{Boundary, World, tick};
use tiltball::Settings;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let shape = args.next().unwrap_or_else(|| "rect".into());
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);

    let settings = Settings::default();
    let boundary = match shape.as_str() {
        "round" => Boundary::round(180),
        _ => Boundary::rect(144, 168),
    };

    let mut world = World::new(boundary, settings.ball_count, seed);
    log::info!(
        "running {} ticks at a {} ms cadence hint, seed {}",
        ticks,
        settings.tick_interval_ms(),
        seed
    );

    for t in 0..ticks {
        // Slow triangle-wave tilt on x, constant slight tilt on y
        let phase = (t % 240) as i64;
        let tilt_x = if phase < 120 { phase - 60 } else { 180 - phase };
        world.set_acceleration(tilt_x * 4, -80, 0);
        tick(&mut world);

        if t % 120 == 0 {
            let snapshot = world.renderables();
            let first = &snapshot[0];
            log::info!(
                "tick {:4}: ball 0 at ({}, {}) px",
                t,
                first.x / SCALE,
                first.y / SCALE
            );
        }
    }

    for (i, ball) in world.renderables().iter().enumerate() {
        println!(
            "ball {:2}: pos ({:4}, {:4}) px  r {} px  color #{:06X}",
            i,
            ball.x / SCALE,
            ball.y / SCALE,
            ball.radius / SCALE,
            ball.color
        );
    }
}
