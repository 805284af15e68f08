//! Fixed-point physics tick
//!
//! Advances every ball in index order: tilt acceleration, friction,
//! integration, boundary containment, then pairwise collision resolution with
//! immediate visibility (later balls in the same tick see the response).
//! Every ordered pair (i, j), i != j, is evaluated once per tick, so each
//! unordered pair resolves twice in opposite order. That amplifies the
//! impulse response compared to a single pass and is kept on purpose: the
//! dynamics are tuned around it. Do not deduplicate the pair loop.

use super::intmath::{dist_sqr, isqrt};
use super::state::{Ball, Boundary, World};

/// Advance the world by one tick.
pub fn tick(world: &mut World) {
    world.time_ticks += 1;
    let accel = world.accel;
    for i in 0..world.balls.len() {
        {
            let ball = &mut world.balls[i];
            // Device y axis points opposite to screen y
            ball.vel.x += accel.x;
            ball.vel.y -= accel.y;
            ball.vel.x = ball.vel.x * ball.friction / 100;
            ball.vel.y = ball.vel.y * ball.friction / 100;
            ball.pos += ball.vel;
            contain(ball, &world.boundary);
        }
        for j in 0..world.balls.len() {
            if j == i {
                continue;
            }
            let (a, b) = pair_mut(&mut world.balls, i, j);
            resolve_collision(a, b);
        }
    }
}

/// Detect and resolve a single overlapping contact between two balls.
///
/// Impulse-based response: the impulse scalar is proportional to the
/// velocity along the contact normal scaled by (100 + restitution), split
/// between the balls inversely by mass. Touches nothing but the two balls
/// passed in. Positions are integrated by the updated velocities immediately,
/// so a resolved pair moves apart within the same tick.
pub fn resolve_collision(a: &mut Ball, b: &mut Ball) {
    let sidelen = a.radius + b.radius;
    let d_sqr = dist_sqr(a.pos, b.pos);
    if d_sqr > sidelen * sidelen {
        return;
    }
    let dv = b.vel - a.vel;
    let dp = b.pos - a.pos;
    let d = isqrt(d_sqr as u64) as i64;
    // Coincident centers leave the contact normal undefined; skip the
    // contact instead of dividing by zero.
    if d == 0 {
        return;
    }
    let vel_along_normal = dv.x * (dp.x / d) + dv.y * (dp.y / d);
    // Separating or stationary along the normal: nothing to resolve
    if vel_along_normal >= 0 {
        return;
    }
    let restitution = a.restitution.min(b.restitution);
    let impulse = -(vel_along_normal * (100 + restitution)) * a.mass * b.mass;
    let ix = dp.x * impulse;
    let iy = dp.y * impulse;
    let mass_sum = a.mass + b.mass;
    a.vel.x -= ix / a.mass / d / mass_sum / 100;
    a.vel.y -= iy / a.mass / d / mass_sum / 100;
    b.vel.x += ix / b.mass / d / mass_sum / 100;
    b.vel.y += iy / b.mass / d / mass_sum / 100;
    a.pos += a.vel;
    b.pos += b.vel;
}

/// Keep a ball inside the viewport.
fn contain(ball: &mut Ball, boundary: &Boundary) {
    match *boundary {
        Boundary::Rect { width, height } => {
            if ball.pos.y + ball.radius > height {
                ball.pos.y = height - ball.radius;
                ball.vel.y = -ball.vel.y * ball.restitution / 100;
            }
            if ball.pos.y - ball.radius < 0 {
                ball.pos.y = ball.radius;
                ball.vel.y = -ball.vel.y * ball.restitution / 100;
            }
            if ball.pos.x + ball.radius > width {
                ball.pos.x = width - ball.radius;
                ball.vel.x = -ball.vel.x * ball.restitution / 100;
            }
            if ball.pos.x - ball.radius < 0 {
                ball.pos.x = ball.radius;
                ball.vel.x = -ball.vel.x * ball.restitution / 100;
            }
        }
        Boundary::Round { center, radius } => {
            let max_dist = radius - ball.radius;
            let d_sqr = dist_sqr(ball.pos, center);
            if d_sqr > max_dist * max_dist {
                let d = isqrt(d_sqr as u64) as i64;
                if d == 0 {
                    return;
                }
                // Project radially back onto the boundary; the correction
                // also feeds into velocity rather than a pure reflection.
                let projected = (ball.pos - center) * max_dist / d + center;
                ball.vel += (projected - ball.pos) * ball.restitution / 100;
                ball.pos = projected;
            }
        }
    }
}

/// Mutable references to two distinct balls of the same slice.
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
