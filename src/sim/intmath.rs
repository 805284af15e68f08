//! Integer math for the fixed-point sim
//!
//! The target hardware has no FPU, so distance work is done with an integer
//! square root and squared-distance comparisons. Everything is widened to
//! 64 bits; the largest squared distance the viewport can produce (dimension
//! in pixels x SCALE, squared) is far below `i64::MAX`, so none of these can
//! overflow.

use glam::I64Vec2;

/// floor(sqrt(n)) by the binary digit-by-digit method.
///
/// Holds `isqrt(n)^2 <= n < (isqrt(n) + 1)^2` for every input; `isqrt(0) == 0`.
pub fn isqrt(mut n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut root: u64 = 0;
    let mut bit: u64 = 1 << 62;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if n >= root + bit {
            n -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

/// Squared Euclidean distance between two fixed-point points.
#[inline]
pub fn dist_sqr(a: I64Vec2, b: I64Vec2) -> i64 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn isqrt_zero() {
        assert_eq!(isqrt(0), 0);
    }

    #[test]
    fn isqrt_small_values() {
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(9), 3);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(100), 10);
    }

    #[test]
    fn isqrt_near_u64_max() {
        let r = isqrt(u64::MAX);
        assert_eq!(r, (1u64 << 32) - 1);
    }

    #[test]
    fn dist_sqr_axis_aligned() {
        let a = I64Vec2::new(0, 0);
        let b = I64Vec2::new(3, 4);
        assert_eq!(dist_sqr(a, b), 25);
        assert_eq!(dist_sqr(b, a), 25);
        assert_eq!(dist_sqr(a, a), 0);
    }

    #[test]
    fn dist_sqr_negative_coordinates() {
        let a = I64Vec2::new(-5, -5);
        let b = I64Vec2::new(-2, -1);
        assert_eq!(dist_sqr(a, b), 25);
    }

    proptest! {
        #[test]
        fn isqrt_bounds(n in any::<u64>()) {
            let r = isqrt(n);
            // r^2 <= n, computed in u128 so the check itself can't overflow
            prop_assert!((r as u128) * (r as u128) <= n as u128);
            prop_assert!(((r + 1) as u128) * ((r + 1) as u128) > n as u128);
        }

        #[test]
        fn isqrt_exact_on_perfect_squares(r in 0u64..=u32::MAX as u64) {
            prop_assert_eq!(isqrt(r * r), r);
        }
    }
}
