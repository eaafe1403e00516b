//! Angle wrapping to the principal interval (-pi, pi].

use std::f64::consts::{PI, TAU};

use crate::numeric::sign;

/// A wrapped angle together with the whole revolutions removed from the
/// input, so `angle + revolutions * 2*pi` reconstructs the original.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrappedAngle {
    /// Principal angle in (-pi, pi] (rad)
    pub angle: f64,
    /// Whole revolutions removed from the input
    pub revolutions: i64,
}

/// Remainder with the quotient truncated toward zero.
///
/// `-7 rem 3` is `-1` here where a floored remainder gives `2`. The wrap
/// construction below depends on this branch choice near zero.
pub fn truncated_remainder(dividend: f64, divisor: f64) -> f64 {
    dividend - divisor * (dividend / divisor).trunc()
}

/// Wrap an angle into (-pi, pi], counting removed revolutions.
///
/// The principal angle is built from a pair of truncated remainders:
///
/// ```text
/// p1 = trunc_rem(theta + sign(theta)*pi, 2*pi)
/// p2 = sign(sign(theta) + 2*(sign(|trunc_rem(theta + pi, 2*pi)|/(2*pi)) - 1)) * pi
/// angle = p1 - p2
/// ```
///
/// Boundary inputs land on the closed end of the interval: both `pi` and
/// `-pi` wrap to `+pi`. The revolution count is the multiple of 2*pi
/// separating the input from the principal angle, so reconstruction holds
/// at the boundaries too: `wrap_to_pi(-PI)` is `(PI, -1)`.
pub fn wrap_to_pi(theta: f64) -> WrappedAngle {
    let p1 = truncated_remainder(theta + sign(theta) * PI, TAU);
    // The inner sign() is 0 only when theta sits on an odd multiple of pi;
    // that case flips p2 to the far end of the interval.
    let edge = sign(truncated_remainder(theta + PI, TAU).abs() / TAU);
    let p2 = sign(sign(theta) + 2.0 * (edge - 1.0)) * PI;
    let angle = p1 - p2;
    let revolutions = ((theta - angle) / TAU).round() as i64;

    WrappedAngle { angle, revolutions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_wrap(theta: f64, expected_angle: f64, expected_revs: i64) {
        let w = wrap_to_pi(theta);
        assert!(
            (w.angle - expected_angle).abs() < 1e-12,
            "wrap({theta}): angle {} != {expected_angle}",
            w.angle
        );
        assert_eq!(w.revolutions, expected_revs, "wrap({theta}): revolutions");
    }

    #[test]
    fn truncated_remainder_rounds_toward_zero() {
        assert_eq!(truncated_remainder(7.0, 3.0), 1.0);
        assert_eq!(truncated_remainder(-7.0, 3.0), -1.0);
        assert_eq!(truncated_remainder(7.0, -3.0), 1.0);
        assert_eq!(truncated_remainder(6.0, 3.0), 0.0);
    }

    #[test]
    fn small_angles_pass_through() {
        assert_wrap(0.0, 0.0, 0);
        assert_wrap(0.5, 0.5, 0);
        assert_wrap(-0.5, -0.5, 0);
        assert_wrap(3.0, 3.0, 0);
        assert_wrap(-3.0, -3.0, 0);
    }

    #[test]
    fn boundary_lands_on_positive_pi() {
        assert_wrap(PI, PI, 0);
        assert_wrap(-PI, PI, -1);
        assert_wrap(3.0 * PI, PI, 1);
        assert_wrap(-3.0 * PI, PI, -2);
    }

    #[test]
    fn full_revolutions_wrap_to_zero() {
        assert_wrap(TAU, 0.0, 1);
        assert_wrap(-TAU, 0.0, -1);
        assert_wrap(3.0 * TAU, 0.0, 3);
    }

    #[test]
    fn interior_values_shift_by_whole_turns() {
        assert_wrap(5.0, 5.0 - TAU, 1);
        assert_wrap(-4.0, -4.0 + TAU, -1);
        assert_wrap(4.0 + 2.0 * TAU, 4.0 - TAU, 3);
    }
}
