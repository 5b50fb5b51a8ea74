//! Pixel rounding rules shared by the geometry transform.
//!
//! Boundary pixels are observable, so both helpers reproduce the host's
//! integer semantics exactly.

/// Rounds to the nearest integer with ties going toward positive infinity
/// (`floor(value + 0.5)`).
///
/// Matches half-away-from-zero for non-negative inputs. Non-finite input
/// saturates the way `as i32` does.
///
/// Inputs are `f64`. A host that does its scale math in `f32` can land on
/// the other side of a `.5` tie after many accumulated updates, so boundary
/// pixels may differ by one from such a host.
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Half of the growth from `before` to `after`, truncated toward zero.
/// The difference saturates before halving.
#[must_use]
pub fn half_delta(after: i32, before: i32) -> i32 {
    after.saturating_sub(before) / 2
}

#[cfg(test)]
mod tests {
    use super::{half_delta, round_half_up};

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4999), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.5001), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn half_delta_truncates_toward_zero() {
        assert_eq!(half_delta(105, 100), 2);
        assert_eq!(half_delta(95, 100), -2);
        assert_eq!(half_delta(100, 100), 0);
        assert_eq!(half_delta(101, 100), 0);
        assert_eq!(half_delta(99, 100), 0);
    }

    #[test]
    fn half_delta_saturates_on_extreme_growth() {
        assert_eq!(half_delta(i32::MAX, i32::MIN), i32::MAX / 2);
        assert_eq!(half_delta(i32::MIN, i32::MAX), i32::MIN / 2);
    }
}
