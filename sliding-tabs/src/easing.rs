//! Timing curves for the indicator creep mode.
//!
//! When creep is enabled the indicator's two edges travel with independent
//! curves: the leading edge accelerates while the trailing edge decelerates,
//! so the indicator stretches toward the target tab and then catches up.

/// Quadratic ease-in. Starts slow and speeds up.
#[inline]
pub(crate) fn accelerate(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out. Starts fast and slows down.
#[inline]
pub(crate) fn decelerate(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_are_anchored() {
        assert_eq!(accelerate(0.0), 0.0);
        assert_eq!(accelerate(1.0), 1.0);
        assert_eq!(decelerate(0.0), 0.0);
        assert_eq!(decelerate(1.0), 1.0);
    }

    #[test]
    fn accelerate_lags_and_decelerate_leads() {
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(accelerate(t) < t);
            assert!(decelerate(t) > t);
        }
    }
}
