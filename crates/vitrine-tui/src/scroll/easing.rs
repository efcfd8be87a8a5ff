//! Easing curves and interpolation helpers for scroll animations.

use std::time::{Duration, Instant};

use vitrine_core::EasingKind;

/// Calculation methods for the configured easing curve
pub trait EasingExt {
    /// Map animation progress `t` in [0, 1] to an eased value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingExt for EasingKind {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingKind::Linear => t,
            EasingKind::Cubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            EasingKind::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Animation progress in [0, 1] since `start`
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (start.elapsed().as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Interpolate between two row offsets
#[inline]
pub fn lerp_rows(from: u16, to: u16, t: f64) -> u16 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [EasingKind::Linear, EasingKind::Cubic, EasingKind::EaseOut] {
            assert!((easing.apply(0.0)).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [EasingKind::Linear, EasingKind::Cubic, EasingKind::EaseOut] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let v = easing.apply(i as f64 / 10.0);
                assert!(v >= prev, "{:?} not monotonic", easing);
                prev = v;
            }
        }
    }

    #[test]
    fn test_lerp_rows() {
        assert_eq!(lerp_rows(0, 100, 0.0), 0);
        assert_eq!(lerp_rows(0, 100, 0.5), 50);
        assert_eq!(lerp_rows(100, 0, 1.0), 0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Instant::now(), Duration::ZERO) - 1.0).abs() < 0.001);
    }
}
