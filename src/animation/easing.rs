//! Easing functions for door swings

use serde::{Deserialize, Serialize};

/// Easing curve applied to the swing progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant angular speed
    Linear,
    /// Fast start, settles into the final angle without overshoot
    #[default]
    CubicOut,
}

/// Cubic ease-out over `t` clamped to [0, 1]
pub fn ease01(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    match easing {
        Easing::Linear => t.clamp(0.0, 1.0),
        Easing::CubicOut => ease01(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease01(0.0), 0.0);
        assert_eq!(ease01(1.0), 1.0);
        for easing in [Easing::Linear, Easing::CubicOut] {
            assert_eq!(ease(0.0, easing), 0.0);
            assert_eq!(ease(1.0, easing), 1.0);
        }
    }

    #[test]
    fn test_ease_monotonic() {
        for easing in [Easing::Linear, Easing::CubicOut] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let v = ease(t, easing);
                assert!(v >= prev, "Easing {:?} should be monotonic at t={}", easing, t);
                assert!((0.0..=1.0).contains(&v));
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease01(-0.5), 0.0);
        assert_eq!(ease01(1.5), 1.0);
        assert_eq!(ease(-2.0, Easing::Linear), 0.0);
        assert_eq!(ease(3.0, Easing::Linear), 1.0);
    }

    #[test]
    fn test_cubic_out_leads_linear() {
        for i in 1..100 {
            let t = i as f32 / 100.0;
            assert!(ease01(t) > t, "ease-out should run ahead of linear at t={}", t);
        }
        assert!((ease01(0.5) - 0.875).abs() < 1e-6);
    }
}
