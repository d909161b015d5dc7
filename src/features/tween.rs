//! Time-based tweens with CSS-style cubic-bezier easing
//!
//! The carousel track, smooth scrolling and reveal fades all interpolate a
//! single scalar over a fixed duration. Values are sampled with an explicit
//! `Instant` so callers (and tests) control time.

use std::time::{Duration, Instant};

/// CSS `cubic-bezier(x1, y1, x2, y2)` timing function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// `cubic-bezier(.16, 1, .3, 1)` - long soft ease-out
    pub const SOFT_OUT: Self = Self::new(0.16, 1.0, 0.3, 1.0);
    /// `ease-in-out`
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
    /// `ease-out`
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x` in [0, 1]
    pub fn ease(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }

        // Solve x(t) = x with Newton-Raphson, falling back to bisection
        // where the slope is too flat.
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(t, self.x1, self.x2) - x;
            if error.abs() < 1e-5 {
                return Self::sample(t, self.y1, self.y2);
            }
            let slope = Self::slope(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = Self::sample(t, self.x1, self.x2);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        Self::sample(t, self.y1, self.y2)
    }

    // B(t) with P0 = 0 and P3 = 1
    fn sample(t: f32, p1: f32, p2: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
    }

    fn slope(t: f32, p1: f32, p2: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }
}

/// Scalar interpolation between two values over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    curve: CubicBezier,
}

impl Tween {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration, curve: CubicBezier) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            curve,
        }
    }

    /// Tween that is already at rest on `value`
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, CubicBezier::EASE_OUT)
    }

    /// Linear progress in [0, 1] at `now`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.curve.ease(p)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
