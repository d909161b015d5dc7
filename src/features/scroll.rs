//! Scroll plumbing: per-frame throttling, smooth scrolling, anchor offsets

use std::time::{Duration, Instant};

use super::MotionGate;
use super::tween::{CubicBezier, Tween};

/// Duration of an animated scroll
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Back-to-top appears past this offset
pub const BACK_TO_TOP_AFTER: f32 = 600.0;

/// Target offset for an anchor: just under the sticky header
pub fn anchor_offset(section_top: f32, header_height: f32) -> f32 {
    (section_top - header_height + 2.0).max(0.0)
}

pub fn back_to_top_visible(scroll_y: f32) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

/// Coalesces scroll events so they are handled at most once per frame
///
/// Every event records the latest offset; only the first one after a pass
/// asks for a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollThrottle {
    pending: Option<f32>,
    scheduled: bool,
}

impl ScrollThrottle {
    /// Record an offset; returns true if this event scheduled a new pass
    pub fn record(&mut self, y: f32) -> bool {
        self.pending = Some(y);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    /// Whether a pass is waiting for the next frame
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Run the pass: hand out the latest offset and clear the guard
    pub fn take(&mut self) -> Option<f32> {
        self.scheduled = false;
        self.pending.take()
    }
}

/// Animated scroll towards a target offset
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    tween: Tween,
}

impl SmoothScroll {
    /// Scroll from `from` to `to`; with the gate set the move is instant
    pub fn new(from: f32, to: f32, now: Instant, gate: MotionGate) -> Self {
        let tween = if gate.is_set() {
            Tween::settled(to, now)
        } else {
            Tween::new(from, to, now, SMOOTH_SCROLL_DURATION, CubicBezier::EASE_IN_OUT)
        };
        Self { tween }
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        self.tween.value_at(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.tween.is_finished(now)
    }

    pub fn target(&self) -> f32 {
        self.tween.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_schedules_once_per_pass() {
        let mut throttle = ScrollThrottle::default();
        assert!(!throttle.is_scheduled());

        assert!(throttle.record(10.0));
        assert!(!throttle.record(20.0));
        assert!(!throttle.record(35.0));
        assert!(throttle.is_scheduled());

        assert_eq!(throttle.take(), Some(35.0));
        assert!(!throttle.is_scheduled());
        assert_eq!(throttle.take(), None);

        assert!(throttle.record(40.0));
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(anchor_offset(1000.0, 72.0), 930.0);
        assert_eq!(anchor_offset(0.0, 72.0), 0.0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(600.0));
        assert!(back_to_top_visible(601.0));
    }

    #[test]
    fn test_smooth_scroll_animates() {
        let now = Instant::now();
        let scroll = SmoothScroll::new(1200.0, 0.0, now, MotionGate::OPEN);
        assert_eq!(scroll.offset_at(now), 1200.0);
        let mid = scroll.offset_at(now + SMOOTH_SCROLL_DURATION / 2);
        assert!((mid - 600.0).abs() < 1.0);
        assert_eq!(scroll.offset_at(now + SMOOTH_SCROLL_DURATION), 0.0);
        assert!(scroll.is_finished(now + SMOOTH_SCROLL_DURATION));
    }

    #[test]
    fn test_reduced_motion_scroll_is_instant() {
        let now = Instant::now();
        let scroll = SmoothScroll::new(1200.0, 300.0, now, MotionGate::REDUCED);
        assert!(scroll.is_finished(now));
        assert_eq!(scroll.offset_at(now), 300.0);
    }
}
