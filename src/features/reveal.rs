//! Reveal-on-visible
//!
//! Each target is observed until it first intersects the viewport by at
//! least `REVEAL_THRESHOLD` of its height, then fades in after its stagger
//! delay and is never observed again.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::MotionGate;
use super::layout::{RevealSlot, RevealTarget};
use super::tween::CubicBezier;

pub const REVEAL_THRESHOLD: f32 = 0.12;
pub const REVEAL_DURATION: Duration = Duration::from_millis(650);
const STAGGER_STEP_MS: u64 = 80;
const MAX_STAGGER_MS: u64 = 700;

/// Transition delay for a stagger order
pub fn stagger_delay(stagger: u32) -> Duration {
    Duration::from_millis((u64::from(stagger) * STAGGER_STEP_MS).min(MAX_STAGGER_MS))
}

/// Fraction of `[top, top + height)` inside `[scroll_y, scroll_y + viewport_h)`
pub fn intersection_ratio(top: f32, height: f32, scroll_y: f32, viewport_h: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(scroll_y + viewport_h) - top.max(scroll_y);
    (visible / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
struct Revealed {
    at: Instant,
    delay: Duration,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    slots: Vec<RevealSlot>,
    revealed: HashMap<RevealTarget, Revealed>,
    gate: MotionGate,
}

impl RevealTracker {
    /// Start observing `slots`; with the gate set everything is visible now
    pub fn new(slots: Vec<RevealSlot>, gate: MotionGate, now: Instant) -> Self {
        let mut revealed = HashMap::new();
        if gate.is_set() {
            for slot in &slots {
                revealed.insert(
                    slot.target,
                    Revealed {
                        at: now,
                        delay: Duration::ZERO,
                    },
                );
            }
        }
        Self {
            slots,
            revealed,
            gate,
        }
    }

    /// Replace geometry after a resize, keeping what was already revealed
    pub fn relayout(&mut self, slots: Vec<RevealSlot>) {
        self.slots = slots;
    }

    /// Check unrevealed targets against the viewport; returns how many
    /// were revealed by this call
    pub fn observe(&mut self, scroll_y: f32, viewport_h: f32, now: Instant) -> usize {
        let mut count = 0;
        for slot in &self.slots {
            if self.is_revealed(slot.target) {
                continue;
            }
            if intersection_ratio(slot.top, slot.height, scroll_y, viewport_h) >= REVEAL_THRESHOLD
            {
                self.revealed.insert(
                    slot.target,
                    Revealed {
                        at: now,
                        delay: stagger_delay(slot.stagger),
                    },
                );
                count += 1;
            }
        }
        if count > 0 {
            tracing::trace!(count, scroll_y, "reveal targets became visible");
        }
        count
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.revealed.contains_key(&target)
    }

    /// Visibility in [0, 1] at `now`
    pub fn progress(&self, target: RevealTarget, now: Instant) -> f32 {
        let Some(r) = self.revealed.get(&target) else {
            return 0.0;
        };
        if self.gate.is_set() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(r.at);
        let Some(running) = elapsed.checked_sub(r.delay) else {
            return 0.0;
        };
        let linear = (running.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0);
        CubicBezier::SOFT_OUT.ease(linear)
    }

    /// True while any revealed target is still fading in
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.gate.is_set() {
            return false;
        }
        self.revealed
            .values()
            .any(|r| now.saturating_duration_since(r.at) < r.delay + REVEAL_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(target: RevealTarget, top: f32, stagger: u32) -> RevealSlot {
        RevealSlot {
            target,
            top,
            height: 200.0,
            stagger,
        }
    }

    #[test]
    fn test_stagger_delay_clamped() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(3), Duration::from_millis(240));
        assert_eq!(stagger_delay(8), Duration::from_millis(640));
        assert_eq!(stagger_delay(9), Duration::from_millis(700));
        assert_eq!(stagger_delay(u32::MAX), Duration::from_millis(700));
    }

    #[test]
    fn test_intersection_ratio() {
        assert_eq!(intersection_ratio(1000.0, 200.0, 0.0, 800.0), 0.0);
        assert_eq!(intersection_ratio(700.0, 200.0, 0.0, 800.0), 0.5);
        assert_eq!(intersection_ratio(100.0, 200.0, 0.0, 800.0), 1.0);
        assert_eq!(intersection_ratio(100.0, 200.0, 250.0, 800.0), 0.25);
        assert_eq!(intersection_ratio(100.0, 0.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn test_reveals_at_threshold_once() {
        let now = Instant::now();
        let mut tracker =
            RevealTracker::new(vec![slot(RevealTarget::AboutText, 1000.0, 0)], MotionGate::OPEN, now);

        // 20px of 200 = 10% visible
        assert_eq!(tracker.observe(220.0, 800.0, now), 0);
        assert!(!tracker.is_revealed(RevealTarget::AboutText));

        // 24px = 12%
        assert_eq!(tracker.observe(224.0, 800.0, now), 1);
        assert!(tracker.is_revealed(RevealTarget::AboutText));

        // Scrolling away and back does not reveal again
        assert_eq!(tracker.observe(0.0, 800.0, now), 0);
        assert_eq!(tracker.observe(900.0, 800.0, now), 0);
    }

    #[test]
    fn test_progress_honours_stagger() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new(
            vec![
                slot(RevealTarget::ServiceCard(0), 100.0, 0),
                slot(RevealTarget::ServiceCard(2), 100.0, 2),
            ],
            MotionGate::OPEN,
            now,
        );
        tracker.observe(0.0, 800.0, now);

        let early = now + Duration::from_millis(100);
        assert!(tracker.progress(RevealTarget::ServiceCard(0), early) > 0.0);
        assert_eq!(tracker.progress(RevealTarget::ServiceCard(2), early), 0.0);

        let done = now + Duration::from_millis(160) + REVEAL_DURATION;
        assert_eq!(tracker.progress(RevealTarget::ServiceCard(2), done), 1.0);
        assert!(!tracker.is_animating(done));
        assert!(tracker.is_animating(early));
    }

    #[test]
    fn test_reduced_motion_reveals_everything() {
        let now = Instant::now();
        let tracker = RevealTracker::new(
            vec![
                slot(RevealTarget::AboutText, 5000.0, 0),
                slot(RevealTarget::ContactCard, 9000.0, 5),
            ],
            MotionGate::REDUCED,
            now,
        );
        assert_eq!(tracker.progress(RevealTarget::AboutText, now), 1.0);
        assert_eq!(tracker.progress(RevealTarget::ContactCard, now), 1.0);
        assert!(!tracker.is_animating(now));
    }
}
