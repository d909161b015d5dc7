//! Show/hide fade using iced_anim

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::MotionGate;

/// Fade duration for floating controls and the header
const FADE_DURATION: Duration = Duration::from_millis(250);

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(FADE_DURATION)
}

/// Opacity animation between hidden (0.0) and shown (1.0)
///
/// With the motion gate set the value jumps straight to its target.
#[derive(Debug)]
pub struct Fade {
    animation: Animated<f32>,
    shown: bool,
    gate: MotionGate,
}

impl Fade {
    pub fn new(shown: bool, gate: MotionGate) -> Self {
        Self {
            animation: Animated::transition(if shown { 1.0 } else { 0.0 }, fade_easing()),
            shown,
            gate,
        }
    }

    /// Move towards shown or hidden; no-op if already heading there
    pub fn set_shown(&mut self, shown: bool) {
        if self.shown == shown {
            return;
        }
        self.shown = shown;
        let target = if shown { 1.0 } else { 0.0 };
        if self.gate.is_set() {
            self.animation = Animated::transition(target, fade_easing());
        } else {
            self.animation.update(target.into());
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Current opacity (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// True while shown or still fading out
    pub fn is_visible(&self) -> bool {
        self.shown || self.progress() > 0.01
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(Fade::new(false, MotionGate::OPEN).progress(), 0.0);
        assert_eq!(Fade::new(true, MotionGate::OPEN).progress(), 1.0);
    }

    #[test]
    fn test_show_starts_animation() {
        let mut fade = Fade::new(false, MotionGate::OPEN);
        fade.set_shown(true);
        assert!(fade.is_shown());
        assert!(fade.is_visible());
        assert!(fade.is_animating() || fade.progress() > 0.0);
    }

    #[test]
    fn test_reduced_motion_jumps() {
        let mut fade = Fade::new(false, MotionGate::REDUCED);
        fade.set_shown(true);
        assert_eq!(fade.progress(), 1.0);
        assert!(!fade.is_animating());
        fade.set_shown(false);
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_visible());
    }
}
