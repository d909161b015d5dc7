//! Carousel state machine
//!
//! Index arithmetic, drag recognition and track positioning for one
//! carousel instance, kept free of any rendering so the navigation rules can
//! be exercised directly. The view only reads `offset_at` and `indicators`.

use std::time::{Duration, Instant};

use super::MotionGate;
use super::tween::{CubicBezier, Tween};

/// Track transition duration
pub const SLIDE_DURATION: Duration = Duration::from_millis(700);

/// Fraction of the width a drag must cover to change slide
pub const SWIPE_THRESHOLD: f32 = 0.12;

/// One slide: image reference plus caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideItem {
    pub image_ref: String,
    pub caption: String,
}

impl SlideItem {
    pub fn new(image_ref: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            caption: caption.into(),
        }
    }
}

/// Pointer that can drive a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    /// Touch contact by finger id
    Finger(u64),
}

/// Pointer drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Only `pointer` moves or ends the drag
    Dragging {
        pointer: PointerId,
        start_x: f32,
        current_x: f32,
    },
}

/// What a drag release resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// Dragged right past the threshold
    Previous,
    /// Dragged left past the threshold
    Next,
    /// Below threshold, returned to the current slide
    SnapBack,
}

/// State of a single carousel
#[derive(Debug, Clone)]
pub struct CarouselState {
    items: Vec<SlideItem>,
    index: usize,
    drag: DragState,
    width: f32,
    track: Tween,
    gate: MotionGate,
}

impl CarouselState {
    /// Create a carousel showing the first slide, without entrance animation
    ///
    /// Returns `None` for an empty slide list; navigation has no meaning
    /// without slides, so such a carousel is never mounted.
    pub fn new(items: Vec<SlideItem>, width: f32, gate: MotionGate, now: Instant) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let mut state = Self {
            items,
            index: 0,
            drag: DragState::Idle,
            width: width.max(0.0),
            track: Tween::settled(0.0, now),
            gate,
        };
        state.go_to(0, false, now);
        Some(state)
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Active flag per indicator; exactly one is true
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.items.len()).map(|i| i == self.index).collect()
    }

    /// Resting track offset for the current slide
    fn base_offset(&self) -> f32 {
        -(self.index as f32) * self.width
    }

    /// Navigate to slide `i`, wrapping any signed index into range
    pub fn go_to(&mut self, i: isize, animate: bool, now: Instant) {
        let n = self.items.len() as isize;
        self.index = (((i % n) + n) % n) as usize;

        let target = self.base_offset();
        self.track = if animate && self.gate.allows_animation() {
            let from = self.offset_at(now);
            Tween::new(from, target, now, SLIDE_DURATION, CubicBezier::SOFT_OUT)
        } else {
            Tween::settled(target, now)
        };

        tracing::trace!(index = self.index, target, animate, "carousel go_to");
    }

    pub fn next(&mut self, now: Instant) {
        self.go_to(self.index as isize + 1, true, now);
    }

    pub fn prev(&mut self, now: Instant) {
        self.go_to(self.index as isize - 1, true, now);
    }

    /// Start a drag at horizontal position `x`
    ///
    /// Easing is dropped: the track rests on the current slide and follows
    /// the pointer from there. A press while another pointer drags is
    /// ignored.
    pub fn pointer_down(&mut self, x: f32, pointer: PointerId, now: Instant) {
        if let DragState::Dragging { pointer: driver, .. } = self.drag {
            if driver != pointer {
                return;
            }
        }
        self.drag = DragState::Dragging {
            pointer,
            start_x: x,
            current_x: x,
        };
        self.track = Tween::settled(self.base_offset(), now);
    }

    /// Follow the pointer; false when `pointer` is not driving a drag
    pub fn pointer_move(&mut self, x: f32, pointer: PointerId) -> bool {
        match &mut self.drag {
            DragState::Dragging {
                pointer: driver,
                current_x,
                ..
            } if *driver == pointer => {
                *current_x = x;
                true
            }
            _ => false,
        }
    }

    /// Finish a drag and navigate according to its displacement
    pub fn pointer_up(&mut self, pointer: PointerId, now: Instant) -> Option<DragRelease> {
        let DragState::Dragging {
            pointer: driver,
            start_x,
            current_x,
        } = self.drag
        else {
            return None;
        };
        if driver != pointer {
            return None;
        }
        // The release eases from wherever the pointer left the track
        let released_at = self.offset_at(now);
        self.drag = DragState::Idle;
        self.track = Tween::settled(released_at, now);

        let dx = current_x - start_x;
        let threshold = self.width * SWIPE_THRESHOLD;

        let release = if dx > threshold {
            self.prev(now);
            DragRelease::Previous
        } else if dx < -threshold {
            self.next(now);
            DragRelease::Next
        } else {
            self.go_to(self.index as isize, true, now);
            DragRelease::SnapBack
        };

        tracing::debug!(dx, threshold, ?release, index = self.index, "carousel drag released");
        Some(release)
    }

    /// Track the container's live width
    pub fn resize(&mut self, width: f32, now: Instant) {
        self.width = width.max(0.0);
        self.go_to(self.index as isize, false, now);
    }

    /// Horizontal track offset to draw at `now`
    pub fn offset_at(&self, now: Instant) -> f32 {
        match self.drag {
            DragState::Dragging {
                start_x, current_x, ..
            } => self.base_offset() + (current_x - start_x),
            DragState::Idle => self.track.value_at(now),
        }
    }

    /// True while the track is easing towards its target
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.is_dragging() && !self.track.is_finished(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<SlideItem> {
        (0..n)
            .map(|i| SlideItem::new(format!("assets/projetos/{:02}.jpg", i + 1), format!("Slide {}", i + 1)))
            .collect()
    }

    fn carousel(n: usize, width: f32) -> CarouselState {
        CarouselState::new(items(n), width, MotionGate::OPEN, Instant::now()).unwrap()
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(CarouselState::new(Vec::new(), 800.0, MotionGate::OPEN, Instant::now()).is_none());
    }

    #[test]
    fn test_starts_at_zero_without_animation() {
        let c = carousel(3, 1000.0);
        let now = Instant::now();
        assert_eq!(c.index(), 0);
        assert!(!c.is_animating(now));
        assert_eq!(c.offset_at(now), 0.0);
    }

    #[test]
    fn test_go_to_wraps_any_integer() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        for i in -10_isize..=10 {
            c.go_to(i, true, now);
            assert_eq!(c.index() as isize, i.rem_euclid(3), "go_to({})", i);
        }
        c.go_to(isize::MAX, false, now);
        assert_eq!(c.index() as isize, isize::MAX.rem_euclid(3));
    }

    #[test]
    fn test_three_item_scenario() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        c.prev(now);
        assert_eq!(c.index(), 2);
        c.next(now);
        assert_eq!(c.index(), 0);
        c.go_to(5, true, now);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_next_prev_are_inverse() {
        let now = Instant::now();
        for n in 1..6 {
            for start in 0..n {
                let mut c = carousel(n, 500.0);
                c.go_to(start as isize, false, now);
                c.next(now);
                c.prev(now);
                assert_eq!(c.index(), start);
                c.prev(now);
                c.next(now);
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn test_full_cycle_closure() {
        let now = Instant::now();
        for n in 1..6 {
            let mut c = carousel(n, 500.0);
            c.go_to(n as isize - 1, false, now);
            for _ in 0..n {
                c.next(now);
            }
            assert_eq!(c.index(), n - 1);
        }
    }

    #[test]
    fn test_exactly_one_active_indicator() {
        let mut c = carousel(4, 500.0);
        let now = Instant::now();
        for step in 0..9 {
            let dots = c.indicators();
            assert_eq!(dots.len(), 4);
            assert_eq!(dots.iter().filter(|a| **a).count(), 1);
            assert!(dots[c.index()]);
            if step % 2 == 0 {
                c.next(now);
            } else {
                c.go_to(step * 7, true, now);
            }
        }
    }

    #[test]
    fn test_animated_go_to_eases_to_target() {
        let mut c = carousel(3, 1000.0);
        let start = Instant::now();
        c.go_to(1, true, start);

        assert!(c.is_animating(start));
        let mid = c.offset_at(start + Duration::from_millis(200));
        assert!(mid < 0.0 && mid > -1000.0);

        let end = start + SLIDE_DURATION;
        assert_eq!(c.offset_at(end), -1000.0);
        assert!(!c.is_animating(end));
    }

    #[test]
    fn test_reduced_motion_jumps() {
        let now = Instant::now();
        let mut c = CarouselState::new(items(3), 1000.0, MotionGate::REDUCED, now).unwrap();
        c.next(now);
        assert!(!c.is_animating(now));
        assert_eq!(c.offset_at(now), -1000.0);
    }

    #[test]
    fn test_drag_follows_pointer_without_state_change() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        c.go_to(1, false, now);

        c.pointer_down(400.0, PointerId::Mouse, now);
        assert!(c.pointer_move(330.0, PointerId::Mouse));
        assert_eq!(c.offset_at(now), -1000.0 - 70.0);
        assert_eq!(c.index(), 1);
        assert!(!c.is_animating(now));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut c = carousel(3, 1000.0);
        assert!(!c.pointer_move(50.0, PointerId::Mouse));
        assert_eq!(c.pointer_up(PointerId::Mouse, Instant::now()), None);
    }

    #[test]
    fn test_drag_right_past_threshold_goes_previous() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        c.pointer_down(100.0, PointerId::Mouse, now);
        c.pointer_move(250.0, PointerId::Mouse);
        assert_eq!(c.pointer_up(PointerId::Mouse, now), Some(DragRelease::Previous));
        assert_eq!(c.index(), 2);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_drag_left_past_threshold_goes_next() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        c.pointer_down(500.0, PointerId::Mouse, now);
        c.pointer_move(379.0, PointerId::Mouse);
        assert_eq!(c.pointer_up(PointerId::Mouse, now), Some(DragRelease::Next));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_small_drag_snaps_back() {
        let now = Instant::now();
        for dx in [-120.0, -50.0, 0.0, 50.0, 120.0] {
            let mut c = carousel(3, 1000.0);
            c.go_to(1, false, now);
            c.pointer_down(500.0, PointerId::Mouse, now);
            c.pointer_move(500.0 + dx, PointerId::Mouse);
            assert_eq!(c.pointer_up(PointerId::Mouse, now), Some(DragRelease::SnapBack), "dx={}", dx);
            assert_eq!(c.index(), 1);
        }
    }

    #[test]
    fn test_snap_back_animates_from_dragged_position() {
        let mut c = carousel(3, 1000.0);
        let start = Instant::now();
        c.pointer_down(500.0, PointerId::Mouse, start);
        c.pointer_move(560.0, PointerId::Mouse);
        c.pointer_up(PointerId::Mouse, start);

        // Eases from the dragged position back to the slide
        assert_eq!(c.offset_at(start), 60.0);
        assert!(c.is_animating(start));
        assert_eq!(c.offset_at(start + SLIDE_DURATION), 0.0);
    }

    #[test]
    fn test_threshold_tracks_live_width() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        c.resize(400.0, now);

        // 60px is under 12% of 1000 but over 12% of 400
        c.pointer_down(200.0, PointerId::Mouse, now);
        c.pointer_move(140.0, PointerId::Mouse);
        assert_eq!(c.pointer_up(PointerId::Mouse, now), Some(DragRelease::Next));
    }

    #[test]
    fn test_resize_repositions_instantly() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        c.go_to(2, true, now);
        c.resize(600.0, now);

        assert!(!c.is_animating(now));
        assert_eq!(c.offset_at(now), -1200.0);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_repeated_gestures_reenter_dragging() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        for _ in 0..3 {
            c.pointer_down(0.0, PointerId::Mouse, now);
            c.pointer_move(-500.0, PointerId::Mouse);
            c.pointer_up(PointerId::Mouse, now);
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_drag_follows_only_the_finger_that_started_it() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        let first = PointerId::Finger(1);
        let second = PointerId::Finger(2);

        c.pointer_down(500.0, first, now);
        // A second finger neither restarts, moves nor ends the drag
        c.pointer_down(100.0, second, now);
        assert!(!c.pointer_move(900.0, second));
        assert_eq!(c.pointer_up(second, now), None);
        assert!(c.is_dragging());

        assert!(c.pointer_move(300.0, first));
        assert_eq!(c.offset_at(now), -200.0);
        assert_eq!(c.pointer_up(first, now), Some(DragRelease::Next));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_mouse_release_does_not_end_touch_drag() {
        let mut c = carousel(3, 1000.0);
        let now = Instant::now();
        c.pointer_down(500.0, PointerId::Finger(7), now);
        assert_eq!(c.pointer_up(PointerId::Mouse, now), None);
        assert!(c.is_dragging());
    }
}
