//! Floating tools background
//!
//! A fixed number of tool glyphs scattered over (and slightly past) the
//! viewport, each with its own random motion parameters. While the motion
//! gate is clear, every frame recomputes one translate+rotate per glyph from
//! elapsed time and the pointer position; nothing else about the glyphs
//! changes after placement.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use iced::{Point, Size, Vector};
use rand::Rng;

use super::MotionGate;
use super::layout::MOBILE_BREAKPOINT;

/// Tool glyph catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolGlyph {
    Hammer,
    Saw,
    Ruler,
    Drill,
    Square,
}

impl ToolGlyph {
    pub const ALL: [ToolGlyph; 5] = [
        ToolGlyph::Hammer,
        ToolGlyph::Saw,
        ToolGlyph::Ruler,
        ToolGlyph::Drill,
        ToolGlyph::Square,
    ];
}

/// Element count and size range for a viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorProfile {
    pub count: usize,
    pub min_size: f32,
    pub max_size: f32,
}

impl DecorProfile {
    pub const MOBILE: Self = Self {
        count: 10,
        min_size: 44.0,
        max_size: 62.0,
    };
    pub const DESKTOP: Self = Self {
        count: 18,
        min_size: 48.0,
        max_size: 74.0,
    };

    /// Fewer glyphs on narrow viewports
    pub fn for_width(viewport_width: f32) -> Self {
        if viewport_width <= MOBILE_BREAKPOINT {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }
}

/// Per-glyph motion parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Oscillation speed
    pub speed: f32,
    /// Horizontal drift amplitude (px)
    pub drift_x: f32,
    /// Vertical drift amplitude (px)
    pub drift_y: f32,
    /// Base rotation (degrees)
    pub rotation: f32,
    /// Bob amplitude (px)
    pub bob: f32,
}

/// One decorative glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingIcon {
    pub glyph: ToolGlyph,
    /// Position in viewport units: x in vw, y in vh
    pub position: Point,
    pub size: f32,
    pub base_opacity: f32,
    /// Drawn with the lighter tint
    pub highlighted: bool,
    pub motion: MotionParams,
}

impl FloatingIcon {
    /// Top-left corner in pixels for the given viewport
    pub fn origin(&self, viewport: Size) -> Point {
        Point::new(
            self.position.x / 100.0 * viewport.width,
            self.position.y / 100.0 * viewport.height,
        )
    }

    /// Transform for elapsed time `t` (seconds), element index and pointer
    pub fn transform_at(&self, t: f32, index: usize, pointer: PointerSignal) -> IconTransform {
        let m = &self.motion;
        let wobble = (t * (0.7 + m.speed) + index as f32).sin() * m.bob;
        let depth = 7.0 + m.speed * 12.0;
        let parallax_x = pointer.x * depth;
        let parallax_y = pointer.y * depth;

        IconTransform {
            translate: Vector::new(
                m.drift_x * (t * m.speed).sin() + wobble + parallax_x,
                m.drift_y * (t * m.speed).cos() + wobble + parallax_y,
            ),
            rotation_deg: m.rotation + wobble * 0.5,
        }
    }
}

/// Composed 2D transform applied when drawing a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconTransform {
    pub translate: Vector,
    pub rotation_deg: f32,
}

impl Default for IconTransform {
    fn default() -> Self {
        Self {
            translate: Vector::new(0.0, 0.0),
            rotation_deg: 0.0,
        }
    }
}

/// Pointer position normalised to [-1, 1] on both axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    pub fn from_position(position: Point, viewport: Size) -> Self {
        let normalise = |v: f32, extent: f32| {
            if extent <= 0.0 {
                0.0
            } else {
                ((v / extent) * 2.0 - 1.0).clamp(-1.0, 1.0)
            }
        };
        Self {
            x: normalise(position.x, viewport.width),
            y: normalise(position.y, viewport.height),
        }
    }
}

/// Lifetime token for the frame loop
///
/// The loop runs while a handle is alive and not cancelled. Dropping the
/// handle cancels it.
#[derive(Debug)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if self.running.swap(false, Ordering::AcqRel) {
            tracing::debug!("Decor frame loop cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The decorative layer: placed glyphs, their current transforms and the
/// pointer signal driving the parallax
#[derive(Debug)]
pub struct DecorLayer {
    icons: Vec<FloatingIcon>,
    transforms: Vec<IconTransform>,
    pointer: PointerSignal,
    gate: MotionGate,
    started_at: Option<Instant>,
    running: Arc<AtomicBool>,
    frames: u64,
}

impl DecorLayer {
    /// Place glyphs for a viewport width using `rng`
    pub fn generate<R: Rng>(rng: &mut R, viewport_width: f32, gate: MotionGate) -> Self {
        let profile = DecorProfile::for_width(viewport_width);

        let icons: Vec<FloatingIcon> = (0..profile.count)
            .map(|_| {
                let glyph = ToolGlyph::ALL[rng.random_range(0..ToolGlyph::ALL.len())];
                let size = rng.random_range(profile.min_size..profile.max_size);
                let position = Point::new(rng.random_range(-5.0..105.0), rng.random_range(-10.0..110.0));
                let base_opacity = rng.random_range(0.28..0.85);
                let highlighted = rng.random::<f32>() > 0.6;
                let motion = MotionParams {
                    speed: rng.random_range(0.25..0.75),
                    drift_x: rng.random_range(-18.0..18.0),
                    drift_y: rng.random_range(-20.0..20.0),
                    rotation: rng.random_range(-30.0..30.0),
                    bob: rng.random_range(4.0..10.0),
                };
                FloatingIcon {
                    glyph,
                    position,
                    size,
                    base_opacity,
                    highlighted,
                    motion,
                }
            })
            .collect();

        tracing::debug!(
            "Decor layer placed {} glyphs (viewport width {})",
            icons.len(),
            viewport_width
        );

        Self {
            transforms: vec![IconTransform::default(); icons.len()],
            icons,
            pointer: PointerSignal::default(),
            gate,
            started_at: None,
            running: Arc::new(AtomicBool::new(false)),
            frames: 0,
        }
    }

    /// Start the frame loop
    ///
    /// Returns `None` when the motion gate is set: glyphs stay where they
    /// were placed and no transform is ever updated.
    pub fn start(&mut self, now: Instant) -> Option<LoopHandle> {
        if self.gate.is_set() {
            tracing::info!("Reduced motion: decor layer stays static");
            return None;
        }
        self.started_at = Some(now);
        self.running = Arc::new(AtomicBool::new(true));
        Some(LoopHandle {
            running: Arc::clone(&self.running),
        })
    }

    pub fn is_running(&self) -> bool {
        self.gate.allows_animation() && self.running.load(Ordering::Acquire)
    }

    /// Record a pointer move
    pub fn pointer_moved(&mut self, position: Point, viewport: Size) {
        if self.gate.is_set() {
            return;
        }
        self.pointer = PointerSignal::from_position(position, viewport);
    }

    /// Recompute every transform for the frame at `now`
    ///
    /// Returns false (and touches nothing) when the loop is not running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(started_at) = self.started_at else {
            return false;
        };
        let t = now.saturating_duration_since(started_at).as_secs_f32();
        let pointer = self.pointer();

        for (index, (icon, transform)) in self.icons.iter().zip(self.transforms.iter_mut()).enumerate() {
            *transform = icon.transform_at(t, index, pointer);
        }
        self.frames += 1;
        true
    }

    pub fn icons(&self) -> &[FloatingIcon] {
        &self.icons
    }

    pub fn transforms(&self) -> &[IconTransform] {
        &self.transforms
    }

    pub fn pointer(&self) -> PointerSignal {
        self.pointer
    }

    /// Number of frames that updated transforms
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn layer(width: f32, gate: MotionGate) -> DecorLayer {
        let mut rng = StdRng::seed_from_u64(7);
        DecorLayer::generate(&mut rng, width, gate)
    }

    #[test]
    fn test_count_follows_breakpoint() {
        assert_eq!(layer(375.0, MotionGate::OPEN).icons().len(), 10);
        assert_eq!(layer(720.0, MotionGate::OPEN).icons().len(), 10);
        assert_eq!(layer(721.0, MotionGate::OPEN).icons().len(), 18);
        assert_eq!(layer(1440.0, MotionGate::OPEN).icons().len(), 18);
    }

    #[test]
    fn test_sampled_ranges() {
        for (width, profile) in [(400.0, DecorProfile::MOBILE), (1280.0, DecorProfile::DESKTOP)] {
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let layer = DecorLayer::generate(&mut rng, width, MotionGate::OPEN);
                for icon in layer.icons() {
                    assert!(icon.size >= profile.min_size && icon.size < profile.max_size);
                    assert!((-5.0..105.0).contains(&icon.position.x));
                    assert!((-10.0..110.0).contains(&icon.position.y));
                    assert!((0.28..0.85).contains(&icon.base_opacity));
                    let m = icon.motion;
                    assert!((0.25..0.75).contains(&m.speed));
                    assert!((-18.0..18.0).contains(&m.drift_x));
                    assert!((-20.0..20.0).contains(&m.drift_y));
                    assert!((-30.0..30.0).contains(&m.rotation));
                    assert!((4.0..10.0).contains(&m.bob));
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = layer(1280.0, MotionGate::OPEN);
        let b = layer(1280.0, MotionGate::OPEN);
        assert_eq!(a.icons(), b.icons());
    }

    #[test]
    fn test_transform_formula() {
        let icon = FloatingIcon {
            glyph: ToolGlyph::Saw,
            position: Point::ORIGIN,
            size: 50.0,
            base_opacity: 0.5,
            highlighted: false,
            motion: MotionParams {
                speed: 0.5,
                drift_x: 10.0,
                drift_y: -12.0,
                rotation: 20.0,
                bob: 6.0,
            },
        };
        let pointer = PointerSignal { x: 0.5, y: -1.0 };
        let t = 2.0_f32;
        let index = 3;

        let wobble = (t * 1.2 + 3.0).sin() * 6.0;
        let depth = 7.0 + 0.5 * 12.0;
        let expected_x = 10.0 * (t * 0.5).sin() + wobble + 0.5 * depth;
        let expected_y = -12.0 * (t * 0.5).cos() + wobble - depth;

        let tr = icon.transform_at(t, index, pointer);
        assert!((tr.translate.x - expected_x).abs() < 1e-4);
        assert!((tr.translate.y - expected_y).abs() < 1e-4);
        assert!((tr.rotation_deg - (20.0 + wobble * 0.5)).abs() < 1e-4);
    }

    #[test]
    fn test_phase_offset_desynchronises_elements() {
        let mut layer = layer(1280.0, MotionGate::OPEN);
        let icon = layer.icons()[0];
        layer.icons = vec![icon, icon];
        layer.transforms = vec![IconTransform::default(); 2];

        let start = Instant::now();
        let _handle = layer.start(start).unwrap();
        assert!(layer.tick(start + Duration::from_millis(500)));
        assert_ne!(layer.transforms()[0], layer.transforms()[1]);
    }

    #[test]
    fn test_pointer_normalisation() {
        let viewport = Size::new(1000.0, 500.0);
        let centre = PointerSignal::from_position(Point::new(500.0, 250.0), viewport);
        assert_eq!(centre, PointerSignal { x: 0.0, y: 0.0 });

        let corner = PointerSignal::from_position(Point::new(0.0, 500.0), viewport);
        assert_eq!(corner, PointerSignal { x: -1.0, y: 1.0 });

        let outside = PointerSignal::from_position(Point::new(2000.0, -10.0), viewport);
        assert_eq!(outside, PointerSignal { x: 1.0, y: -1.0 });

        let degenerate = PointerSignal::from_position(Point::new(3.0, 3.0), Size::ZERO);
        assert_eq!(degenerate, PointerSignal::default());
    }

    #[test]
    fn test_reduced_motion_never_updates() {
        let mut layer = layer(1280.0, MotionGate::REDUCED);
        let placed = layer.icons().to_vec();
        let now = Instant::now();

        assert!(layer.start(now).is_none());
        layer.pointer_moved(Point::new(10.0, 10.0), Size::new(100.0, 100.0));
        for i in 0..30 {
            assert!(!layer.tick(now + Duration::from_millis(16 * i)));
        }

        assert_eq!(layer.frames(), 0);
        assert_eq!(layer.icons(), placed.as_slice());
        assert!(layer.transforms().iter().all(|t| *t == IconTransform::default()));
        assert_eq!(layer.pointer(), PointerSignal::default());
    }

    #[test]
    fn test_cancel_stops_loop() {
        let mut layer = layer(1280.0, MotionGate::OPEN);
        let now = Instant::now();
        let handle = layer.start(now).unwrap();

        assert!(layer.is_running());
        assert!(layer.tick(now + Duration::from_millis(16)));

        handle.cancel();
        assert!(!handle.is_active());
        assert!(!layer.is_running());
        assert!(!layer.tick(now + Duration::from_millis(32)));
        assert_eq!(layer.frames(), 1);
    }

    #[test]
    fn test_dropping_handle_stops_loop() {
        let mut layer = layer(1280.0, MotionGate::OPEN);
        let now = Instant::now();
        {
            let _handle = layer.start(now).unwrap();
            assert!(layer.is_running());
        }
        assert!(!layer.is_running());
        assert!(!layer.tick(now));
    }

    #[test]
    fn test_tick_uses_pointer_signal() {
        let mut layer = layer(1280.0, MotionGate::OPEN);
        let now = Instant::now();
        let _handle = layer.start(now).unwrap();

        layer.tick(now);
        let centred = layer.transforms().to_vec();

        layer.pointer_moved(Point::new(1280.0, 800.0), Size::new(1280.0, 800.0));
        layer.tick(now);
        let shifted = layer.transforms();

        for (a, b) in centred.iter().zip(shifted) {
            assert!(b.translate.x > a.translate.x);
            assert!(b.translate.y > a.translate.y);
            assert_eq!(a.rotation_deg, b.rotation_deg);
        }
    }
}
