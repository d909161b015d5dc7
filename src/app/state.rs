// src/app/state.rs
//! Application state definitions

use iced::Size;
use iced::time::Instant;
use std::path::{Path, PathBuf};

use crate::content::CarouselId;
use crate::features::scroll::back_to_top_visible;
use crate::features::storage::{self, KeyValueStore};
use crate::features::{
    CarouselState, DataLayer, DecorLayer, HeaderState, LoopHandle, MenuState, MiniCta,
    MotionGate, PageLayout, RevealTracker, ScrollThrottle, Settings, SmoothScroll,
};
use crate::i18n::{Language, Locale};
use crate::ui::animation::Fade;

/// Initial window size
pub const INITIAL_WINDOW_SIZE: Size = Size::new(1280.0, 860.0);

/// Main application state
pub struct App {
    /// Settings, storage, tracking and the motion gate
    pub core: CoreState,
    /// Page components and their animation state
    pub ui: UiState,
}

/// Process-wide services, resolved once at boot
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub motion: MotionGate,
    /// Durable client-side key/value storage
    pub store: Box<dyn KeyValueStore>,
    /// Append-only tracking queue
    pub data_layer: DataLayer,
    /// Root that slide image references are resolved against
    pub assets_root: PathBuf,
}

impl CoreState {
    pub fn new(settings: Settings, store: Box<dyn KeyValueStore>) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let motion = MotionGate::detect(&settings);
        let assets_root = settings.assets_root();

        Self {
            settings,
            locale,
            motion,
            store,
            data_layer: DataLayer::new(),
            assets_root,
        }
    }

    /// Boot with the settings file and the default store
    pub fn load() -> Self {
        Self::new(Settings::load(), storage::open_default())
    }
}

/// A mounted carousel with its resolved slide images
pub struct MountedCarousel {
    pub id: CarouselId,
    pub state: CarouselState,
    /// One entry per slide; `None` renders the placeholder panel
    pub images: Vec<Option<PathBuf>>,
}

impl MountedCarousel {
    /// Mount `id` at `width`; `None` if it has no slides
    pub fn mount(
        id: CarouselId,
        width: f32,
        gate: MotionGate,
        assets_root: &Path,
        now: Instant,
    ) -> Option<Self> {
        let slides = id.slides();
        let images = slides
            .iter()
            .map(|slide| {
                let path = assets_root.join(&slide.image_ref);
                if path.exists() {
                    Some(path)
                } else {
                    tracing::warn!("Slide image not found: {}", path.display());
                    None
                }
            })
            .collect();

        let state = CarouselState::new(slides, width, gate, now)?;
        tracing::debug!("Carousel '{}' mounted with {} slides", id.tag(), state.len());
        Some(Self { id, state, images })
    }
}

/// Page components
///
/// Optional components are `None` when switched off in settings, the
/// equivalent of a missing mount point.
pub struct UiState {
    pub viewport: Size,
    pub layout: PageLayout,
    /// Last reported scroll offset of the page
    pub scroll_y: f32,
    pub throttle: ScrollThrottle,
    pub smooth_scroll: Option<SmoothScroll>,

    pub header: HeaderState,
    pub header_fade: Fade,
    pub menu: MenuState,

    pub reveal: Option<RevealTracker>,
    pub mini_cta: Option<MiniCta>,
    pub mini_cta_fade: Fade,
    pub back_to_top: Option<Fade>,

    pub carousels: Vec<MountedCarousel>,
    pub decor: Option<DecorLayer>,
    /// Live while the decor frame loop runs
    pub decor_loop: Option<LoopHandle>,
}

impl UiState {
    pub fn new(core: &CoreState, viewport: Size, now: Instant) -> Self {
        let gate = core.motion;
        let toggles = core.settings.features;
        let layout = PageLayout::new(viewport);

        let carousels = CarouselId::ALL
            .into_iter()
            .filter(|id| match id {
                CarouselId::Residential => toggles.residential_carousel,
                CarouselId::Commercial => toggles.commercial_carousel,
            })
            .filter_map(|id| {
                MountedCarousel::mount(id, layout.content_width(), gate, &core.assets_root, now)
            })
            .collect();

        let (decor, decor_loop) = if toggles.decor_layer {
            let mut layer = DecorLayer::generate(&mut rand::rng(), viewport.width, gate);
            let handle = layer.start(now);
            (Some(layer), handle)
        } else {
            (None, None)
        };

        let reveal = toggles
            .reveal
            .then(|| RevealTracker::new(layout.reveal_slots(), gate, now));
        let mini_cta = toggles.mini_cta.then(|| MiniCta::init(core.store.as_ref()));
        let back_to_top = toggles
            .back_to_top
            .then(|| Fade::new(back_to_top_visible(0.0), gate));

        let mut ui = Self {
            viewport,
            layout,
            scroll_y: 0.0,
            throttle: ScrollThrottle::default(),
            smooth_scroll: None,
            header: HeaderState::new(0.0),
            header_fade: Fade::new(true, gate),
            menu: MenuState::default(),
            reveal,
            mini_cta,
            mini_cta_fade: Fade::new(false, gate),
            back_to_top,
            carousels,
            decor,
            decor_loop,
        };
        // Initial pass so the top of the page reveals without a scroll
        ui.throttle.record(0.0);
        ui
    }

    pub fn carousel_mut(&mut self, id: CarouselId) -> Option<&mut MountedCarousel> {
        self.carousels.iter_mut().find(|c| c.id == id)
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&MountedCarousel> {
        self.carousels.iter().find(|c| c.id == id)
    }

    /// True while the decor frame loop is live
    pub fn decor_running(&self) -> bool {
        self.decor_loop.as_ref().is_some_and(LoopHandle::is_active)
            && self.decor.as_ref().is_some_and(DecorLayer::is_running)
    }

    /// Whether any time-based transition is still in progress
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.smooth_scroll.is_some()
            || self.carousels.iter().any(|c| c.state.is_animating(now))
            || self.reveal.as_ref().is_some_and(|r| r.is_animating(now))
            || self.header_fade.is_animating()
            || self.mini_cta_fade.is_animating()
            || self.back_to_top.as_ref().is_some_and(Fade::is_animating)
    }

    /// Stop the decor loop; called on teardown
    pub fn stop_decor(&mut self) {
        if let Some(handle) = self.decor_loop.take() {
            handle.cancel();
        }
    }
}
