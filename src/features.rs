//! Feature modules - page behaviour separated from UI
//!
//! Each feature module holds the state and rules of one page component.
//! Features take the current `Instant` instead of reading the clock and
//! never depend on UI components.

pub mod carousel;
pub mod decor;
pub mod header;
pub mod layout;
pub mod menu;
pub mod mini_cta;
pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod settings;
pub mod storage;
pub mod tracking;
pub mod tween;

pub use carousel::{CarouselState, DragRelease, PointerId, SlideItem};
pub use decor::{DecorLayer, LoopHandle};
pub use header::HeaderState;
pub use layout::{PageLayout, RevealTarget, Section};
pub use menu::MenuState;
pub use mini_cta::MiniCta;
pub use motion::MotionGate;
pub use reveal::RevealTracker;
pub use scroll::{ScrollThrottle, SmoothScroll};
pub use settings::Settings;
pub use storage::KeyValueStore;
pub use tracking::DataLayer;

/// Platform directories for settings and stored state
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "caus", "CausMarcenaria")
}
