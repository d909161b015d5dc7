//! Floating mini call-to-action with a persisted dismiss flag

use super::storage::KeyValueStore;
use super::tracking::{self, EventSink};

/// Storage key of the dismiss flag
pub const MINI_CTA_KEY: &str = "caus_mini_cta_closed";
const DISMISSED_VALUE: &str = "1";

/// The CTA shows past this offset
pub const SHOW_AFTER: f32 = 420.0;

/// Action tracked when the CTA is closed
pub const CLOSE_ACTION: &str = "mini_cta_close";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MiniCta {
    dismissed: bool,
    visible: bool,
}

impl MiniCta {
    /// Read the flag once; a dismissed CTA stays hidden for this session
    pub fn init(store: &dyn KeyValueStore) -> Self {
        let dismissed = store.get(MINI_CTA_KEY).as_deref() == Some(DISMISSED_VALUE);
        if dismissed {
            tracing::debug!("Mini CTA previously dismissed");
        }
        Self {
            dismissed,
            visible: false,
        }
    }

    pub fn on_scroll(&mut self, y: f32) {
        self.visible = !self.dismissed && y > SHOW_AFTER;
    }

    /// Hide, persist the flag and track the close
    ///
    /// A storage failure is logged; the CTA still hides for this session.
    pub fn dismiss(&mut self, store: &mut dyn KeyValueStore, sink: &dyn EventSink) {
        self.dismissed = true;
        self.visible = false;
        if let Err(e) = store.set(MINI_CTA_KEY, DISMISSED_VALUE) {
            tracing::warn!("Failed to persist mini CTA dismissal: {:#}", e);
        }
        tracking::track(sink, Some(CLOSE_ACTION));
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}
