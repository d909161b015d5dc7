//! Click tracking
//!
//! Tracked controls push a `{event, action}` record into an append-only
//! data layer and emit a diagnostic log line. Tracking is best effort and
//! never blocks the action that triggered it.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Event tag for every tracked interaction
pub const TRACK_EVENT: &str = "caus_track";

/// Action name used when a control carries none
pub const DEFAULT_ACTION: &str = "click";

/// One tracked interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEvent {
    pub event: String,
    pub action: String,
}

impl TrackEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            event: TRACK_EVENT.to_string(),
            action: action.into(),
        }
    }
}

/// Destination for tracked events
pub trait EventSink {
    fn push(&self, event: TrackEvent);
}

/// Append-only event queue
///
/// Clones share the same queue, so an analytics collaborator can hold one
/// and read what the page pushed.
#[derive(Debug, Clone, Default)]
pub struct DataLayer {
    events: Arc<Mutex<Vec<TrackEvent>>>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything pushed so far, oldest first
    pub fn snapshot(&self) -> Vec<TrackEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }
}

impl EventSink for DataLayer {
    fn push(&self, event: TrackEvent) {
        self.events.lock().push(event);
    }
}

/// Track an interaction by action name
pub fn track(sink: &dyn EventSink, action: Option<&str>) {
    let action = action.filter(|a| !a.is_empty()).unwrap_or(DEFAULT_ACTION);
    let event = TrackEvent::new(action);

    match serde_json::to_string(&event) {
        Ok(payload) => tracing::info!(%payload, "[TRACK] {}", action),
        Err(_) => tracing::info!("[TRACK] {}", action),
    }

    sink.push(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_appends_in_order() {
        let layer = DataLayer::new();
        track(&layer, Some("whatsapp_hero"));
        track(&layer, Some("mini_cta_close"));

        let events = layer.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], TrackEvent::new("whatsapp_hero"));
        assert_eq!(events[1].action, "mini_cta_close");
        assert!(events.iter().all(|e| e.event == TRACK_EVENT));
    }

    #[test]
    fn test_missing_action_defaults_to_click() {
        let layer = DataLayer::new();
        track(&layer, None);
        track(&layer, Some(""));

        assert!(layer.snapshot().iter().all(|e| e.action == DEFAULT_ACTION));
    }

    #[test]
    fn test_clones_share_queue() {
        let layer = DataLayer::new();
        let observer = layer.clone();
        track(&layer, Some("x"));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn test_payload_shape() {
        let json = serde_json::to_value(TrackEvent::new("orcamento")).unwrap();
        assert_eq!(json["event"], "caus_track");
        assert_eq!(json["action"], "orcamento");
    }
}
