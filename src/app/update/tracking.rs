// src/app/update/tracking.rs
//! Tracked calls to action and the mini CTA close control

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::tracking;

impl App {
    pub fn handle_tracking(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Track(action) => {
                tracking::track(&self.core.data_layer, Some(*action));
                Some(Task::none())
            }

            Message::DismissMiniCta => {
                // A fading card can be pressed again; track the close once
                if let Some(cta) = self.ui.mini_cta.as_mut().filter(|cta| !cta.is_dismissed()) {
                    cta.dismiss(self.core.store.as_mut(), &self.core.data_layer);
                    self.ui.mini_cta_fade.set_shown(false);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use iced::time::Instant;

    use super::*;
    use crate::app::update::test_support::desktop_app;
    use crate::app::{CoreState, UiState};
    use crate::features::mini_cta::MINI_CTA_KEY;
    use crate::features::storage::FileStore;
    use crate::features::tracking::TRACK_EVENT;
    use crate::features::{MotionGate, Settings};

    #[test]
    fn test_track_pushes_event() {
        let mut app = desktop_app();
        let _ = app.update(Message::Track("whatsapp_hero"));
        let events = app.core.data_layer.snapshot();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, TRACK_EVENT);
        assert_eq!(events[0].action, "whatsapp_hero");
    }

    #[test]
    fn test_repeated_close_tracks_once() {
        let mut app = desktop_app();
        let _ = app.update(Message::DismissMiniCta);
        let _ = app.update(Message::DismissMiniCta);

        assert!(app.ui.mini_cta.as_ref().unwrap().is_dismissed());
        assert_eq!(app.core.data_layer.len(), 1);
    }

    #[test]
    fn test_dismissed_cta_stays_hidden_after_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let boot = || {
            let mut core = CoreState::new(Settings::default(), Box::new(FileStore::open(&path)));
            core.motion = MotionGate::REDUCED;
            let ui = UiState::new(&core, Size::new(1280.0, 800.0), Instant::now());
            App { core, ui }
        };

        let mut app = boot();
        let _ = app.update(Message::PageScrolled(900.0));
        let _ = app.update(Message::AnimationTick(Instant::now()));
        assert!(app.ui.mini_cta_fade.is_shown());

        let _ = app.update(Message::DismissMiniCta);
        assert!(!app.ui.mini_cta_fade.is_shown());
        assert_eq!(app.core.store.get(MINI_CTA_KEY).as_deref(), Some("1"));
        assert_eq!(app.core.data_layer.snapshot()[0].action, "mini_cta_close");

        let mut restarted = boot();
        let _ = restarted.update(Message::PageScrolled(900.0));
        let _ = restarted.update(Message::AnimationTick(Instant::now()));
        assert!(!restarted.ui.mini_cta_fade.is_shown());
    }
}
