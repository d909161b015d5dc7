// src/app/update/scroll.rs
//! Page scroll and frame handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::scroll::back_to_top_visible;

/// Scrollable id of the landing page
pub const PAGE_SCROLL_ID: &str = "landing_scroll";

/// Scroll the page to an absolute offset
pub fn scroll_page_to(y: f32) -> Task<Message> {
    iced::widget::operation::scroll_to(
        iced::widget::Id::new(PAGE_SCROLL_ID),
        iced::widget::scrollable::AbsoluteOffset {
            x: Some(0.0),
            y: Some(y),
        },
    )
}

impl App {
    /// Handle scroll events and animation frames
    pub fn handle_scroll(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PageScrolled(y) => {
                self.ui.scroll_y = *y;
                // The pass runs on the next frame
                self.ui.throttle.record(*y);
                Some(Task::none())
            }

            Message::AnimationTick(now) => Some(self.on_frame(*now)),

            _ => None,
        }
    }

    /// One frame: decor transforms, smooth scroll step, the pending scroll
    /// pass and fades
    fn on_frame(&mut self, now: Instant) -> Task<Message> {
        if self.ui.decor_running() {
            if let Some(decor) = self.ui.decor.as_mut() {
                decor.tick(now);
            }
        }

        let scroll_task = self.step_smooth_scroll(now);

        if let Some(y) = self.ui.throttle.take() {
            self.apply_scroll_pass(y, now);
        }

        self.ui.header_fade.tick(now);
        self.ui.mini_cta_fade.tick(now);
        if let Some(fade) = self.ui.back_to_top.as_mut() {
            fade.tick(now);
        }

        scroll_task
    }

    fn step_smooth_scroll(&mut self, now: Instant) -> Task<Message> {
        let Some(scroll) = self.ui.smooth_scroll else {
            return Task::none();
        };
        let y = scroll.offset_at(now);
        if scroll.is_finished(now) {
            self.ui.smooth_scroll = None;
        }
        self.ui.scroll_y = y;
        self.ui.throttle.record(y);
        scroll_page_to(y)
    }

    /// Header, floating controls and reveal, all from one offset
    pub(crate) fn apply_scroll_pass(&mut self, y: f32, now: Instant) {
        self.ui.header.update(y);
        // An open menu keeps its toggle on screen
        let show_header = !self.ui.header.is_hidden() || self.ui.menu.is_open();
        self.ui.header_fade.set_shown(show_header);

        if let Some(fade) = self.ui.back_to_top.as_mut() {
            fade.set_shown(back_to_top_visible(y));
        }

        if let Some(cta) = self.ui.mini_cta.as_mut() {
            cta.on_scroll(y);
            self.ui.mini_cta_fade.set_shown(cta.is_visible());
        }

        if let Some(reveal) = self.ui.reveal.as_mut() {
            reveal.observe(y, self.ui.viewport.height, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::app::update::test_support::desktop_app;
    use crate::features::RevealTarget;

    #[test]
    fn test_scroll_events_coalesce_into_one_pass() {
        let mut app = desktop_app();
        let now = Instant::now();
        // Drain the initial pass
        let _ = app.update(Message::AnimationTick(now));
        assert!(!app.ui.throttle.is_scheduled());

        let _ = app.update(Message::PageScrolled(200.0));
        let _ = app.update(Message::PageScrolled(500.0));
        let _ = app.update(Message::PageScrolled(700.0));
        assert!(app.ui.throttle.is_scheduled());
        assert!(!app.ui.header.is_scrolled(), "nothing applied before the frame");

        let _ = app.update(Message::AnimationTick(now + Duration::from_millis(16)));
        assert!(!app.ui.throttle.is_scheduled());
        assert!(app.ui.header.is_scrolled());
        assert!(app.ui.header.is_hidden());
        assert!(app.ui.back_to_top.as_ref().is_some_and(|f| f.is_shown()));
        assert!(app.ui.mini_cta.is_some_and(|c| c.is_visible()));
    }

    #[test]
    fn test_initial_pass_reveals_nothing_below_the_fold() {
        let mut app = desktop_app();
        let _ = app.update(Message::AnimationTick(Instant::now()));
        let reveal = app.ui.reveal.as_ref().unwrap();
        assert!(!reveal.is_revealed(RevealTarget::ContactCard));
    }

    #[test]
    fn test_scrolling_to_contact_reveals_it() {
        let mut app = desktop_app();
        let contact = app.ui.layout.anchor_offset(crate::features::Section::Contact);
        let _ = app.update(Message::PageScrolled(contact));
        let _ = app.update(Message::AnimationTick(Instant::now()));
        let reveal = app.ui.reveal.as_ref().unwrap();
        assert!(reveal.is_revealed(RevealTarget::ContactCard));
    }
}
