// src/app/update/navigation.rs
//! Anchor navigation, back-to-top and mobile menu handlers

use iced::Task;
use iced::time::Instant;

use super::scroll::scroll_page_to;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::SmoothScroll;

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::NavigateTo(section) => {
                self.ui.menu.close();
                let target = self.ui.layout.anchor_offset(*section);
                tracing::debug!("Navigating to {} (offset {})", section.anchor(), target);
                Some(self.start_scroll(target))
            }

            Message::ScrollHome | Message::BackToTop => {
                self.ui.menu.close();
                Some(self.start_scroll(0.0))
            }

            Message::ToggleMenu => {
                let open = self.ui.menu.toggle();
                tracing::debug!("Menu toggled, expanded={}", self.ui.menu.aria_expanded());
                if open {
                    // Keep the toggle reachable while the menu is open
                    self.ui.header_fade.set_shown(true);
                }
                Some(Task::none())
            }

            Message::MenuBackdropPressed => {
                self.ui.menu.click_outside(false);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Scroll to `target`, animated unless the motion gate is set
    fn start_scroll(&mut self, target: f32) -> Task<Message> {
        let now = Instant::now();
        let scroll = SmoothScroll::new(self.ui.scroll_y, target, now, self.core.motion);
        if scroll.is_finished(now) {
            self.ui.smooth_scroll = None;
            self.ui.scroll_y = target;
            self.ui.throttle.record(target);
            scroll_page_to(target)
        } else {
            self.ui.smooth_scroll = Some(scroll);
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::*;
    use crate::app::update::test_support::{app_with, desktop_app};
    use crate::features::{MotionGate, Section, Settings};

    #[test]
    fn test_anchor_link_closes_menu_and_animates() {
        let mut app = desktop_app();
        let _ = app.update(Message::ToggleMenu);
        assert!(app.ui.menu.is_open());

        let _ = app.update(Message::NavigateTo(Section::Process));
        assert!(!app.ui.menu.is_open());
        let scroll = app.ui.smooth_scroll.expect("animated scroll");
        assert_eq!(scroll.target(), app.ui.layout.anchor_offset(Section::Process));
    }

    #[test]
    fn test_reduced_motion_scrolls_instantly() {
        let mut app = app_with(Settings::default(), MotionGate::REDUCED, Size::new(1280.0, 800.0));
        let _ = app.update(Message::NavigateTo(Section::Contact));
        assert!(app.ui.smooth_scroll.is_none());
        assert_eq!(app.ui.scroll_y, app.ui.layout.anchor_offset(Section::Contact));
    }

    #[test]
    fn test_back_to_top_targets_zero() {
        let mut app = desktop_app();
        app.ui.scroll_y = 2400.0;
        let _ = app.update(Message::BackToTop);
        assert_eq!(app.ui.smooth_scroll.map(|s| s.target()), Some(0.0));
    }

    #[test]
    fn test_backdrop_click_closes_menu() {
        let mut app = desktop_app();
        let _ = app.update(Message::ToggleMenu);
        let _ = app.update(Message::MenuBackdropPressed);
        assert!(!app.ui.menu.is_open());
        assert_eq!(app.ui.menu.aria_expanded(), "false");
    }
}
