//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::Task;
use iced::Theme;
use iced::time::Instant;

use crate::features::PointerId;

pub use message::{CarouselMessage, Message};
pub use state::{App, CoreState, MountedCarousel, UiState};
pub use update::PAGE_SCROLL_ID;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        Self::with_core(CoreState::load())
    }

    /// Build the app around already resolved services and open the window
    pub fn with_core(core: CoreState) -> (Self, Task<Message>) {
        let ui = UiState::new(&core, state::INITIAL_WINDOW_SIZE, Instant::now());
        tracing::info!(
            "Page mounted: {} carousel(s), decor={}, reveal={}, mini_cta={}, back_to_top={}",
            ui.carousels.len(),
            ui.decor.is_some(),
            ui.reveal.is_some(),
            ui.mini_cta.is_some(),
            ui.back_to_top.is_some()
        );

        let app = Self { core, ui };

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: state::INITIAL_WINDOW_SIZE,
            min_size: Some(iced::Size::new(360.0, 560.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "caus-showcase".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let locale = self.core.locale;
        format!(
            "{} - {}",
            locale.get(crate::i18n::Key::AppName),
            locale.get(crate::i18n::Key::AppTagline)
        )
    }

    /// Subscriptions for frames, pointer input, resize and close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let now = Instant::now();

        // 1. Frames while anything moves
        let animation_sub = if subscription_logic::needs_frame_subscription(
            self.ui.decor_running(),
            self.ui.has_active_animations(now),
            self.ui.throttle.is_scheduled(),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Window-wide pointer stream (carousel drags, decor parallax)
        let pointer_sub = if subscription_logic::needs_pointer_subscription(
            self.ui.decor_running(),
            !self.ui.carousels.is_empty(),
        ) {
            iced::event::listen().filter_map(|event| match event {
                iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                    Some(Message::PointerMoved(position, PointerId::Mouse))
                }
                iced::Event::Mouse(iced::mouse::Event::ButtonReleased(
                    iced::mouse::Button::Left,
                )) => Some(Message::PointerReleased(PointerId::Mouse)),
                iced::Event::Touch(iced::touch::Event::FingerMoved { id, position }) => {
                    Some(Message::PointerMoved(position, PointerId::Finger(id.0)))
                }
                iced::Event::Touch(
                    iced::touch::Event::FingerLifted { id, .. }
                    | iced::touch::Event::FingerLost { id, .. },
                ) => Some(Message::PointerReleased(PointerId::Finger(id.0))),
                _ => None,
            })
        } else {
            iced::Subscription::none()
        };

        // 3. Window events
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([animation_sub, pointer_sub, resize_sub, close_request_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are needed while the decor loop is live, a transition runs or
    /// a scroll pass waits for the next frame
    pub fn needs_frame_subscription(
        decor_running: bool,
        transitions_active: bool,
        scroll_pass_pending: bool,
    ) -> bool {
        decor_running || transitions_active || scroll_pass_pending
    }

    pub fn needs_pointer_subscription(decor_running: bool, has_carousels: bool) -> bool {
        decor_running || has_carousels
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod frame_subscription {
        use super::*;

        #[test]
        fn idle_page_requests_no_frames() {
            assert!(!needs_frame_subscription(false, false, false));
        }

        #[test]
        fn decor_loop_keeps_frames() {
            assert!(needs_frame_subscription(true, false, false));
        }

        #[test]
        fn reduced_motion_page_only_ticks_for_scroll_passes() {
            // Gate set: no decor loop, no transitions
            assert!(!needs_frame_subscription(false, false, false));
            assert!(needs_frame_subscription(false, false, true));
        }

        #[test]
        fn transitions_request_frames() {
            assert!(needs_frame_subscription(false, true, false));
        }
    }

    mod pointer_subscription {
        use super::*;

        #[test]
        fn needed_for_carousels_or_decor() {
            assert!(needs_pointer_subscription(false, true));
            assert!(needs_pointer_subscription(true, false));
            assert!(!needs_pointer_subscription(false, false));
        }
    }
}
