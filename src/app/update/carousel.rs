// src/app/update/carousel.rs
//! Carousel button and indicator handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::{CarouselMessage, Message};
use crate::app::state::App;

impl App {
    /// Handle carousel messages
    pub fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        let Message::Carousel(id, msg) = message else {
            return None;
        };
        let now = Instant::now();

        // An unmounted carousel ignores its input
        let Some(carousel) = self.ui.carousel_mut(*id) else {
            return Some(Task::none());
        };
        let state = &mut carousel.state;

        match msg {
            CarouselMessage::Previous => state.prev(now),
            CarouselMessage::Next => state.next(now),
            CarouselMessage::GoTo(index) => {
                let index = isize::try_from(*index).unwrap_or(0);
                state.go_to(index, true, now);
            }
            CarouselMessage::PointerDown(x, pointer) => state.pointer_down(*x, *pointer, now),
        }
        tracing::trace!("Carousel '{}' {:?} -> index {}", id.tag(), msg, state.index());

        Some(Task::none())
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::*;
    use crate::app::update::test_support::{app_with, desktop_app};
    use crate::content::CarouselId;
    use crate::features::{MotionGate, Settings};

    fn index_of(app: &App, id: CarouselId) -> usize {
        app.ui.carousel(id).map(|c| c.state.index()).unwrap()
    }

    #[test]
    fn test_buttons_and_indicators() {
        let mut app = desktop_app();
        let id = CarouselId::Residential;

        let _ = app.update(Message::Carousel(id, CarouselMessage::Next));
        assert_eq!(index_of(&app, id), 1);
        let _ = app.update(Message::Carousel(id, CarouselMessage::Previous));
        let _ = app.update(Message::Carousel(id, CarouselMessage::Previous));
        assert_eq!(index_of(&app, id), 2);
        let _ = app.update(Message::Carousel(id, CarouselMessage::GoTo(0)));
        assert_eq!(index_of(&app, id), 0);

        // The other carousel is independent
        assert_eq!(index_of(&app, CarouselId::Commercial), 0);
    }

    #[test]
    fn test_disabled_carousel_is_not_mounted() {
        let mut settings = Settings::default();
        settings.features.commercial_carousel = false;
        let mut app = app_with(settings, MotionGate::OPEN, Size::new(1280.0, 800.0));

        assert!(app.ui.carousel(CarouselId::Commercial).is_none());
        let _ = app.update(Message::Carousel(CarouselId::Commercial, CarouselMessage::Next));
        assert_eq!(index_of(&app, CarouselId::Residential), 0);
    }
}
