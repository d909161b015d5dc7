// src/app/update/pointer.rs
//! Window-wide pointer stream: carousel drags and decor parallax

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle pointer moves and releases
    pub fn handle_pointer(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PointerMoved(position, pointer) => {
                for carousel in &mut self.ui.carousels {
                    carousel.state.pointer_move(position.x, *pointer);
                }
                if let Some(decor) = self.ui.decor.as_mut() {
                    decor.pointer_moved(*position, self.ui.viewport);
                }
                Some(Task::none())
            }

            Message::PointerReleased(pointer) => {
                let now = Instant::now();
                for carousel in &mut self.ui.carousels {
                    if let Some(release) = carousel.state.pointer_up(*pointer, now) {
                        tracing::debug!(
                            "Carousel '{}' drag released: {:?} (index {})",
                            carousel.id.tag(),
                            release,
                            carousel.state.index()
                        );
                    }
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
