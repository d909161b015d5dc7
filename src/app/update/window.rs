// src/app/update/window.rs
//! Window resize and close handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::PageLayout;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                let now = Instant::now();
                self.ui.viewport = *size;
                self.ui.layout = PageLayout::new(*size);
                // Desktop has no toggle to close it with
                if !self.ui.layout.is_mobile() {
                    self.ui.menu.close();
                }

                let width = self.ui.layout.content_width();
                for carousel in &mut self.ui.carousels {
                    carousel.state.resize(width, now);
                }
                if let Some(reveal) = self.ui.reveal.as_mut() {
                    reveal.relayout(self.ui.layout.reveal_slots());
                }
                // Re-check visibility against the new geometry
                self.ui.throttle.record(self.ui.scroll_y);
                Some(Task::none())
            }

            Message::RequestClose => {
                tracing::info!(
                    "Close requested, stopping page loops ({} events tracked)",
                    self.core.data_layer.len()
                );
                tracing::debug!(events = ?self.core.data_layer.snapshot(), "Session tracking");
                self.ui.stop_decor();
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
