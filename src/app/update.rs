//! Message update handlers - thin dispatcher delegating to submodules

mod carousel;
mod navigation;
mod pointer;
mod scroll;
mod tracking;
mod window;

use iced::Task;

pub use scroll::PAGE_SCROLL_ID;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_scroll(&message) {
            return task;
        }
        if let Some(task) = self.handle_pointer(&message) {
            return task;
        }
        if let Some(task) = self.handle_carousel(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_tracking(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
