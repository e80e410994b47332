//! Message update handlers - thin dispatcher delegating to submodules

mod like_button;
mod toggle;
mod viewer;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_window(&message) {
            return task;
        }
        if let Some(task) = self.handle_toggle(&message) {
            return task;
        }
        if let Some(task) = self.handle_like(&message) {
            return task;
        }
        if let Some(task) = self.handle_viewer(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
