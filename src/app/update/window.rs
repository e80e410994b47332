//! Animation frame tick handler

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle animation frame ticks
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                // Advance springs and keyframe tracks; finished transient
                // effects (rings, particles) remove themselves here
                self.ui.tick(now);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
