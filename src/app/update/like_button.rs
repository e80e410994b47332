//! Like demo message handlers
//!
//! Press/release messages drive the tactile scale feedback; a release over
//! the button also resolves the click and flips the liked state.

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle the like button demo
    pub fn handle_like(&mut self, message: &Message) -> Option<Task<Message>> {
        match *message {
            Message::LikePressed(index) => {
                if let Some(button) = self.ui.like_buttons.get_mut(index) {
                    button.press();
                }
                Some(Task::none())
            }

            Message::LikeReleased(index) => {
                if let Some(button) = self.ui.like_buttons.get_mut(index) {
                    button.release();
                    // A release over the button completes the click
                    return Some(Task::done(Message::LikeToggled(index)));
                }
                Some(Task::none())
            }

            Message::LikePointerExited(index) => {
                // Leaving the button cancels the press without toggling
                if let Some(button) = self.ui.like_buttons.get_mut(index) {
                    button.release();
                }
                Some(Task::none())
            }

            Message::LikeToggled(index) => {
                if let Some(button) = self.ui.like_buttons.get_mut(index) {
                    let event = button.toggle(Instant::now());
                    tracing::info!(
                        "Like emitted: variant={} liked={}",
                        event.variant.label(),
                        event.liked
                    );
                    self.ui.last_like = Some(event);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
