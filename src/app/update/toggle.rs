//! Toggle demo message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle the theme toggle demo
    pub fn handle_toggle(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ThemeToggled => {
                let on = self.ui.theme_toggle.toggle();
                tracing::info!("Toggle emitted: {}", on);

                // The emitted value drives the gallery's theme
                self.settings.dark_mode = on;
                if let Err(e) = self.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }

                Some(Task::none())
            }

            _ => None,
        }
    }
}
