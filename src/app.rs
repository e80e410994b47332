//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Load settings first so the initial theme and toggle state agree
        let settings = crate::features::Settings::load();
        let ui = UiState::new(&settings);

        (Self { settings, ui }, Task::none())
    }

    /// Application theme, driven by the toggle demo's emitted value
    pub fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "Motionlab - Animated Widgets".to_string()
    }

    /// Subscription for animation frames (~60fps while anything animates)
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let needs_frames = subscription_logic::needs_animation_subscription(
            self.ui.has_active_animations(),
            self.settings.power_saving_mode,
        );

        if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(has_animations: bool, power_saving: bool) -> bool {
        has_animations && !power_saving
    }
}
