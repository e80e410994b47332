//! Application state definitions

use iced::time::Instant;

use crate::app::message::DemoId;
use crate::features::Settings;
use crate::ui::widgets::{CodeViewer, LikeButton, LikeEvent, LikeVariant, ToggleSwitch};

/// Main application state
pub struct App {
    /// Persisted preferences
    pub settings: Settings,
    /// Gallery widgets and their animation state
    pub ui: UiState,
}

/// Widget instances shown in the gallery
pub struct UiState {
    pub theme_toggle: ToggleSwitch,
    pub like_buttons: Vec<LikeButton>,
    /// Most recent event emitted by a like button
    pub last_like: Option<LikeEvent>,
    pub toggle_viewer: CodeViewer,
    pub like_viewer: CodeViewer,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        let mut like_buttons: Vec<LikeButton> = LikeVariant::ALL
            .iter()
            .map(|&variant| LikeButton::new(variant, false))
            .collect();
        // The star button arrives pre-liked, exercising the external
        // initial-value path (no celebration fires on sync)
        like_buttons[2].set_initial(true);

        Self {
            theme_toggle: ToggleSwitch::new(settings.dark_mode),
            like_buttons,
            last_like: None,
            toggle_viewer: CodeViewer::new(DemoId::Toggle.component()),
            like_viewer: CodeViewer::new(DemoId::LikeButtons.component()),
        }
    }

    pub fn viewer_mut(&mut self, id: DemoId) -> &mut CodeViewer {
        match id {
            DemoId::Toggle => &mut self.toggle_viewer,
            DemoId::LikeButtons => &mut self.like_viewer,
        }
    }

    /// Whether any widget still needs animation frames
    pub fn has_active_animations(&self) -> bool {
        self.theme_toggle.is_animating()
            || self.like_buttons.iter().any(|button| button.is_animating())
    }

    /// Advance every retained animation; finished transient effects drop here
    pub fn tick(&mut self, now: Instant) {
        self.theme_toggle.tick(now);
        for button in &mut self.like_buttons {
            button.tick(now);
        }
    }
}
