//! Application messages

use crate::ui::widgets::CodeTab;

/// Identifies a demo section (and its code viewer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoId {
    Toggle,
    LikeButtons,
}

impl DemoId {
    /// Identity string used to derive source URLs
    pub fn component(self) -> &'static str {
        match self {
            DemoId::Toggle => "toggle",
            DemoId::LikeButtons => "like_button",
        }
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Animation ============
    /// Frame tick driving springs and keyframe tracks
    AnimationTick,

    // ============ Toggle demo ============
    /// The theme toggle was clicked
    ThemeToggled,

    // ============ Like demo ============
    /// Pointer pressed on the like button at this index
    LikePressed(usize),
    /// Pointer released over the button (completes a click)
    LikeReleased(usize),
    /// Pointer left the button while pressed
    LikePointerExited(usize),
    /// Click resolved: flip the liked state and emit
    LikeToggled(usize),

    // ============ Code viewers ============
    /// A viewer tab was selected
    ViewerTabSelected(DemoId, CodeTab),
    /// A source fetch finished (text or user-facing error detail)
    ViewerSourceLoaded(DemoId, CodeTab, Result<String, String>),
}
