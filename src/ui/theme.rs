//! Theme system for the widget gallery
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0a0a0a);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const HOVER: Color = color!(0x2a2a2a);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf9fafb);
    pub const BORDER: Color = color!(0xe5e7eb);
    pub const HOVER: Color = color!(0xf3f4f6);
    pub const TEXT_MUTED: Color = color!(0x9ca3af);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::HOVER
    } else {
        light::HOVER
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

// ============================================================================
// Accent colors (static, theme-independent)
// ============================================================================

/// Primary accent, also the toggle track color when on
pub const ACCENT_BLUE: Color = color!(0x3b82f6);

/// Toggle track color when off
pub const TRACK_OFF: Color = color!(0xd1d5db);

/// Idle (unliked) icon tint
pub const ICON_IDLE: Color = color!(0x9ca3af);

// Like-button variant accents
pub const HEART_RED: Color = color!(0xef4444);
pub const THUMBS_BLUE: Color = color!(0x3b82f6);
pub const STAR_YELLOW: Color = color!(0xeab308);
pub const BOOKMARK_PURPLE: Color = color!(0xa855f7);

// Code panel colors (fixed dark panel in both themes)
pub const CODE_BACKGROUND: Color = color!(0x111827);
pub const CODE_TEXT: Color = color!(0x4ade80);
pub const CODE_MUTED: Color = color!(0x9ca3af);
pub const ERROR_TEXT: Color = color!(0xf87171);

// ============================================================================
// Style helpers
// ============================================================================

/// Card container around each demo section
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Header strip of the code viewer (tab bar background)
pub fn tab_strip(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 0.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Tab button style; the active tab is highlighted with the accent color
pub fn tab_button(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let text = if active {
        ACCENT_BLUE
    } else {
        match status {
            button::Status::Hovered => text_primary(theme),
            _ => text_secondary(theme),
        }
    };
    let bg = if active {
        background(theme)
    } else {
        Color::TRANSPARENT
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text,
        border: Border::default(),
        ..Default::default()
    }
}
