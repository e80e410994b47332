//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::prelude::*;
//! ```

// Re-export iced_anim types
pub use iced_anim::Animated;
pub use iced_anim::spring::Motion;
pub use iced_anim::transition::Easing;

pub use super::Keyframes;

/// Animation presets for common use cases
pub mod presets {
    use iced::time::Duration;

    use super::*;

    /// Press feedback duration (100ms, matches the tactile scale-down)
    const PRESS_DURATION: Duration = Duration::from_millis(100);

    /// Spring motion for the toggle knob.
    ///
    /// Equivalent to a stiffness 500 / damping 30 physical spring (unit mass):
    /// natural frequency sqrt(500) ~= 22.4 rad/s gives a response period of
    /// 2*pi/22.4 ~= 0.28s, and a damping fraction of 30 / (2 * sqrt(500)) ~= 0.67.
    pub fn knob_motion() -> Motion {
        Motion {
            response: Duration::from_millis(280),
            damping: 0.67,
        }
    }

    /// Spring-animated value for the toggle knob, settled at `value`
    pub fn knob_spring(value: f32) -> Animated<f32> {
        Animated::spring(value, knob_motion())
    }

    /// Quick ease-out transition for press/release scale feedback
    pub fn press_feedback(value: f32) -> Animated<f32> {
        Animated::transition(value, Easing::EASE_OUT.with_duration(PRESS_DURATION))
    }
}
