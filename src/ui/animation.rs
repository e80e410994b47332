//! Unified animation system for Motionlab
//!
//! This module provides CSS-like animations using `iced_anim` plus a small
//! keyframe-track primitive for transient one-shot effects.
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::prelude::*;
//!
//! // CSS-like transition
//! let opacity: Animated<f32> = Animated::transition(0.0, Easing::EASE);
//!
//! // Spring animation
//! let scale: Animated<f32> = Animated::spring(1.0, Motion::BOUNCY);
//! ```

mod keyframes;
pub mod prelude;

pub use keyframes::Keyframes;
