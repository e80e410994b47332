//! UI module for the widget gallery
//!
//! # Architecture
//!
//! The UI is organized into two layers:
//!
//! - **Widgets** (`widgets`): Animated interactive widgets with their own
//!   state machines, free of application-specific Message types
//! - **App views** (`crate::app::view`): Composition of widgets into the
//!   gallery, the only layer that knows about `crate::app::Message`

pub mod animation;
pub mod icons;
pub mod theme;
pub mod widgets;
