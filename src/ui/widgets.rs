//! Animated interactive widgets
//!
//! Each widget owns its observable state plus the retained animation values
//! that drive its choreography, and exposes a `view` function that reflects
//! that state. Widgets never import `crate::app::Message`; callers supply the
//! messages raised by interaction events.
//!
//! # Design Principles
//!
//! - **State first**: state machines are plain structs, unit-testable without
//!   a renderer
//! - **Generic callbacks**: views are generic over the caller's Message type
//! - **Self-cleaning effects**: transient effect entries remove themselves
//!   once their track finishes

pub mod code_viewer;
pub mod like_button;
pub mod toggle;

pub use code_viewer::{CodeTab, CodeViewer};
pub use like_button::{LikeButton, LikeEvent, LikeVariant};
pub use toggle::ToggleSwitch;
