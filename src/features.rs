//! Feature modules - application behavior separated from UI
//!
//! Currently only settings persistence lives here.

pub mod settings;

pub use settings::Settings;
