//! Remote source-code API module
//!
//! The code viewers lazily pull each demo's Rust modules from the
//! repository's raw-content endpoint.

pub mod source;

pub use source::{SourceKind, fetch, github_url};
