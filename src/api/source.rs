//! Fetching widget source code from the repository
//!
//! URLs are derived deterministically from a fixed raw-content base, the
//! demo's identity string, and the requested source kind. Responses are raw
//! text; any non-2xx status or transport error surfaces as an error the
//! viewer formats into user-facing text.

use anyhow::{Result, bail};
use once_cell::sync::Lazy;

const RAW_BASE: &str =
    "https://raw.githubusercontent.com/motionlab-gallery/motionlab/main/src";
const REPO_BASE: &str = "https://github.com/motionlab-gallery/motionlab/blob/main/src";

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Which of a demo's two source modules to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The widget module (state machine + view)
    Widget,
    /// The update-handler module wiring the widget into the app
    Handler,
}

impl SourceKind {
    fn path(self, component: &str) -> String {
        match self {
            SourceKind::Widget => format!("ui/widgets/{component}.rs"),
            SourceKind::Handler => format!("app/update/{component}.rs"),
        }
    }
}

/// Raw-content URL for a demo's source module
pub fn source_url(component: &str, kind: SourceKind) -> String {
    format!("{RAW_BASE}/{}", kind.path(component))
}

/// Human-facing repository link for a demo's widget module
pub fn github_url(component: &str) -> String {
    format!("{REPO_BASE}/ui/widgets/{component}.rs")
}

/// Fetch one source module as text
pub async fn fetch(component: &'static str, kind: SourceKind) -> Result<String> {
    let url = source_url(component, kind);
    tracing::debug!("Fetching source: {}", url);

    let response = CLIENT.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        bail!("HTTP {}", status.as_u16());
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_url_embeds_component_and_kind() {
        let url = source_url("toggle", SourceKind::Widget);
        assert!(url.starts_with("https://raw.githubusercontent.com/"));
        assert!(url.ends_with("/src/ui/widgets/toggle.rs"));
    }

    #[test]
    fn handler_url_points_at_update_module() {
        let url = source_url("like_button", SourceKind::Handler);
        assert!(url.ends_with("/src/app/update/like_button.rs"));
    }

    #[test]
    fn github_url_is_browsable() {
        let url = github_url("toggle");
        assert!(url.starts_with("https://github.com/"));
        assert!(url.contains("/blob/main/src/ui/widgets/toggle.rs"));
    }
}
