//! Tabbed code viewer widget
//!
//! Wraps a live demo together with the source modules behind it. The demo tab
//! renders externally supplied content and never fetches; the two source tabs
//! load lazily, at most once per tab for the widget's lifetime. A failed
//! fetch leaves the tab unloaded, so re-selecting it retries.
//!
//! `select_tab` is a pure state transition returning an optional
//! [`FetchRequest`]; the app layer turns requests into async tasks and feeds
//! the outcome back through [`CodeViewer::apply_fetch`].

use iced::widget::{Space, button, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Font, Padding};

use crate::api::SourceKind;
use crate::ui::{icons, theme};

/// Tabs of a code viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTab {
    /// Live demo, externally supplied, never fetched
    Demo,
    /// The widget module source
    Widget,
    /// The update-handler module source
    Handler,
}

impl CodeTab {
    pub const ALL: [CodeTab; 3] = [CodeTab::Demo, CodeTab::Widget, CodeTab::Handler];

    pub fn label(self) -> &'static str {
        match self {
            CodeTab::Demo => "Demo",
            CodeTab::Widget => "Widget",
            CodeTab::Handler => "Handler",
        }
    }

    /// Which source kind this tab shows; `None` for the demo tab
    pub fn source_kind(self) -> Option<SourceKind> {
        match self {
            CodeTab::Demo => None,
            CodeTab::Widget => Some(SourceKind::Widget),
            CodeTab::Handler => Some(SourceKind::Handler),
        }
    }
}

/// A fetch the app layer should perform for this viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub component: &'static str,
    pub tab: CodeTab,
    pub kind: SourceKind,
}

/// Per-tab cache slot, populated at most once
#[derive(Debug, Default)]
struct SourceSlot {
    content: Option<String>,
    loaded: bool,
}

/// Tab state machine with lazy, cached source loading
#[derive(Debug)]
pub struct CodeViewer {
    component: &'static str,
    active_tab: CodeTab,
    widget_slot: SourceSlot,
    handler_slot: SourceSlot,
    loading: bool,
    error: Option<String>,
}

impl CodeViewer {
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            active_tab: CodeTab::Demo,
            widget_slot: SourceSlot::default(),
            handler_slot: SourceSlot::default(),
            loading: false,
            error: None,
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn active_tab(&self) -> CodeTab {
        self.active_tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Cached content for a tab, if it has loaded
    pub fn content(&self, tab: CodeTab) -> Option<&str> {
        self.slot(tab).and_then(|slot| slot.content.as_deref())
    }

    /// Whether a tab's content has been fetched successfully
    pub fn is_loaded(&self, tab: CodeTab) -> bool {
        self.slot(tab).is_some_and(|slot| slot.loaded)
    }

    /// Switch tabs; returns a fetch request when the tab needs loading.
    ///
    /// Selecting an already-loaded tab (or the demo tab) performs no network
    /// access. There is no in-flight guard: re-selecting a tab whose fetch is
    /// still pending issues a duplicate request, and each completion writes
    /// only to its own tab's slot.
    pub fn select_tab(&mut self, tab: CodeTab) -> Option<FetchRequest> {
        self.active_tab = tab;

        let kind = tab.source_kind()?;
        if self.slot(tab).is_some_and(|slot| slot.loaded) {
            return None;
        }

        self.loading = true;
        self.error = None;
        Some(FetchRequest {
            component: self.component,
            tab,
            kind,
        })
    }

    /// Apply a fetch outcome for `tab`.
    ///
    /// Success caches the content and marks the tab loaded; failure records a
    /// user-facing message and leaves the tab unloaded. Either way `loading`
    /// ends false.
    pub fn apply_fetch(&mut self, tab: CodeTab, result: Result<String, String>) {
        if let Some(slot) = self.slot_mut(tab) {
            match result {
                Ok(content) => {
                    slot.content = Some(content);
                    slot.loaded = true;
                }
                Err(detail) => {
                    self.error = Some(format!("Failed to load source: {detail}"));
                }
            }
        }
        self.loading = false;
    }

    fn slot(&self, tab: CodeTab) -> Option<&SourceSlot> {
        match tab {
            CodeTab::Demo => None,
            CodeTab::Widget => Some(&self.widget_slot),
            CodeTab::Handler => Some(&self.handler_slot),
        }
    }

    fn slot_mut(&mut self, tab: CodeTab) -> Option<&mut SourceSlot> {
        match tab {
            CodeTab::Demo => None,
            CodeTab::Widget => Some(&mut self.widget_slot),
            CodeTab::Handler => Some(&mut self.handler_slot),
        }
    }
}

/// Build the viewer: tab strip, repository caption, and the content panel
pub fn view<'a, Message: Clone + 'a>(
    viewer: &'a CodeViewer,
    demo: Element<'a, Message>,
    on_tab: impl Fn(CodeTab) -> Message,
) -> Element<'a, Message> {
    let active = viewer.active_tab();

    let mut tabs = row![].align_y(Alignment::Center);
    for tab in CodeTab::ALL {
        let is_active = tab == active;
        tabs = tabs.push(
            button(text(tab.label()).size(13))
                .padding(Padding::new(8.0).left(16.0).right(16.0))
                .style(move |theme, status| theme::tab_button(theme, status, is_active))
                .on_press(on_tab(tab)),
        );
    }

    let repo_icon = svg(svg::Handle::from_memory(icons::GITHUB.as_bytes()))
        .width(14)
        .height(14)
        .style(|theme: &iced::Theme, _status| svg::Style {
            color: Some(theme::text_muted(theme)),
        });
    let repo_caption = text(crate::api::github_url(viewer.component()))
        .size(11)
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let header = container(
        row![
            tabs,
            Space::new().width(Fill),
            repo_icon,
            Space::new().width(6),
            repo_caption,
            Space::new().width(12),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .style(|theme| theme::tab_strip(theme));

    let content: Element<'a, Message> = match active {
        CodeTab::Demo => container(demo)
            .width(Fill)
            .padding(32)
            .center_x(Fill)
            .into(),
        tab => code_panel(viewer, tab),
    };

    container(column![header, content])
        .width(Fill)
        .style(|theme| theme::card(theme))
        .clip(true)
        .into()
}

/// Dark source panel: loading text, error text, or the cached module
fn code_panel<'a, Message: Clone + 'a>(
    viewer: &'a CodeViewer,
    tab: CodeTab,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = if viewer.is_loading() {
        text("Loading...")
            .size(13)
            .color(theme::CODE_MUTED)
            .into()
    } else if let Some(error) = viewer.error() {
        text(error).size(13).color(theme::ERROR_TEXT).into()
    } else {
        let source = viewer.content(tab).unwrap_or("");
        scrollable(
            text(source)
                .size(12)
                .font(Font::MONOSPACE)
                .color(theme::CODE_TEXT),
        )
        .height(360)
        .into()
    };

    container(body)
        .width(Fill)
        .padding(16)
        .style(|_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::CODE_BACKGROUND)),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> CodeViewer {
        CodeViewer::new("toggle")
    }

    mod tab_selection {
        use super::*;

        #[test]
        fn first_selection_requests_exactly_one_fetch() {
            let mut v = viewer();

            let request = v.select_tab(CodeTab::Widget);

            assert_eq!(
                request,
                Some(FetchRequest {
                    component: "toggle",
                    tab: CodeTab::Widget,
                    kind: SourceKind::Widget,
                })
            );
            assert_eq!(v.active_tab(), CodeTab::Widget);
            assert!(v.is_loading());
            assert!(v.error().is_none());
        }

        #[test]
        fn loaded_tab_is_cached() {
            let mut v = viewer();
            v.select_tab(CodeTab::Widget);
            v.apply_fetch(CodeTab::Widget, Ok("pub struct ToggleSwitch;".into()));

            assert_eq!(v.select_tab(CodeTab::Widget), None);
            assert_eq!(v.content(CodeTab::Widget), Some("pub struct ToggleSwitch;"));
        }

        #[test]
        fn demo_tab_never_fetches() {
            let mut v = viewer();
            assert_eq!(v.select_tab(CodeTab::Demo), None);
            assert!(!v.is_loading());
        }

        #[test]
        fn tabs_cache_independently() {
            let mut v = viewer();
            v.select_tab(CodeTab::Widget);
            v.apply_fetch(CodeTab::Widget, Ok("widget".into()));

            // The other source tab still needs its own fetch
            let request = v.select_tab(CodeTab::Handler);
            assert_eq!(request.map(|r| r.kind), Some(SourceKind::Handler));
        }

        #[test]
        fn mid_fetch_tab_switch_keeps_result_in_original_slot() {
            let mut v = viewer();
            v.select_tab(CodeTab::Widget);
            // User switches away before the fetch completes
            v.select_tab(CodeTab::Demo);

            v.apply_fetch(CodeTab::Widget, Ok("widget".into()));

            assert_eq!(v.active_tab(), CodeTab::Demo);
            assert!(v.is_loaded(CodeTab::Widget));
            assert_eq!(v.content(CodeTab::Widget), Some("widget"));
        }
    }

    mod fetch_outcomes {
        use super::*;

        #[test]
        fn success_caches_and_clears_loading() {
            let mut v = viewer();
            v.select_tab(CodeTab::Handler);
            v.apply_fetch(CodeTab::Handler, Ok("handler source".into()));

            assert!(!v.is_loading());
            assert!(v.is_loaded(CodeTab::Handler));
            assert!(v.error().is_none());
        }

        #[test]
        fn failure_surfaces_detail_and_leaves_tab_unloaded() {
            let mut v = viewer();
            v.select_tab(CodeTab::Widget);
            v.apply_fetch(CodeTab::Widget, Err("HTTP 404".into()));

            assert!(!v.is_loading());
            assert!(!v.is_loaded(CodeTab::Widget));
            assert!(v.content(CodeTab::Widget).is_none());

            let error = v.error().unwrap();
            assert!(error.contains("404"));
        }

        #[test]
        fn failed_tab_retries_on_reselection() {
            let mut v = viewer();
            v.select_tab(CodeTab::Widget);
            v.apply_fetch(CodeTab::Widget, Err("HTTP 500".into()));

            let retry = v.select_tab(CodeTab::Widget);
            assert!(retry.is_some());
            assert!(v.error().is_none(), "retry clears the previous error");
        }
    }
}
