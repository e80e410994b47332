//! Code viewer message handlers
//!
//! Tab selection asks the viewer's state machine whether a fetch is needed
//! and, if so, spawns it as an async task. Completion feeds back through
//! `apply_fetch`, which guarantees the loading flag clears on both paths.

use iced::Task;

use crate::api;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle code viewer messages
    pub fn handle_viewer(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ViewerTabSelected(id, tab) => {
                let id = *id;
                match self.ui.viewer_mut(id).select_tab(*tab) {
                    Some(request) => {
                        let tab = request.tab;
                        Some(Task::perform(
                            async move {
                                api::fetch(request.component, request.kind)
                                    .await
                                    .map_err(|e| e.to_string())
                            },
                            move |result| Message::ViewerSourceLoaded(id, tab, result),
                        ))
                    }
                    // Demo tab or already-cached source: no network access
                    None => Some(Task::none()),
                }
            }

            Message::ViewerSourceLoaded(id, tab, result) => {
                if let Err(detail) = result {
                    tracing::warn!(
                        "Source fetch failed for {} ({:?}): {}",
                        id.component(),
                        tab,
                        detail
                    );
                }
                self.ui.viewer_mut(*id).apply_fetch(*tab, result.clone());
                Some(Task::none())
            }

            _ => None,
        }
    }
}
