//! Application view rendering

use iced::time::Instant;
use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::{DemoId, Message};
use crate::ui::widgets::{code_viewer, like_button, toggle};
use crate::ui::theme;

impl App {
    /// Build the gallery view
    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();

        let title = text("Motionlab").size(32).style(|theme: &iced::Theme| {
            text::Style {
                color: Some(theme::text_primary(theme)),
            }
        });
        let subtitle = text("Animated micro-interactions, one widget at a time")
            .size(14)
            .style(|theme: &iced::Theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            });

        let toggle_section = code_viewer::view(
            &self.ui.toggle_viewer,
            toggle::view(&self.ui.theme_toggle, Message::ThemeToggled),
            |tab| Message::ViewerTabSelected(DemoId::Toggle, tab),
        );

        let like_section = code_viewer::view(
            &self.ui.like_viewer,
            self.like_demo(now),
            |tab| Message::ViewerTabSelected(DemoId::LikeButtons, tab),
        );

        let content = column![
            title,
            Space::new().height(4),
            subtitle,
            Space::new().height(24),
            section_header("Animated toggle"),
            Space::new().height(8),
            toggle_section,
            Space::new().height(32),
            section_header("Like buttons"),
            Space::new().height(8),
            like_section,
        ]
        .width(Fill)
        .padding(40);

        container(scrollable(content).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(|theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(theme::background(theme))),
                ..Default::default()
            })
            .into()
    }

    /// Row of the four like-button variants plus the last emitted event
    fn like_demo(&self, now: Instant) -> Element<'_, Message> {
        let mut buttons = row![].align_y(Alignment::Center);
        for (index, button) in self.ui.like_buttons.iter().enumerate() {
            buttons = buttons.push(like_button::view(
                button,
                now,
                Message::LikePressed(index),
                Message::LikeReleased(index),
                Message::LikePointerExited(index),
            ));
        }

        let caption = match &self.ui.last_like {
            Some(event) => text(format!(
                "last event: {{ variant: {}, liked: {} }}",
                event.variant.label(),
                event.liked
            )),
            None => text("click a button"),
        }
        .size(12)
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

        column![buttons, Space::new().height(8), caption]
            .align_x(Alignment::Center)
            .into()
    }
}

fn section_header(label: &str) -> Element<'_, Message> {
    text(label)
        .size(20)
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .into()
}
