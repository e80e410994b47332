//! Animated toggle switch widget
//!
//! A boolean on/off switch whose knob slides between the two sides on a
//! spring. The externally supplied initial value positions the knob before
//! any interaction; `toggle` flips the state and returns the new value so the
//! caller can emit it.

use iced::time::Instant;
use iced::widget::{Space, container, mouse_area, row, svg, text};
use iced::{Alignment, Border, Color, Element};

use crate::ui::animation::prelude::{Animated, presets};
use crate::ui::{icons, theme};

/// Knob x offset when the switch is on (px)
pub const KNOB_TRAVEL: f32 = 40.0;

const KNOB_SIZE: f32 = 24.0;
const TRACK_WIDTH: f32 = 72.0;
const TRACK_HEIGHT: f32 = 32.0;
const TRACK_PADDING: f32 = 4.0;

/// Spring-animated on/off switch
#[derive(Debug)]
pub struct ToggleSwitch {
    on: bool,
    knob_x: Animated<f32>,
}

impl ToggleSwitch {
    /// Create a switch already settled at `initial`.
    ///
    /// The knob spring starts at rest on the matching side, so the first
    /// render shows the correct position without an attach-time animation.
    pub fn new(initial: bool) -> Self {
        Self {
            on: initial,
            knob_x: presets::knob_spring(knob_target(initial)),
        }
    }

    /// Resynchronize to an externally supplied value.
    ///
    /// Idempotent: repeated calls with the same value do not restart the
    /// knob spring.
    pub fn set_initial(&mut self, value: bool) {
        if self.on == value {
            return;
        }
        self.on = value;
        self.knob_x.update(knob_target(value).into());
    }

    /// Flip the switch, retarget the knob, and return the new value
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.knob_x.update(knob_target(self.on).into());
        self.on
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Current interpolated knob offset (0..=KNOB_TRAVEL)
    pub fn knob_offset(&self) -> f32 {
        *self.knob_x.value()
    }

    /// Where the knob spring is heading
    pub fn knob_destination(&self) -> f32 {
        *self.knob_x.target()
    }

    pub fn is_animating(&self) -> bool {
        self.knob_x.is_animating()
    }

    /// Advance the knob spring; call on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.knob_x.tick(now);
    }
}

fn knob_target(on: bool) -> f32 {
    if on { KNOB_TRAVEL } else { 0.0 }
}

/// Build the toggle switch with its mode label
pub fn view<'a, Message: Clone + 'a>(
    toggle: &ToggleSwitch,
    on_toggle: Message,
) -> Element<'a, Message> {
    let on = toggle.is_on();
    let track_color = if on { theme::ACCENT_BLUE } else { theme::TRACK_OFF };

    let knob = container(Space::new().width(0).height(0))
        .width(KNOB_SIZE)
        .height(KNOB_SIZE)
        .style(|_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(Color::WHITE)),
            border: Border {
                radius: (KNOB_SIZE / 2.0).into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                color: Color { a: 0.25, ..Color::BLACK },
                offset: iced::Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            ..Default::default()
        });

    let track = container(
        row![Space::new().width(toggle.knob_offset()), knob].align_y(Alignment::Center),
    )
    .width(TRACK_WIDTH)
    .height(TRACK_HEIGHT)
    .padding(TRACK_PADDING)
    .style(move |_theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(track_color)),
        border: Border {
            radius: (TRACK_HEIGHT / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let (icon, label) = if on {
        (icons::MOON, "Dark mode")
    } else {
        (icons::SUN, "Light mode")
    };

    let mode_icon = svg(svg::Handle::from_memory(icon.as_bytes()))
        .width(18)
        .height(18)
        .style(|theme: &iced::Theme, _status| svg::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let label_text = text(label).size(14).style(|theme: &iced::Theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    mouse_area(
        row![track, Space::new().width(12), mode_icon, Space::new().width(6), label_text]
            .align_y(Alignment::Center),
    )
    .on_press(on_toggle)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::time::Duration;

    /// Drive the spring in frame-sized steps, like the frame subscription.
    /// A single far-future tick is clamped per frame and leaves it mid-flight.
    fn run_frames(toggle: &mut ToggleSwitch, start: Instant, count: u64) {
        for frame in 1..=count {
            toggle.tick(start + Duration::from_millis(16 * frame));
        }
    }

    #[test]
    fn initial_value_positions_knob_without_animating() {
        let off = ToggleSwitch::new(false);
        assert!(!off.is_on());
        assert_eq!(off.knob_offset(), 0.0);
        assert!(!off.is_animating());

        let on = ToggleSwitch::new(true);
        assert!(on.is_on());
        assert_eq!(on.knob_offset(), KNOB_TRAVEL);
        assert!(!on.is_animating());
    }

    #[test]
    fn toggle_targets_opposite_side() {
        let mut toggle = ToggleSwitch::new(false);

        assert!(toggle.toggle());
        assert_eq!(toggle.knob_destination(), KNOB_TRAVEL);

        assert!(!toggle.toggle());
        assert_eq!(toggle.knob_destination(), 0.0);
    }

    #[test]
    fn set_initial_syncs_state() {
        let mut toggle = ToggleSwitch::new(false);
        toggle.set_initial(true);
        assert!(toggle.is_on());
        assert_eq!(toggle.knob_destination(), KNOB_TRAVEL);
    }

    #[test]
    fn set_initial_is_idempotent() {
        let mut toggle = ToggleSwitch::new(false);
        let start = Instant::now();
        toggle.set_initial(true);

        // Settle the spring, then re-apply the same value
        run_frames(&mut toggle, start, 200);
        toggle.set_initial(true);

        assert!(toggle.is_on());
        assert!(!toggle.is_animating());
    }

    #[test]
    fn knob_settles_on_target_after_ticks() {
        let mut toggle = ToggleSwitch::new(false);
        let start = Instant::now();
        toggle.toggle();
        assert!(toggle.is_animating());

        // 200 frames at 16 ms is over 3 s, far past the 280 ms spring response
        run_frames(&mut toggle, start, 200);
        assert!((toggle.knob_offset() - KNOB_TRAVEL).abs() < 0.5);
        assert!(!toggle.is_animating());
    }
}
