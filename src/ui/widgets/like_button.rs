//! Like button widget with celebration micro-interactions
//!
//! A two-state liked/unliked button per variant. Liking (and only liking)
//! fires three fire-and-forget visual effects: an icon pulse/wiggle, an
//! expanding ring, and a radial particle burst. Unliking is silent, so rapid
//! toggling cannot spam the celebration. Transient effect entries each remove
//! themselves once their keyframe track finishes.
//!
//! Press/release pointer feedback (scale down to 0.85 and back) is purely
//! tactile and independent of the liked state machine.

use std::f32::consts::TAU;

use iced::time::{Duration, Instant};
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::widget::{Canvas, container, mouse_area, stack, svg};
use iced::{Border, Color, Element, Fill, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::ui::animation::prelude::{Animated, Keyframes, presets};
use crate::ui::{icons, theme};

/// Icon pulse/wiggle duration
const PULSE_DURATION: Duration = Duration::from_millis(500);
/// Ring expansion and particle burst duration
const BURST_DURATION: Duration = Duration::from_millis(600);
/// Per-particle stagger delay
const PARTICLE_STAGGER: Duration = Duration::from_millis(50);
/// Particles per burst, arranged radially
const PARTICLE_COUNT: usize = 6;
/// Distance a particle travels from the center (px)
const PARTICLE_RADIUS: f32 = 30.0;
/// Particle dot radius at full scale (px)
const PARTICLE_SIZE: f32 = 4.0;
/// Ring radius at scale 1.0 (the button's inset circle)
const RING_BASE_RADIUS: f32 = 24.0;
const RING_STROKE_WIDTH: f32 = 4.0;

const ICON_SIZE: f32 = 24.0;
/// Side length of the square field a button (and its overlay) occupies
pub const FIELD_SIZE: f32 = 110.0;
const PRESSED_SCALE: f32 = 0.85;

/// Visual theme of a like button; fixed for the instance's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeVariant {
    Heart,
    Thumbs,
    Star,
    Bookmark,
}

impl LikeVariant {
    pub const ALL: [LikeVariant; 4] = [
        LikeVariant::Heart,
        LikeVariant::Thumbs,
        LikeVariant::Star,
        LikeVariant::Bookmark,
    ];

    /// Static accent color lookup (ring and particles)
    pub fn accent(self) -> Color {
        match self {
            LikeVariant::Heart => theme::HEART_RED,
            LikeVariant::Thumbs => theme::THUMBS_BLUE,
            LikeVariant::Star => theme::STAR_YELLOW,
            LikeVariant::Bookmark => theme::BOOKMARK_PURPLE,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LikeVariant::Heart => icons::HEART,
            LikeVariant::Thumbs => icons::THUMBS_UP,
            LikeVariant::Star => icons::STAR,
            LikeVariant::Bookmark => icons::BOOKMARK,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LikeVariant::Heart => "heart",
            LikeVariant::Thumbs => "thumbs",
            LikeVariant::Star => "star",
            LikeVariant::Bookmark => "bookmark",
        }
    }
}

/// Event emitted on every toggle, regardless of direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikeEvent {
    pub variant: LikeVariant,
    pub liked: bool,
}

/// Icon pulse: scale 1 -> 1.3 -> 1 with a -10/+10 degree wiggle
#[derive(Debug, Clone)]
pub struct Pulse {
    pub scale: Keyframes,
    pub rotation: Keyframes,
}

/// One expanding ring: scale 0 -> 2 while fading out
#[derive(Debug, Clone)]
pub struct Ring {
    pub scale: Keyframes,
    pub opacity: Keyframes,
}

/// One burst particle on a radial trajectory
#[derive(Debug, Clone)]
pub struct Particle {
    /// Radial direction, `i * 2pi / 6`
    pub angle: f32,
    /// Scale 0 -> 1 -> 0 over the burst duration
    pub scale: Keyframes,
    /// Travel progress from center (0.0) to the radial target (1.0)
    pub travel: Keyframes,
}

/// Like button state machine with its retained animation values
#[derive(Debug)]
pub struct LikeButton {
    variant: LikeVariant,
    liked: bool,
    press: Animated<f32>,
    pulse: Option<Pulse>,
    rings: Vec<Ring>,
    particles: Vec<Particle>,
}

impl LikeButton {
    pub fn new(variant: LikeVariant, initial_liked: bool) -> Self {
        Self {
            variant,
            liked: initial_liked,
            press: presets::press_feedback(1.0),
            pulse: None,
            rings: Vec::new(),
            particles: Vec::new(),
        }
    }

    /// Resynchronize to an externally supplied value.
    ///
    /// The mount/external-sync path is exempt from celebration: no effects
    /// fire here, and repeated calls with the same value change nothing.
    pub fn set_initial(&mut self, value: bool) {
        self.liked = value;
    }

    /// Flip the liked state and return the event to emit.
    ///
    /// Celebration effects fire only on the unliked -> liked transition.
    pub fn toggle(&mut self, now: Instant) -> LikeEvent {
        self.liked = !self.liked;
        if self.liked {
            self.spawn_celebration(now);
        }
        LikeEvent {
            variant: self.variant,
            liked: self.liked,
        }
    }

    fn spawn_celebration(&mut self, now: Instant) {
        self.pulse = Some(Pulse {
            scale: Keyframes::new(vec![1.0, 1.3, 1.0], PULSE_DURATION, now),
            rotation: Keyframes::new(vec![0.0, -10.0, 10.0, -10.0, 0.0], PULSE_DURATION, now),
        });

        self.rings.push(Ring {
            scale: Keyframes::new(vec![0.0, 2.0], BURST_DURATION, now),
            opacity: Keyframes::new(vec![1.0, 0.0], BURST_DURATION, now),
        });

        for i in 0..PARTICLE_COUNT {
            let angle = i as f32 * TAU / PARTICLE_COUNT as f32;
            let delay = PARTICLE_STAGGER * i as u32;
            self.particles.push(Particle {
                angle,
                scale: Keyframes::new(vec![0.0, 1.0, 0.0], BURST_DURATION, now).with_delay(delay),
                travel: Keyframes::new(vec![0.0, 1.0], BURST_DURATION, now).with_delay(delay),
            });
        }
    }

    /// Pointer pressed: tactile scale-down, unrelated to the liked state
    pub fn press(&mut self) {
        self.press.update(PRESSED_SCALE.into());
    }

    /// Pointer released or left the button: scale back to rest
    pub fn release(&mut self) {
        self.press.update(1.0.into());
    }

    /// Advance animations and drop finished transient effects
    pub fn tick(&mut self, now: Instant) {
        self.press.tick(now);

        if let Some(pulse) = &self.pulse {
            if pulse.scale.is_finished(now) && pulse.rotation.is_finished(now) {
                self.pulse = None;
            }
        }
        self.rings.retain(|ring| !ring.scale.is_finished(now));
        self.particles.retain(|p| !p.scale.is_finished(now));
    }

    pub fn is_animating(&self) -> bool {
        self.press.is_animating()
            || self.pulse.is_some()
            || !self.rings.is_empty()
            || !self.particles.is_empty()
    }

    pub fn variant(&self) -> LikeVariant {
        self.variant
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn press_scale(&self) -> f32 {
        *self.press.value()
    }

    /// Icon scale at `now` (pulse x press feedback)
    pub fn icon_scale(&self, now: Instant) -> f32 {
        let pulse = self
            .pulse
            .as_ref()
            .map(|p| p.scale.value(now))
            .unwrap_or(1.0);
        pulse * self.press_scale()
    }

    /// Icon wiggle rotation at `now`, in degrees
    pub fn icon_rotation(&self, now: Instant) -> f32 {
        self.pulse
            .as_ref()
            .map(|p| p.rotation.value(now))
            .unwrap_or(0.0)
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Snapshot the transient effects for the canvas overlay
    pub fn overlay(&self, now: Instant) -> EffectOverlay {
        EffectOverlay {
            color: self.variant.accent(),
            rings: self
                .rings
                .iter()
                .map(|ring| (ring.scale.value(now), ring.opacity.value(now)))
                .collect(),
            particles: self
                .particles
                .iter()
                .map(|p| {
                    let travel = p.travel.value(now) * PARTICLE_RADIUS;
                    (
                        p.angle.cos() * travel,
                        p.angle.sin() * travel,
                        p.scale.value(now),
                    )
                })
                .collect(),
        }
    }
}

/// Resolved ring/particle geometry for one frame, drawn as a canvas overlay
#[derive(Debug, Clone)]
pub struct EffectOverlay {
    color: Color,
    /// (scale, opacity) per ring
    rings: Vec<(f32, f32)>,
    /// (dx, dy, scale) per particle, offsets from the field center
    particles: Vec<(f32, f32, f32)>,
}

impl<Message> Program<Message> for EffectOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        for &(scale, opacity) in &self.rings {
            if scale <= f32::EPSILON || opacity <= f32::EPSILON {
                continue;
            }
            let ring = Path::circle(center, RING_BASE_RADIUS * scale);
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_width(RING_STROKE_WIDTH)
                    .with_color(Color {
                        a: opacity,
                        ..self.color
                    }),
            );
        }

        for &(dx, dy, scale) in &self.particles {
            if scale <= f32::EPSILON {
                continue;
            }
            let dot = Path::circle(
                Point::new(center.x + dx, center.y + dy),
                PARTICLE_SIZE * scale,
            );
            frame.fill(&dot, self.color);
        }

        vec![frame.into_geometry()]
    }
}

/// Build one like button: icon, press feedback, and the effect overlay
pub fn view<'a, Message: Clone + 'a>(
    button: &LikeButton,
    now: Instant,
    on_press: Message,
    on_release: Message,
    on_exit: Message,
) -> Element<'a, Message> {
    let tint = if button.is_liked() {
        button.variant().accent()
    } else {
        theme::ICON_IDLE
    };

    let size = ICON_SIZE * button.icon_scale(now);
    let rotation = button.icon_rotation(now).to_radians();

    let icon = svg(svg::Handle::from_memory(button.variant().icon().as_bytes()))
        .width(size)
        .height(size)
        .rotation(Radians(rotation))
        .style(move |_theme, _status| svg::Style { color: Some(tint) });

    let face = container(icon)
        .width(FIELD_SIZE * 0.55)
        .height(FIELD_SIZE * 0.55)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme: &iced::Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::hover_bg(theme))),
            border: Border {
                radius: (FIELD_SIZE * 0.275).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let field = container(
        mouse_area(face)
            .on_press(on_press)
            .on_release(on_release)
            .on_exit(on_exit),
    )
    .width(FIELD_SIZE)
    .height(FIELD_SIZE)
    .center_x(Fill)
    .center_y(Fill);

    let overlay = Canvas::new(button.overlay(now))
        .width(FIELD_SIZE)
        .height(FIELD_SIZE);

    stack![field, overlay].into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::time::Duration;

    fn heart() -> LikeButton {
        LikeButton::new(LikeVariant::Heart, false)
    }

    mod celebration {
        use super::*;

        #[test]
        fn liking_spawns_one_pulse_one_ring_six_particles() {
            let now = Instant::now();
            let mut button = heart();

            let event = button.toggle(now);

            assert_eq!(
                event,
                LikeEvent {
                    variant: LikeVariant::Heart,
                    liked: true
                }
            );
            assert!(button.pulse.is_some());
            assert_eq!(button.rings().len(), 1);
            assert_eq!(button.particles().len(), 6);
        }

        #[test]
        fn particles_are_radial_with_staggered_delays() {
            let now = Instant::now();
            let mut button = heart();
            button.toggle(now);

            for (i, particle) in button.particles().iter().enumerate() {
                let expected_angle = i as f32 * TAU / 6.0;
                assert!(
                    (particle.angle - expected_angle).abs() < 1e-6,
                    "particle {i} angle"
                );
                assert_eq!(
                    particle.scale.delay(),
                    Duration::from_millis(50 * i as u64),
                    "particle {i} delay"
                );
                assert_eq!(particle.travel.delay(), particle.scale.delay());
            }
        }

        #[test]
        fn unliking_spawns_nothing_but_still_emits() {
            let now = Instant::now();
            let mut button = LikeButton::new(LikeVariant::Bookmark, true);

            let event = button.toggle(now);

            assert_eq!(
                event,
                LikeEvent {
                    variant: LikeVariant::Bookmark,
                    liked: false
                }
            );
            assert!(button.pulse.is_none());
            assert!(button.rings().is_empty());
            assert!(button.particles().is_empty());
        }

        #[test]
        fn rapid_toggles_may_overlap_transients() {
            let now = Instant::now();
            let mut button = heart();

            button.toggle(now); // like
            button.toggle(now + Duration::from_millis(10)); // unlike, silent
            button.toggle(now + Duration::from_millis(20)); // like again

            // Uncapped by design: two bursts coexist until they expire
            assert_eq!(button.rings().len(), 2);
            assert_eq!(button.particles().len(), 12);
        }

        #[test]
        fn effects_remove_themselves_once_finished() {
            let now = Instant::now();
            let mut button = heart();
            button.toggle(now);

            // Past the longest track (600ms burst + 250ms max stagger)
            button.tick(now + Duration::from_millis(900));

            assert!(button.pulse.is_none());
            assert!(button.rings().is_empty());
            assert!(button.particles().is_empty());
            assert!(!button.is_animating());
        }
    }

    mod external_sync {
        use super::*;

        #[test]
        fn set_initial_never_celebrates() {
            let mut button = heart();
            button.set_initial(true);

            assert!(button.is_liked());
            assert!(button.pulse.is_none());
            assert!(button.rings().is_empty());
            assert!(button.particles().is_empty());
        }

        #[test]
        fn set_initial_is_idempotent() {
            let mut button = heart();
            button.set_initial(true);
            button.set_initial(true);
            button.set_initial(true);

            assert!(button.is_liked());
            assert!(button.rings().is_empty());
        }
    }

    mod press_feedback {
        use super::*;

        #[test]
        fn press_and_release_retarget_scale() {
            let mut button = heart();
            assert_eq!(button.press_scale(), 1.0);

            button.press();
            button.tick(Instant::now() + Duration::from_secs(1));
            assert!((button.press_scale() - PRESSED_SCALE).abs() < 1e-3);

            button.release();
            button.tick(Instant::now() + Duration::from_secs(2));
            assert!((button.press_scale() - 1.0).abs() < 1e-3);
        }

        #[test]
        fn press_feedback_ignores_liked_state() {
            let mut button = heart();
            button.press();

            assert!(!button.is_liked());
            assert!(button.rings().is_empty());
            assert!(button.is_animating());
        }
    }

    mod overlay {
        use super::*;

        #[test]
        fn particle_reaches_radial_target_at_end_of_travel() {
            let now = Instant::now();
            let mut button = heart();
            button.toggle(now);

            // First particle has no delay; at the end of its travel it sits
            // at the full radius along angle 0
            let snapshot = button.overlay(now + Duration::from_millis(600));
            let (dx, dy, _scale) = snapshot.particles[0];
            assert!((dx - PARTICLE_RADIUS).abs() < 1e-3);
            assert!(dy.abs() < 1e-3);
        }

        #[test]
        fn ring_fades_while_expanding() {
            let now = Instant::now();
            let mut button = heart();
            button.toggle(now);

            let mid = button.overlay(now + Duration::from_millis(300));
            let (scale, opacity) = mid.rings[0];
            assert!((scale - 1.0).abs() < 1e-3);
            assert!((opacity - 0.5).abs() < 1e-3);
        }
    }
}
