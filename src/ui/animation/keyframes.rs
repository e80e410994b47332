//! Keyframe tracks for transient one-shot effects
//!
//! `iced_anim::Animated` covers retained values with a single moving target
//! (springs, transitions). The like-button celebration instead needs multi-stop
//! keyframe sequences with per-effect start delays: icon scale `1 -> 1.3 -> 1`,
//! particle scale `0 -> 1 -> 0`, and so on. This module provides a minimal
//! piecewise-linear track that is sampled against the time elapsed since it was
//! spawned and reports when it has finished, so its owner can drop it.

use iced::time::{Duration, Instant};

/// A piecewise-linear keyframe track, played once over a fixed duration.
///
/// The track starts at `started_at` (plus an optional delay), passes through
/// each stop at evenly spaced times, and holds its last stop once finished.
#[derive(Debug, Clone)]
pub struct Keyframes {
    stops: Vec<f32>,
    duration: Duration,
    delay: Duration,
    started_at: Instant,
}

impl Keyframes {
    /// Create a track from its stops.
    ///
    /// # Panics
    ///
    /// Panics if `stops` is empty.
    pub fn new(stops: Vec<f32>, duration: Duration, started_at: Instant) -> Self {
        assert!(!stops.is_empty(), "keyframe track needs at least one stop");
        Self {
            stops,
            duration,
            delay: Duration::ZERO,
            started_at,
        }
    }

    /// Delay the start of the track; the first stop is held until then.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sample the track at `now`.
    ///
    /// Before the delayed start this returns the first stop; after the track
    /// has finished it returns the last stop.
    pub fn value(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.stops[0];
        };

        let segments = self.stops.len() - 1;
        if segments == 0 {
            return self.stops[0];
        }

        let total = self.duration.as_secs_f32();
        if total <= f32::EPSILON {
            return self.stops[segments];
        }

        let t = (active.as_secs_f32() / total).clamp(0.0, 1.0);
        let position = t * segments as f32;
        let index = (position.floor() as usize).min(segments - 1);
        let fraction = position - index as f32;

        let from = self.stops[index];
        let to = self.stops[index + 1];
        from + (to - from) * fraction
    }

    /// Whether the track has played through (delay included).
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(stops: &[f32], millis: u64, start: Instant) -> Keyframes {
        Keyframes::new(stops.to_vec(), Duration::from_millis(millis), start)
    }

    #[test]
    fn samples_endpoints() {
        let start = Instant::now();
        let kf = track(&[0.0, 2.0], 600, start);

        assert_eq!(kf.value(start), 0.0);
        assert_eq!(kf.value(start + Duration::from_millis(600)), 2.0);
        // Holds the last stop after finishing
        assert_eq!(kf.value(start + Duration::from_secs(5)), 2.0);
    }

    #[test]
    fn samples_midpoint_of_three_stop_track() {
        let start = Instant::now();
        let kf = track(&[1.0, 1.3, 1.0], 500, start);

        // Halfway through, the track sits exactly on the middle stop
        let mid = kf.value(start + Duration::from_millis(250));
        assert!((mid - 1.3).abs() < 1e-4);

        // Quarter of the way through, halfway up the first segment
        let quarter = kf.value(start + Duration::from_millis(125));
        assert!((quarter - 1.15).abs() < 1e-4);
    }

    #[test]
    fn delay_holds_first_stop() {
        let start = Instant::now();
        let kf = track(&[0.0, 1.0], 600, start).with_delay(Duration::from_millis(150));

        assert_eq!(kf.value(start), 0.0);
        assert_eq!(kf.value(start + Duration::from_millis(149)), 0.0);
        // Halfway through the active window after the delay
        let mid = kf.value(start + Duration::from_millis(450));
        assert!((mid - 0.5).abs() < 1e-4);
    }

    #[test]
    fn finished_accounts_for_delay() {
        let start = Instant::now();
        let kf = track(&[0.0, 1.0], 600, start).with_delay(Duration::from_millis(250));

        assert!(!kf.is_finished(start + Duration::from_millis(600)));
        assert!(kf.is_finished(start + Duration::from_millis(850)));
    }

    #[test]
    fn single_stop_track_is_constant() {
        let start = Instant::now();
        let kf = track(&[0.7], 300, start);

        assert_eq!(kf.value(start), 0.7);
        assert_eq!(kf.value(start + Duration::from_millis(150)), 0.7);
        assert!(kf.is_finished(start + Duration::from_millis(300)));
    }
}
