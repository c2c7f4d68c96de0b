//! Score counter animation for the reveal.
//!
//! The counter climbs linearly from 0 to the score over a fixed duration and
//! drives a circular gauge on a 0-100 scale. This module only computes the
//! values; pacing and drawing belong to the frontend.

use std::time::Duration;

use crate::score::MAX_GAUGE_SCORE;

/// Default length of the counter animation.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(1500);

/// Default spacing between sampled frames (about 60 per second).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Fraction of the gauge filled for a counter value, capped at 1.0.
pub fn gauge_fraction(value: u32) -> f64 {
    f64::from(value.min(MAX_GAUGE_SCORE)) / f64::from(MAX_GAUGE_SCORE)
}

/// A linear count-up from 0 to a target score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreAnimation {
    target: u32,
    duration: Duration,
}

/// One sampled step of a [`ScoreAnimation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Time since the animation started.
    pub elapsed: Duration,
    /// Counter value to show.
    pub value: u32,
    /// Gauge fill, 0.0 to 1.0.
    pub gauge: f64,
}

impl ScoreAnimation {
    /// Create an animation towards `target` lasting `duration`.
    pub fn new(target: u32, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// The score the counter ends on.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Total running time.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Completed share of the animation, 0.0 to 1.0.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Counter value at a point in time, rounded down.
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        (self.progress(elapsed) * f64::from(self.target)).floor() as u32
    }

    /// Whether the counter has reached its target.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Frame at a point in time.
    pub fn frame_at(&self, elapsed: Duration) -> AnimationFrame {
        let value = self.value_at(elapsed);
        AnimationFrame {
            elapsed,
            value,
            gauge: gauge_fraction(value),
        }
    }

    /// Frames sampled every `interval`, always ending with the final frame.
    pub fn frames(&self, interval: Duration) -> Frames {
        Frames {
            animation: *self,
            interval,
            next: Some(Duration::ZERO),
        }
    }
}

/// Iterator over the frames of a [`ScoreAnimation`].
#[derive(Debug, Clone)]
pub struct Frames {
    animation: ScoreAnimation,
    interval: Duration,
    next: Option<Duration>,
}

impl Iterator for Frames {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let duration = self.animation.duration;
        let elapsed = self.next?.min(duration);

        self.next = if elapsed >= duration {
            None
        } else if self.interval.is_zero() {
            Some(duration)
        } else {
            Some(elapsed + self.interval)
        };

        Some(self.animation.frame_at(elapsed))
    }
}
