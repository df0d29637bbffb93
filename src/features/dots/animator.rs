//! Repeating, reversing value animator
//!
//! Produces a fraction in `[0, 1]` that runs forward over one leg, back over
//! the next, and so on forever. The animator is polled with the frame clock
//! (`iced::window::frames()`), so it never owns a timer of its own.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Time curve applied to the raw leg fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Slow at both ends, fastest in the middle
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        // Pin the endpoints so trig rounding never leaks into sizes
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// Result of polling an animator for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorFrame {
    /// Leg boundaries crossed since the previous poll
    pub repeats: u64,
    /// Eased fraction at the polled instant
    pub fraction: f32,
}

/// A clock-driven interpolator the dots controller can be driven by
pub trait ValueAnimator {
    /// Create a run beginning at `now`
    fn start(duration: Duration, easing: Easing, now: Instant) -> Self
    where
        Self: Sized;

    /// Advance to `now`
    fn tick(&mut self, now: Instant) -> AnimatorFrame;
}

/// Infinite forward/reverse animator
#[derive(Debug, Clone)]
pub struct ReversingAnimator {
    duration: Duration,
    easing: Easing,
    started_at: Instant,
    /// Legs completed as of the last poll
    completed_legs: u64,
    /// Latest elapsed time seen, in nanoseconds
    last_elapsed: u128,
    /// Polls seen, only used for zero-length legs
    polls: u64,
}

impl ReversingAnimator {
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn completed_legs(&self) -> u64 {
        self.completed_legs
    }

    /// Even legs run 0 → 1, odd legs run 1 → 0
    fn leg_fraction(&self, leg: u64, within: f32) -> f32 {
        let raw = if leg % 2 == 0 { within } else { 1.0 - within };
        self.easing.apply(raw)
    }

    /// Zero-length legs: each poll completes exactly one leg
    fn tick_instant(&mut self) -> AnimatorFrame {
        let leg = self.polls;
        self.polls += 1;

        let repeats = leg - self.completed_legs;
        self.completed_legs = leg;

        AnimatorFrame {
            repeats,
            fraction: self.leg_fraction(leg, 1.0),
        }
    }
}

impl ValueAnimator for ReversingAnimator {
    fn start(duration: Duration, easing: Easing, now: Instant) -> Self {
        tracing::debug!("Starting reversing animator ({:?} per leg)", duration);
        Self {
            duration,
            easing,
            started_at: now,
            completed_legs: 0,
            last_elapsed: 0,
            polls: 0,
        }
    }

    fn tick(&mut self, now: Instant) -> AnimatorFrame {
        let leg_nanos = self.duration.as_nanos();
        if leg_nanos == 0 {
            return self.tick_instant();
        }

        // A stale instant never rewinds the run
        let elapsed = now
            .saturating_duration_since(self.started_at)
            .as_nanos()
            .max(self.last_elapsed);
        self.last_elapsed = elapsed;

        let leg = (elapsed / leg_nanos) as u64;
        let within = (elapsed % leg_nanos) as f64 / leg_nanos as f64;

        let repeats = leg - self.completed_legs;
        self.completed_legs = leg;

        AnimatorFrame {
            repeats,
            fraction: self.leg_fraction(leg, within as f32),
        }
    }
}
