//! Visibility-driven three-dots controller
//!
//! Owns the indicator's state and applies animator frames to it. The host
//! forwards visibility changes and frame instants; everything else
//! (measurement, circles to paint) is read back from here.

use std::time::Instant;

use super::animator::{AnimatorFrame, ReversingAnimator, ValueAnimator};
use super::config::DotsConfig;
use super::cycle::{AnimationCursor, DOT_COUNT};
use super::geometry::{self, Circle};
use super::state::DotFrame;

/// The cursor returns to its initial state after this many boundaries
const BOUNDARY_PERIOD: u64 = 2 * DOT_COUNT as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Stopped,
    Running,
}

/// Three-dots loading indicator state
#[derive(Debug)]
pub struct DotsProgress<A: ValueAnimator = ReversingAnimator> {
    config: DotsConfig,
    frame: DotFrame,
    cursor: AnimationCursor,
    run: Option<A>,
    visible: bool,
}

impl<A: ValueAnimator> DotsProgress<A> {
    /// Build an indicator; a visible one starts animating right away
    pub fn new(config: DotsConfig, visible: bool, now: Instant) -> Self {
        let mut progress = Self {
            config,
            frame: DotFrame::resting(&config),
            cursor: AnimationCursor::new(),
            run: None,
            visible,
        };
        if visible {
            progress.start(now);
        }
        progress
    }

    pub fn config(&self) -> &DotsConfig {
        &self.config
    }

    /// Latest committed snapshot
    pub fn frame(&self) -> DotFrame {
        self.frame
    }

    pub fn cursor(&self) -> AnimationCursor {
        self.cursor
    }

    pub fn active_dot(&self) -> usize {
        self.cursor.active_dot()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.run.is_some() {
            Lifecycle::Running
        } else {
            Lifecycle::Stopped
        }
    }

    /// Visibility hook. Becoming visible always begins a fresh run on the
    /// current dot; hiding cancels the run and keeps the last snapshot.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        self.visible = visible;
        if visible {
            self.start(now);
        } else {
            self.stop();
        }
    }

    fn start(&mut self, now: Instant) {
        self.cursor.begin_run();
        tracing::debug!("Dots animation started at dot {}", self.cursor.active_dot());
        self.run = Some(A::start(self.config.speed(), self.config.easing, now));
    }

    fn stop(&mut self) {
        if self.run.take().is_some() {
            tracing::debug!("Dots animation stopped");
        }
    }

    /// Frame-clock hook. Returns `true` when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let frame = run.tick(now);
        self.apply(frame);
        true
    }

    fn apply(&mut self, frame: AnimatorFrame) {
        for _ in 0..(frame.repeats % BOUNDARY_PERIOD) {
            self.apply_repeat();
        }
        self.apply_update(frame.fraction);
    }

    /// Handle one repeat boundary of the running animator
    pub fn apply_repeat(&mut self) {
        if self.cursor.on_repeat() {
            tracing::debug!("Dots focus moved to dot {}", self.cursor.active_dot());
        }
    }

    /// Recompute all dots for `fraction` on the active dot
    pub fn apply_update(&mut self, fraction: f32) -> DotFrame {
        self.frame = DotFrame::compute(&self.config, self.cursor.active_dot(), fraction);
        self.frame
    }

    /// Fixed `(width, height)`
    pub fn measure(&self) -> (i32, i32) {
        geometry::measure(self.config.dot_size_big)
    }

    pub fn circles(&self) -> [Circle; DOT_COUNT] {
        geometry::circles(&self.frame, self.config.dot_size_big)
    }
}
