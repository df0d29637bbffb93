//! Active-dot cursor and repeat-boundary phase

/// Number of dots in the indicator
pub const DOT_COUNT: usize = 3;

/// Which repeat boundary the cursor is waiting for.
///
/// A full grow-and-shrink cycle spans two animator legs, so the first
/// boundary (grown, about to shrink) is only a midpoint and the second one
/// (shrunk back) moves focus to the next dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPhase {
    #[default]
    AwaitingMidpoint,
    AwaitingAdvance,
}

/// Tracks the dot currently being animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationCursor {
    active_dot: usize,
    phase: BoundaryPhase,
}

impl AnimationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_dot(&self) -> usize {
        self.active_dot
    }

    pub fn phase(&self) -> BoundaryPhase {
        self.phase
    }

    /// Reset the boundary phase for a new animator run. The active dot
    /// is kept, so it still gets a full grow-and-shrink before focus moves.
    pub fn begin_run(&mut self) {
        self.phase = BoundaryPhase::AwaitingMidpoint;
    }

    /// Handle one repeat boundary. Returns `true` if focus moved.
    pub fn on_repeat(&mut self) -> bool {
        match self.phase {
            BoundaryPhase::AwaitingMidpoint => {
                self.phase = BoundaryPhase::AwaitingAdvance;
                false
            }
            BoundaryPhase::AwaitingAdvance => {
                self.active_dot = (self.active_dot + 1) % DOT_COUNT;
                self.phase = BoundaryPhase::AwaitingMidpoint;
                true
            }
        }
    }
}
