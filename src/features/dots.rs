//! Three-dots loading indicator logic
//!
//! Three dots sit in a row; one at a time grows to its big size and color
//! and shrinks back, then focus moves to the next dot. The animation only
//! runs while the indicator is visible.
//!
//! # Contents
//!
//! - [`DotsProgress`] - Visibility lifecycle and per-frame update
//! - [`ReversingAnimator`] - Forward/reverse leg clock behind [`ValueAnimator`]
//! - [`interpolate_color`] - Per-channel ARGB interpolation
//! - [`DotFrame`] - Immutable snapshot handed to the renderer

mod animator;
mod color;
mod config;
mod cycle;
mod geometry;
mod indicator;
mod state;

pub use animator::{AnimatorFrame, Easing, ReversingAnimator, ValueAnimator};
pub use color::{Argb, ParseArgbError, interpolate_color};
pub use config::{
    DEFAULT_DOT_COLOR_BIG, DEFAULT_DOT_COLOR_NORMAL, DEFAULT_DOT_SIZE_BIG, DEFAULT_DOT_SIZE_NORMAL,
    DEFAULT_SPEED_MS, DotsConfig,
};
pub use cycle::{AnimationCursor, BoundaryPhase, DOT_COUNT};
pub use geometry::{Circle, circles, measure};
pub use indicator::{DotsProgress, Lifecycle};
pub use state::{DotFrame, DotState, interpolate_size};
