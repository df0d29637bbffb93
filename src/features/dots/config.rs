//! Indicator configuration
//!
//! Every field is optional in the settings file; missing ones fall back to
//! the coded defaults below.

use serde::{Deserialize, Serialize};

use super::animator::Easing;
use super::color::Argb;

/// Default leg duration in milliseconds
pub const DEFAULT_SPEED_MS: u64 = 200;
pub const DEFAULT_DOT_SIZE_NORMAL: i32 = 8;
pub const DEFAULT_DOT_SIZE_BIG: i32 = 12;
/// Muted gray
pub const DEFAULT_DOT_COLOR_NORMAL: Argb = Argb(0xFF88_8888);
/// Accent pink
pub const DEFAULT_DOT_COLOR_BIG: Argb = Argb(0xFFFF_1493);

/// Immutable configuration of a three-dots indicator.
///
/// Sizes are not validated: zero or negative values render degenerate
/// (empty) dots instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotsConfig {
    /// Diameter of a resting dot (px)
    pub dot_size_normal: i32,
    /// Diameter of a fully grown dot (px), also the width of each slot
    pub dot_size_big: i32,
    pub dot_color_normal: Argb,
    pub dot_color_big: Argb,
    /// Duration of one grow (or shrink) leg
    #[serde(rename = "dot_speed")]
    pub speed_ms: u64,
    pub easing: Easing,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            dot_size_normal: DEFAULT_DOT_SIZE_NORMAL,
            dot_size_big: DEFAULT_DOT_SIZE_BIG,
            dot_color_normal: DEFAULT_DOT_COLOR_NORMAL,
            dot_color_big: DEFAULT_DOT_COLOR_BIG,
            speed_ms: DEFAULT_SPEED_MS,
            easing: Easing::default(),
        }
    }
}

impl DotsConfig {
    pub fn speed(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.speed_ms)
    }
}
