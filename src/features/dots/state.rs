//! Per-dot visual state and per-tick snapshots

use super::color::{Argb, interpolate_color};
use super::config::DotsConfig;
use super::cycle::DOT_COUNT;

/// Visual state of a single dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotState {
    pub color: Argb,
    /// Diameter in pixels
    pub size: i32,
}

impl DotState {
    pub fn normal(config: &DotsConfig) -> Self {
        Self {
            color: config.dot_color_normal,
            size: config.dot_size_normal,
        }
    }
}

/// Immutable snapshot of all dots, rebuilt on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotFrame {
    dots: [DotState; DOT_COUNT],
}

impl DotFrame {
    /// Every dot at its normal size and color
    pub fn resting(config: &DotsConfig) -> Self {
        Self {
            dots: [DotState::normal(config); DOT_COUNT],
        }
    }

    /// Snapshot with `active` animated at `fraction`, the rest forced to normal
    pub fn compute(config: &DotsConfig, active: usize, fraction: f32) -> Self {
        let mut frame = Self::resting(config);
        if let Some(dot) = frame.dots.get_mut(active) {
            *dot = DotState {
                color: interpolate_color(fraction, config.dot_color_normal, config.dot_color_big),
                size: interpolate_size(fraction, config.dot_size_normal, config.dot_size_big),
            };
        }
        frame
    }

    pub fn dots(&self) -> &[DotState; DOT_COUNT] {
        &self.dots
    }

    pub fn get(&self, index: usize) -> Option<&DotState> {
        self.dots.get(index)
    }
}

/// `normal + trunc((big - normal) * fraction)`, wrapping on overflow
pub fn interpolate_size(fraction: f32, normal: i32, big: i32) -> i32 {
    normal.wrapping_add((big.wrapping_sub(normal) as f32 * fraction) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DotsConfig {
        DotsConfig {
            dot_size_normal: 20,
            dot_size_big: 30,
            dot_color_normal: Argb::BLACK,
            dot_color_big: Argb::WHITE,
            ..DotsConfig::default()
        }
    }

    #[test]
    fn test_size_endpoints() {
        for (normal, big) in [(20, 30), (8, 12), (30, 20), (0, 7), (5, 5)] {
            assert_eq!(interpolate_size(0.0, normal, big), normal);
            assert_eq!(interpolate_size(1.0, normal, big), big);
        }
    }

    #[test]
    fn test_size_extremes_do_not_panic() {
        assert_eq!(interpolate_size(0.0, i32::MIN, i32::MAX), i32::MIN);
        assert_eq!(interpolate_size(1.0, 0, i32::MAX), i32::MAX);
        assert_eq!(interpolate_size(1.0, i32::MIN, 0), 0);
        let _ = interpolate_size(0.5, i32::MAX, i32::MIN);
    }

    #[test]
    fn test_size_truncates() {
        assert_eq!(interpolate_size(0.5, 20, 30), 25);
        assert_eq!(interpolate_size(0.99, 20, 30), 29);
        assert_eq!(interpolate_size(0.5, 8, 13), 10);
    }

    #[test]
    fn test_midpoint_scenario() {
        let frame = DotFrame::compute(&config(), 0, 0.5);
        let dot = frame.get(0).unwrap();
        assert_eq!(dot.size, 25);
        assert_eq!(dot.color, Argb(0xFF7F_7F7F));
    }

    #[test]
    fn test_only_active_dot_differs() {
        let cfg = config();
        let normal = DotState::normal(&cfg);
        for active in 0..DOT_COUNT {
            for fraction in [0.1, 0.5, 0.9, 1.0] {
                let frame = DotFrame::compute(&cfg, active, fraction);
                let changed: Vec<usize> = frame
                    .dots()
                    .iter()
                    .enumerate()
                    .filter(|(_, dot)| **dot != normal)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(changed, vec![active]);
            }
        }
    }

    #[test]
    fn test_zero_fraction_is_resting() {
        let cfg = config();
        assert_eq!(DotFrame::compute(&cfg, 1, 0.0), DotFrame::resting(&cfg));
    }
}
