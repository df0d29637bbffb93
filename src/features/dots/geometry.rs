//! Measurement and circle placement
//!
//! Every dot gets a slot as wide as a fully grown dot, so a growing dot
//! never pushes its neighbours around.

use super::color::Argb;
use super::cycle::DOT_COUNT;
use super::state::DotFrame;

/// A filled circle in widget-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
    pub color: Argb,
}

/// Fixed `(width, height)` of the indicator, ignoring any container hint.
/// Oversized diameters wrap instead of panicking.
pub fn measure(big_diameter: i32) -> (i32, i32) {
    (big_diameter.wrapping_mul(DOT_COUNT as i32), big_diameter)
}

/// Circles to paint, left to right
pub fn circles(frame: &DotFrame, big_diameter: i32) -> [Circle; DOT_COUNT] {
    let dots = frame.dots();
    std::array::from_fn(|i| Circle {
        center_x: big_diameter
            .wrapping_mul(i as i32)
            .wrapping_add(big_diameter / 2),
        center_y: big_diameter / 2,
        radius: dots[i].size / 2,
        color: dots[i].color,
    })
}
