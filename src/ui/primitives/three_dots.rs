//! Three-dots loading indicator primitive
//!
//! Paints a [`DotFrame`] snapshot as three filled circles. The widget always
//! lays out at exactly three big-dot slots by one big dot, whatever limits
//! its parent passes down.
//!
//! # Design
//!
//! This is a primitive component - it holds no animation state of its own.
//! The owning state ([`DotsProgress`]) is ticked by the application and the
//! primitive is rebuilt from its latest snapshot on every view.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Quad};
use iced::advanced::widget::{self, Widget};
use iced::{Border, Color, Element, Length, Point, Rectangle, Size, Theme, mouse};

use crate::features::dots::{Circle, DOT_COUNT, DotFrame, DotsProgress, ValueAnimator};

/// Create a three-dots element from the indicator's current state
pub fn view<'a, Message: 'a, A: ValueAnimator>(
    progress: &DotsProgress<A>,
) -> Element<'a, Message> {
    ThreeDots::new(progress).into()
}

/// Three filled circles with a fixed footprint
#[derive(Debug, Clone, Copy)]
pub struct ThreeDots {
    circles: [Circle; DOT_COUNT],
    size: Size,
}

impl ThreeDots {
    pub fn new<A: ValueAnimator>(progress: &DotsProgress<A>) -> Self {
        let (width, height) = progress.measure();
        Self {
            circles: progress.circles(),
            size: Size::new(width.max(0) as f32, height.max(0) as f32),
        }
    }

    /// Build from a raw snapshot, e.g. for a static preview
    pub fn from_frame(frame: &DotFrame, big_diameter: i32) -> Self {
        let (width, height) = crate::features::dots::measure(big_diameter);
        Self {
            circles: crate::features::dots::circles(frame, big_diameter),
            size: Size::new(width.max(0) as f32, height.max(0) as f32),
        }
    }

    pub fn measured_size(&self) -> Size {
        self.size
    }
}

/// Bounding square of a circle placed relative to `origin`.
/// Circles without a positive radius paint nothing.
pub fn circle_bounds(origin: Point, circle: &Circle) -> Option<Rectangle> {
    if circle.radius <= 0 {
        return None;
    }
    let radius = circle.radius as f32;
    Some(Rectangle {
        x: origin.x + circle.center_x as f32 - radius,
        y: origin.y + circle.center_y as f32 - radius,
        width: radius * 2.0,
        height: radius * 2.0,
    })
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for ThreeDots
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.size.width), Length::Fixed(self.size.height))
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        _limits: &layout::Limits,
    ) -> layout::Node {
        // Hard override: the parent's limits are not consulted
        layout::Node::new(self.size)
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let origin = layout.bounds().position();

        for circle in &self.circles {
            let Some(bounds) = circle_bounds(origin, circle) else {
                continue;
            };
            renderer.fill_quad(
                Quad {
                    bounds,
                    border: Border {
                        radius: (bounds.width / 2.0).into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                Color::from(circle.color),
            );
        }
    }
}

impl<'a, Message: 'a> From<ThreeDots> for Element<'a, Message> {
    fn from(widget: ThreeDots) -> Self {
        Element::new(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dots::{Argb, DotsConfig};

    fn config() -> DotsConfig {
        DotsConfig {
            dot_size_normal: 20,
            dot_size_big: 30,
            ..DotsConfig::default()
        }
    }

    #[test]
    fn test_measured_size_is_fixed() {
        let dots = ThreeDots::from_frame(&DotFrame::resting(&config()), 30);
        assert_eq!(dots.measured_size(), Size::new(90.0, 30.0));
    }

    #[test]
    fn test_layout_ignores_parent_limits() {
        let mut dots = ThreeDots::from_frame(&DotFrame::resting(&config()), 30);
        let mut tree = widget::Tree::empty();

        let tight = layout::Limits::new(Size::ZERO, Size::new(10.0, 10.0));
        let node = Widget::<(), Theme, ()>::layout(&mut dots, &mut tree, &(), &tight);
        assert_eq!(node.size(), Size::new(90.0, 30.0));

        let loose = layout::Limits::new(Size::ZERO, Size::new(1_000.0, 1_000.0));
        let node = Widget::<(), Theme, ()>::layout(&mut dots, &mut tree, &(), &loose);
        assert_eq!(node.size(), Size::new(90.0, 30.0));
    }

    #[test]
    fn test_circle_bounds_offset_by_origin() {
        let circle = Circle {
            center_x: 45,
            center_y: 15,
            radius: 10,
            color: Argb::WHITE,
        };
        let bounds = circle_bounds(Point::new(100.0, 50.0), &circle).unwrap();
        assert_eq!(bounds, Rectangle::new(Point::new(135.0, 55.0), Size::new(20.0, 20.0)));
    }

    #[test]
    fn test_degenerate_circles_are_skipped() {
        let cfg = DotsConfig {
            dot_size_normal: -4,
            dot_size_big: 1,
            ..DotsConfig::default()
        };
        let dots = ThreeDots::from_frame(&DotFrame::resting(&cfg), cfg.dot_size_big);
        assert!(
            dots.circles
                .iter()
                .all(|c| circle_bounds(Point::ORIGIN, c).is_none())
        );
    }

    #[test]
    fn test_negative_size_measures_empty() {
        let dots = ThreeDots::from_frame(&DotFrame::resting(&config()), -5);
        assert_eq!(dots.measured_size(), Size::ZERO);
    }
}
