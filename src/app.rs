//! Demo application hosting the three-dots indicator

pub mod helpers;
mod message;
mod update;
mod view;

use std::time::Instant;

use iced::{Task, Theme};

use three_dots_progress::features::{DotsProgress, Lifecycle, Settings};

pub use message::Message;

pub struct App {
    settings: Settings,
    dots: DotsProgress,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = helpers::load_settings();
        let dots = DotsProgress::new(settings.dots, settings.start_visible, Instant::now());
        tracing::info!(
            "Indicator configured: normal {}px {}, big {}px {}, {} ms",
            settings.dots.dot_size_normal,
            settings.dots.dot_color_normal,
            settings.dots.dot_size_big,
            settings.dots.dot_color_big,
            settings.dots.speed_ms
        );

        (Self { settings, dots }, Task::none())
    }

    pub fn title(&self) -> String {
        "Three Dots Progress".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Frames are only requested while the animation runs
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if subscription_logic::needs_frames(self.dots.lifecycle()) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use super::Lifecycle;

    pub fn needs_frames(lifecycle: Lifecycle) -> bool {
        lifecycle == Lifecycle::Running
    }
}
