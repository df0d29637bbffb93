//! Message update handlers

use std::time::Instant;

use iced::Task;

use super::{App, Message, helpers};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimationTick(now) => {
                // The returned redraw request is implied: iced re-runs view
                // after every update
                self.dots.tick(now);
                Task::none()
            }
            Message::ToggleVisibility => {
                let visible = !self.dots.is_visible();
                self.dots.set_visible(visible, Instant::now());
                tracing::info!("Indicator {}", if visible { "shown" } else { "hidden" });

                self.settings.start_visible = visible;
                Task::perform(
                    helpers::save_settings(self.settings.clone()),
                    Message::SettingsSaved,
                )
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Task::none()
            }
        }
    }
}
