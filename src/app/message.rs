//! Application messages

use std::time::Instant;

use three_dots_progress::features::SettingsError;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Display-synchronized frame from `window::frames()`
    AnimationTick(Instant),
    /// Show or hide the indicator
    ToggleVisibility,
    /// Background settings write finished
    SettingsSaved(Result<(), SettingsError>),
}
