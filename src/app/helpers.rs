//! Settings helpers for the demo host

use anyhow::Context;

use three_dots_progress::features::{Settings, SettingsError};

/// Resolve settings, falling back to defaults on any failure
pub fn load_settings() -> Settings {
    match try_load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Using default settings: {:#}", e);
            Settings::default()
        }
    }
}

fn try_load_settings() -> anyhow::Result<Settings> {
    let path = Settings::file_path().context("Could not determine config directory")?;

    if !path.exists() {
        tracing::info!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let settings = Settings::load_from_file(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    tracing::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Persist settings off the UI thread
pub async fn save_settings(settings: Settings) -> Result<(), SettingsError> {
    settings.save()
}
