//! Feature modules - indicator logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod dots;
pub mod settings;

pub use dots::{DotFrame, DotsConfig, DotsProgress, Lifecycle};
pub use settings::{Settings, SettingsError};
