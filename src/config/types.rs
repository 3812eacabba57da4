//! Configuration types for Todoli
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub behavior: BehaviorSettings,
}

/// Appearance settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Color theme: "system", "light", or "dark"
    pub theme: Theme,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
        }
    }
}

/// Color theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::System => write!(f, "system"),
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Ask before quitting with unsaved changes
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}
