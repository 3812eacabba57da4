//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use todoli_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";

/// Default configuration directory (`~/.config/todoli` on Linux)
pub fn default_config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("todoli")
}

/// Load settings from `<config_dir>/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config.toml in the config directory
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .context(format!("Failed to create {:?}", config_dir))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Todoli Configuration

[ui]
theme = "system"        # "system", "light", or "dark"

[behavior]
confirm_quit = true     # Ask before quitting with unsaved changes
"#;
        std::fs::write(&config_path, default_content)
            .context(format!("Failed to write {:?}", config_path))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(())
}
