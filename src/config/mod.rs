//! Configuration file parsing for Todoli
//!
//! Supports:
//! - `~/.config/todoli/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings};
pub use types::*;
