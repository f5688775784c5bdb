//! Configuration management for agenda.
//!
//! This module resolves the files under `~/.agenda/` and loads the settings.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    ChartConfig, ColorSetting, Config, GeneralConfig, InvalidLinePolicy, StorageConfig,
    ThemeConfig,
};
