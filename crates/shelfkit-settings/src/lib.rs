//! ShelfKit Settings Crate
//!
//! Handles application configuration: grid dimensions, module defaults,
//! display units and where the working configuration is persisted.

pub mod config;
pub mod error;

pub use config::{Config, DisplaySettings, GridSettings, ModuleSettings, StorageSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
