//! # ShelfKit
//!
//! Grid configurator for modular shelving units:
//! - Placement rules: floor, support and non-overlap on a discrete 3D grid
//! - Overall envelope in grid units and millimeters
//! - JSON export/import with lenient module decoding
//! - Built-in presets and write-through persistence
//!
//! ## Architecture
//!
//! ShelfKit is organized as a workspace with multiple crates:
//!
//! 1. **shelfkit-core** - Error taxonomy, units, grid constants
//! 2. **shelfkit-configurator** - Model, validator, bounds, serialization, presets, state
//! 3. **shelfkit-settings** - Configuration file handling
//! 4. **shelfkit** - Command-line front end that integrates all crates

pub mod cli;

pub use shelfkit_configurator as configurator;
pub use shelfkit_settings as settings;

pub use shelfkit_configurator::{
    Configuration, ConfigurationBounds, ConfiguratorOptions, ConfiguratorState, FileStore,
    GridPosition, MemoryStore, Module,
};
pub use shelfkit_core::MeasurementSystem;
pub use shelfkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Configurator options derived from the settings file
pub fn configurator_options(config: &Config) -> ConfiguratorOptions {
    ConfiguratorOptions {
        unit_spacing: config.grid.unit_spacing,
        grid_unit_mm: config.grid.unit_mm,
        default_color: config.modules.default_color.clone(),
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so command output on stdout stays parseable
/// - RUST_LOG environment variable support
/// - `level` as the default directive
pub fn init_logging(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
