//! Configurator state for front-end integration.
//! Owns the active configuration and routes every edit through the validator.
//!
//! This module is split into submodules:
//! - `modules`: add, remove, move, resize and recolor modules; selection
//! - `file_io`: import/export, presets and persistence

mod file_io;
mod modules;

use shelfkit_core::constants::{DEFAULT_COLOR, GRID_UNIT_MM, UNIT_SPACING};
use shelfkit_core::StorageError;

use crate::bounds::{compute_bounds_with_spacing, ConfigurationBounds};
use crate::model::{Configuration, Module};
use crate::scene::{scene_nodes, SceneNode};
use crate::store::ConfigurationStore;

/// Grid settings the configurator works with
#[derive(Clone, Debug, PartialEq)]
pub struct ConfiguratorOptions {
    /// World-space distance between adjacent cells
    pub unit_spacing: f64,
    /// Millimeters per grid unit
    pub grid_unit_mm: f64,
    /// Color given to newly added modules
    pub default_color: String,
}

impl Default for ConfiguratorOptions {
    fn default() -> Self {
        Self {
            unit_spacing: UNIT_SPACING,
            grid_unit_mm: GRID_UNIT_MM,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Session state of one configurator
pub struct ConfiguratorState {
    pub(crate) configuration: Configuration,
    pub(crate) selected_id: Option<String>,
    pub(crate) options: ConfiguratorOptions,
    pub(crate) store: Box<dyn ConfigurationStore>,
    pub(crate) persist_error: Option<StorageError>,
}

impl ConfiguratorState {
    /// Creates a configurator with an empty configuration.
    pub fn new(store: Box<dyn ConfigurationStore>) -> Self {
        Self::with_options(store, ConfiguratorOptions::default())
    }

    pub fn with_options(store: Box<dyn ConfigurationStore>, options: ConfiguratorOptions) -> Self {
        Self {
            configuration: Configuration::default(),
            selected_id: None,
            options,
            store,
            persist_error: None,
        }
    }

    /// Creates a configurator around an existing configuration.
    ///
    /// Nothing is written to the store until the first change.
    pub fn open(
        configuration: Configuration,
        store: Box<dyn ConfigurationStore>,
        options: ConfiguratorOptions,
    ) -> Self {
        let mut state = Self::with_options(store, options);
        state.replace_configuration(configuration);
        state
    }

    /// Creates a configurator from whatever the store holds.
    ///
    /// A store that is empty or cannot be read yields an empty configuration.
    pub fn restore(store: Box<dyn ConfigurationStore>, options: ConfiguratorOptions) -> Self {
        let mut state = Self::with_options(store, options);
        match state.store.load() {
            Ok(Some(configuration)) => {
                tracing::debug!(
                    "Restored configuration '{}' with {} modules",
                    configuration.name,
                    configuration.len()
                );
                state.replace_configuration(configuration);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(code = e.code(), "Could not restore configuration: {}", e);
            }
        }
        state
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn modules(&self) -> &[Module] {
        &self.configuration.modules
    }

    pub fn options(&self) -> &ConfiguratorOptions {
        &self.options
    }

    /// Why the most recent write to the store failed, if it did.
    ///
    /// Cleared by the next successful write.
    pub fn persist_error(&self) -> Option<&StorageError> {
        self.persist_error.as_ref()
    }

    /// Renames the configuration.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.configuration.name = name.into();
        self.persist();
    }

    /// Envelope of the current configuration.
    pub fn bounds(&self) -> ConfigurationBounds {
        compute_bounds_with_spacing(
            &self.configuration.modules,
            self.options.unit_spacing,
            self.options.grid_unit_mm,
        )
    }

    /// Renderer view of the current modules.
    pub fn scene_nodes(&self) -> Vec<SceneNode> {
        scene_nodes(&self.configuration.modules, self.options.unit_spacing)
    }

    /// Replace the whole configuration and select its first module.
    pub(crate) fn replace_configuration(&mut self, configuration: Configuration) {
        self.selected_id = configuration.modules.first().map(|m| m.id.clone());
        self.configuration = configuration;
    }
}

impl std::fmt::Debug for ConfiguratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguratorState")
            .field("configuration", &self.configuration)
            .field("selected_id", &self.selected_id)
            .field("options", &self.options)
            .field("persist_error", &self.persist_error)
            .finish_non_exhaustive()
    }
}
