//! Import/export, presets and persistence for configurator state.

use shelfkit_core::{FormatError, PresetError};

use super::ConfiguratorState;
use crate::model::Configuration;
use crate::presets::find_preset;
use crate::serialization::{parse, serialize};
use crate::validator::{check_invariants, InvariantViolation};

impl ConfiguratorState {
    /// Exports the configuration as JSON text.
    pub fn export_json(&self) -> String {
        serialize(&self.configuration)
    }

    /// Imports JSON text, replacing every module.
    ///
    /// The imported id and name are adopted when present. On failure the
    /// current configuration is left untouched. Returns the module count.
    pub fn import_json(&mut self, text: &str) -> Result<usize, FormatError> {
        let imported = parse(text)?;

        let configuration = Configuration {
            id: imported
                .id
                .unwrap_or_else(|| self.configuration.id.clone()),
            name: imported
                .name
                .unwrap_or_else(|| self.configuration.name.clone()),
            modules: imported.modules,
        };
        let count = configuration.len();

        let violations = check_invariants(&configuration.modules);
        if !violations.is_empty() {
            tracing::warn!(
                "Imported configuration has {} invariant violations; keeping it as-is",
                violations.len()
            );
        }

        self.replace_configuration(configuration);
        self.persist();
        tracing::info!("Imported {} modules", count);
        Ok(count)
    }

    /// Replaces the configuration with a preset.
    pub fn load_preset(&mut self, key: &str) -> Result<(), PresetError> {
        let preset = find_preset(key)?;
        self.replace_configuration(preset.to_configuration());
        self.persist();
        tracing::info!("Loaded preset '{}'", preset.name);
        Ok(())
    }

    /// Starts over with an empty configuration.
    pub fn clear(&mut self) {
        self.replace_configuration(Configuration::default());
        self.persist();
    }

    /// Grid invariant violations in the current configuration.
    pub fn violations(&self) -> Vec<InvariantViolation> {
        check_invariants(&self.configuration.modules)
    }

    /// Writes through to the store. A failure is logged and kept for
    /// [`persist_error`](Self::persist_error); the in-memory edit stands.
    pub(crate) fn persist(&mut self) {
        self.persist_error = match self.store.save(&self.configuration) {
            Ok(()) => None,
            Err(e) => {
                tracing::debug!(code = e.code(), "Configuration not persisted: {}", e);
                Some(e)
            }
        };
    }
}
