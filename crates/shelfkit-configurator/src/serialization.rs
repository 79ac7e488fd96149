//! Serialization and deserialization of configurations.
//!
//! The interchange format is the JSON shape kept in local storage and handed
//! to users for copy/paste:
//!
//! ```text
//! { "id": "...", "name": "...", "modules": [
//!   { "id": "...", "width": 1, "height": 1, "depth": 1,
//!     "color": "#d8cfc4", "gridX": 0, "gridY": 0, "gridZ": 0 } ] }
//! ```
//!
//! Import is lenient per module (absent fields take defaults, absent or
//! repeated ids are generated) but strict about the envelope: the text must be
//! JSON and carry a `modules` array.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use shelfkit_core::constants::DEFAULT_CONFIGURATION_NAME;
use shelfkit_core::FormatError;
use std::path::Path;

use crate::model::{generate_id, lenient_string, Configuration, Module, ModuleRecord};

/// Envelope of an import document. Modules are decoded one by one.
#[derive(Deserialize)]
struct Document {
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    modules: Option<Value>,
}

/// Give every module whose id was already used a fresh one.
fn assign_unique_ids(modules: &mut [Module]) {
    let mut seen = HashSet::new();
    for module in modules.iter_mut() {
        if !seen.insert(module.id.clone()) {
            let fresh = generate_id();
            tracing::debug!("Duplicate module id {} replaced by {}", module.id, fresh);
            module.id = fresh;
            seen.insert(module.id.clone());
        }
    }
}

/// A configuration decoded from import text.
///
/// `id` and `name` are kept optional so callers can tell whether the text
/// carried them.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedConfiguration {
    pub id: Option<String>,
    pub name: Option<String>,
    pub modules: Vec<Module>,
}

impl ImportedConfiguration {
    /// Decode from a parsed JSON value.
    pub fn from_value(value: &Value) -> std::result::Result<Self, FormatError> {
        if !value.is_object() {
            return Err(FormatError::invalid("expected a JSON object"));
        }
        let document = Document::deserialize(value)
            .map_err(|e| FormatError::invalid(e.to_string()))?;

        let mut modules: Vec<Module> = document
            .modules
            .ok_or_else(|| FormatError::invalid("missing \"modules\" field"))?
            .as_array()
            .ok_or_else(|| FormatError::invalid("\"modules\" must be an array"))?
            .iter()
            .map(|v| Module::from_record(ModuleRecord::from_value(v)))
            .collect();
        assign_unique_ids(&mut modules);

        let text = |field: Option<String>| field.filter(|s| !s.trim().is_empty());

        Ok(Self {
            id: text(document.id),
            name: text(document.name),
            modules,
        })
    }

    /// Fill in a fresh id and the default name where absent.
    pub fn into_configuration(self) -> Configuration {
        Configuration {
            id: self.id.unwrap_or_else(generate_id),
            name: self
                .name
                .unwrap_or_else(|| DEFAULT_CONFIGURATION_NAME.to_string()),
            modules: self.modules,
        }
    }
}

/// Serialize a configuration to pretty-printed JSON.
pub fn serialize(configuration: &Configuration) -> String {
    format!("{:#}", configuration.to_json())
}

/// Parse import text, keeping track of which envelope fields were present.
pub fn parse(text: &str) -> std::result::Result<ImportedConfiguration, FormatError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| FormatError::invalid(format!("not valid JSON: {}", e)))?;
    ImportedConfiguration::from_value(&value)
}

/// Deserialize import text into a configuration.
pub fn deserialize(text: &str) -> std::result::Result<Configuration, FormatError> {
    parse(text).map(ImportedConfiguration::into_configuration)
}

/// Save a configuration to a JSON file.
pub fn save_to_file(configuration: &Configuration, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path.as_ref(), serialize(configuration))
        .with_context(|| format!("Failed to write configuration to {}", path.as_ref().display()))
}

/// Load a configuration from a JSON file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Configuration> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    deserialize(&content).context("Failed to parse configuration file")
}
