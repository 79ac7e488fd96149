//! # Preset Library
//!
//! Built-in module arrangements offered as starting points. Presets carry no
//! ids; loading one assigns fresh ids through the same record path as import.

use shelfkit_core::PresetError;

use crate::model::{Configuration, Module, ModuleRecord};

/// One module of a preset, without an id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetModule {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub color: &'static str,
    pub grid_x: i32,
    pub grid_y: i32,
    pub grid_z: i32,
}

impl PresetModule {
    const fn cell(width: f64, height: f64, depth: f64, color: &'static str, x: i32, y: i32) -> Self {
        Self {
            width,
            height,
            depth,
            color,
            grid_x: x,
            grid_y: y,
            grid_z: 0,
        }
    }

    pub fn to_record(&self) -> ModuleRecord {
        ModuleRecord {
            id: None,
            width: Some(self.width),
            height: Some(self.height),
            depth: Some(self.depth),
            color: Some(self.color.to_string()),
            grid_x: Some(self.grid_x),
            grid_y: Some(self.grid_y),
            grid_z: Some(self.grid_z),
        }
    }
}

/// A named module template.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Lookup key, e.g. `"tv-lowboard"`
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub description: &'static str,
    pub modules: &'static [PresetModule],
}

impl Preset {
    /// Instantiate the template with fresh module ids.
    pub fn instantiate(&self) -> Vec<Module> {
        self.modules
            .iter()
            .map(|m| Module::from_record(m.to_record()))
            .collect()
    }

    /// A new configuration named after this preset.
    pub fn to_configuration(&self) -> Configuration {
        Configuration::with_modules(self.name, self.instantiate())
    }
}

const GRAPHITE: &str = "#3b3b3b";
const OAK: &str = "#c8a97e";
const WHITE: &str = "#f2efe9";
const SAGE: &str = "#9caf88";

const TV_LOWBOARD: &[PresetModule] = &[
    PresetModule::cell(1.0, 0.5, 1.0, GRAPHITE, 0, 0),
    PresetModule::cell(1.0, 0.5, 1.0, GRAPHITE, 1, 0),
    PresetModule::cell(1.0, 0.5, 1.0, GRAPHITE, 2, 0),
];

const SIDEBOARD: &[PresetModule] = &[
    PresetModule::cell(1.0, 0.75, 1.0, OAK, 0, 0),
    PresetModule::cell(1.0, 0.75, 1.0, OAK, 1, 0),
    PresetModule::cell(1.0, 0.75, 1.0, OAK, 0, 1),
    PresetModule::cell(1.0, 0.75, 1.0, OAK, 1, 1),
];

const BOOKSHELF: &[PresetModule] = &[
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 0, 0),
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 0, 1),
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 0, 2),
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 0, 3),
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 1, 0),
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 1, 1),
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 1, 2),
    PresetModule::cell(1.0, 1.0, 0.75, WHITE, 1, 3),
];

const NIGHTSTAND: &[PresetModule] = &[
    PresetModule::cell(1.0, 0.5, 1.0, SAGE, 0, 0),
    PresetModule::cell(1.0, 0.5, 1.0, SAGE, 0, 1),
];

/// All built-in presets, in display order.
pub const PRESETS: &[Preset] = &[
    Preset {
        key: "tv-lowboard",
        name: "TV lowboard",
        description: "Three low units in a row",
        modules: TV_LOWBOARD,
    },
    Preset {
        key: "sideboard",
        name: "Sideboard",
        description: "Two by two block of mid-height units",
        modules: SIDEBOARD,
    },
    Preset {
        key: "bookshelf",
        name: "Bookshelf",
        description: "Two columns, four units tall",
        modules: BOOKSHELF,
    },
    Preset {
        key: "nightstand",
        name: "Nightstand",
        description: "Two low units stacked",
        modules: NIGHTSTAND,
    },
];

pub fn presets() -> &'static [Preset] {
    PRESETS
}

/// Look up a preset by key.
pub fn find_preset(key: &str) -> Result<&'static Preset, PresetError> {
    PRESETS
        .iter()
        .find(|p| p.key == key)
        .ok_or_else(|| PresetError::UnknownPreset {
            key: key.to_string(),
        })
}
