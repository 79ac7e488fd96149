//! # Configurator Model
//!
//! Modules placed on the discrete grid and the configurations that own them.
//!
//! Every [`Module`] is built either directly through [`Module::new`] or from an
//! untrusted [`ModuleRecord`] through [`Module::from_record`]. Both paths apply
//! the same defaults and clamping, so a module never exists with a missing
//! field or a non-positive size.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use shelfkit_core::constants::{
    DEFAULT_COLOR, DEFAULT_CONFIGURATION_NAME, DEFAULT_DIMENSION, MIN_DIMENSION,
};

/// Generate a fresh opaque identifier.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A cell of the grid lattice. `y` is the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell directly beneath this one, if the lattice extends that far.
    pub fn below(&self) -> Option<Self> {
        self.y.checked_sub(1).map(|y| Self::new(self.x, y, self.z))
    }

    /// The cell directly above this one, if the lattice extends that far.
    pub fn above(&self) -> Option<Self> {
        self.y.checked_add(1).map(|y| Self::new(self.x, y, self.z))
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Clamp an untrusted size value.
///
/// Absent or non-finite values fall back to the default size; everything
/// else is raised to at least [`MIN_DIMENSION`].
pub fn clamp_dimension(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.max(MIN_DIMENSION),
        _ => DEFAULT_DIMENSION,
    }
}

/// One rectangular furniture block.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub color: String,
    pub grid_x: i32,
    pub grid_y: i32,
    pub grid_z: i32,
}

impl Module {
    /// Create a module with a fresh id. Sizes are clamped.
    pub fn new(
        width: f64,
        height: f64,
        depth: f64,
        color: impl Into<String>,
        position: GridPosition,
    ) -> Self {
        Self {
            id: generate_id(),
            width: clamp_dimension(Some(width)),
            height: clamp_dimension(Some(height)),
            depth: clamp_dimension(Some(depth)),
            color: color.into(),
            grid_x: position.x,
            grid_y: position.y,
            grid_z: position.z,
        }
    }

    /// Default unit cube at `position`.
    pub fn unit(position: GridPosition) -> Self {
        Self::new(
            DEFAULT_DIMENSION,
            DEFAULT_DIMENSION,
            DEFAULT_DIMENSION,
            DEFAULT_COLOR,
            position,
        )
    }

    /// Build a module from a decoded record, filling every absent field.
    pub fn from_record(record: ModuleRecord) -> Self {
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_id);
        let color = record
            .color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());

        Self {
            id,
            width: clamp_dimension(record.width),
            height: clamp_dimension(record.height),
            depth: clamp_dimension(record.depth),
            color,
            grid_x: record.grid_x.unwrap_or(0),
            grid_y: record.grid_y.unwrap_or(0),
            grid_z: record.grid_z.unwrap_or(0),
        }
    }

    pub fn position(&self) -> GridPosition {
        GridPosition::new(self.grid_x, self.grid_y, self.grid_z)
    }

    pub fn set_position(&mut self, position: GridPosition) {
        self.grid_x = position.x;
        self.grid_y = position.y;
        self.grid_z = position.z;
    }

    /// Change the size, clamping each axis.
    pub fn resize(&mut self, width: f64, height: f64, depth: f64) {
        self.width = clamp_dimension(Some(width));
        self.height = clamp_dimension(Some(height));
        self.depth = clamp_dimension(Some(depth));
    }

    /// Interchange representation of this module.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "width": self.width,
            "height": self.height,
            "depth": self.depth,
            "color": self.color,
            "gridX": self.grid_x,
            "gridY": self.grid_y,
            "gridZ": self.grid_z,
        })
    }
}

/// A module as it arrives from import text or a preset: any field may be absent.
///
/// Decoding never fails on a JSON object. Fields with the wrong type, non-finite
/// numbers and grid coordinates outside the `i32` range are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub depth: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient_cell")]
    pub grid_x: Option<i32>,
    #[serde(deserialize_with = "lenient_cell")]
    pub grid_y: Option<i32>,
    #[serde(deserialize_with = "lenient_cell")]
    pub grid_z: Option<i32>,
}

impl ModuleRecord {
    /// Decode a record from loosely-typed JSON.
    ///
    /// A value that is not an object yields an empty record.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

/// Any string, or `None` for every other JSON type.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|v| v.is_finite()))
}

/// A grid coordinate: rounded to the nearest cell, absent when out of range.
fn lenient_cell<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.and_then(|v| {
        let cell = v.round();
        (cell >= f64::from(i32::MIN) && cell <= f64::from(i32::MAX)).then_some(cell as i32)
    }))
}

/// A named, ordered set of modules.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub id: String,
    pub name: String,
    pub modules: Vec<Module>,
}

impl Configuration {
    /// Create an empty configuration with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            modules: Vec::new(),
        }
    }

    pub fn with_modules(name: impl Into<String>, modules: Vec<Module>) -> Self {
        Self {
            modules,
            ..Self::new(name)
        }
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn module_mut(&mut self, id: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.id == id)
    }

    /// The module occupying `position`, if any.
    pub fn module_at(&self, position: GridPosition) -> Option<&Module> {
        self.modules.iter().find(|m| m.position() == position)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Interchange representation of this configuration.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "modules": self.modules.iter().map(Module::to_json).collect::<Vec<_>>(),
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIGURATION_NAME)
    }
}
