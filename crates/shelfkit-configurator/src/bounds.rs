//! # Bounding Box Aggregator
//!
//! Computes the overall envelope of a configuration in grid units and
//! millimeters.
//!
//! Each module is placed in world space as a box centered at
//! `(gridX * S, height / 2 + gridY * S, gridZ * S)` with half extents
//! `(width / 2, height / 2, depth / 2)`, where `S` is the unit spacing. The
//! envelope is the per-axis union of those boxes.

use crate::model::Module;
use nalgebra::{Point3, Vector3};
use shelfkit_core::constants::UNIT_SPACING;
use shelfkit_core::units::{format_length, get_unit_label, units_to_mm};
use shelfkit_core::MeasurementSystem;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb3 {
    pub fn from_center(center: Point3<f64>, half_extents: Vector3<f64>) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Aabb3) -> Aabb3 {
        Aabb3 {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }
}

/// Module size with non-finite dimensions replaced by zero.
pub fn module_size(module: &Module) -> Vector3<f64> {
    Vector3::new(
        finite_or_zero(module.width),
        finite_or_zero(module.height),
        finite_or_zero(module.depth),
    )
}

/// World-space center of a module.
pub fn world_position(module: &Module, unit_spacing: f64) -> Point3<f64> {
    let size = module_size(module);
    Point3::new(
        module.grid_x as f64 * unit_spacing,
        size.y / 2.0 + module.grid_y as f64 * unit_spacing,
        module.grid_z as f64 * unit_spacing,
    )
}

/// World-space box occupied by a module.
pub fn module_box(module: &Module, unit_spacing: f64) -> Aabb3 {
    Aabb3::from_center(world_position(module, unit_spacing), module_size(module) / 2.0)
}

/// Overall envelope of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfigurationBounds {
    pub width_units: f64,
    pub height_units: f64,
    pub depth_units: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

impl ConfigurationBounds {
    /// `true` when every axis spans zero.
    pub fn is_empty(&self) -> bool {
        self.width_units == 0.0 && self.height_units == 0.0 && self.depth_units == 0.0
    }

    /// Human-readable "W × H × D unit" summary.
    pub fn describe(&self, system: MeasurementSystem) -> String {
        format!(
            "{} × {} × {} {}",
            format_length(self.width_mm, system),
            format_length(self.height_mm, system),
            format_length(self.depth_mm, system),
            get_unit_label(system)
        )
    }
}

/// Envelope of `modules` using the standard unit spacing.
pub fn compute_bounds(modules: &[Module], grid_unit_mm: f64) -> ConfigurationBounds {
    compute_bounds_with_spacing(modules, UNIT_SPACING, grid_unit_mm)
}

/// Envelope of `modules` with an explicit unit spacing.
pub fn compute_bounds_with_spacing(
    modules: &[Module],
    unit_spacing: f64,
    grid_unit_mm: f64,
) -> ConfigurationBounds {
    let Some(envelope) = modules
        .iter()
        .map(|m| module_box(m, unit_spacing))
        .reduce(|acc, b| acc.union(&b))
    else {
        return ConfigurationBounds::default();
    };

    let span = envelope.size();
    ConfigurationBounds {
        width_units: span.x,
        height_units: span.y,
        depth_units: span.z,
        width_mm: units_to_mm(span.x, grid_unit_mm),
        height_mm: units_to_mm(span.y, grid_unit_mm),
        depth_mm: units_to_mm(span.z, grid_unit_mm),
    }
}
