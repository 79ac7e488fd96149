//! Grid and module constants.

/// World-space distance between the centers of adjacent grid cells.
pub const UNIT_SPACING: f64 = 1.0;

/// Physical length of one grid unit in millimeters.
pub const GRID_UNIT_MM: f64 = 350.0;

/// Smallest size a module may take on any axis, in grid units.
pub const MIN_DIMENSION: f64 = 0.1;

/// Size used for any axis missing from a module record.
pub const DEFAULT_DIMENSION: f64 = 1.0;

/// Color used for modules that do not carry one.
pub const DEFAULT_COLOR: &str = "#d8cfc4";

/// Name given to configurations created or imported without one.
pub const DEFAULT_CONFIGURATION_NAME: &str = "Untitled";
