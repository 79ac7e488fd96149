//! # ShelfKit Configurator
//!
//! The grid configurator model behind the modular shelving builder: a set of
//! axis-aligned modules placed on a discrete 3D grid.
//!
//! ## Core Components
//!
//! - **Model**: modules, grid cells and configurations
//! - **Validator**: floor, support and occupancy rules for moves
//! - **Bounds**: overall envelope in grid units and millimeters
//! - **Serialization**: JSON export/import with lenient per-module decoding
//! - **Presets**: built-in starting arrangements
//! - **Store**: write-through persistence seam
//! - **Scene**: renderer reconciliation keyed by module id
//!
//! ## Architecture
//!
//! ```text
//! ConfiguratorState (session owner)
//!   ├── Validator (consulted before every move/removal)
//!   ├── Bounds / Scene (derived views)
//!   ├── Serialization / Presets (bulk replace)
//!   └── ConfigurationStore (best-effort persistence)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shelfkit_configurator::{ConfiguratorState, MemoryStore};
//!
//! let mut state = ConfiguratorState::new(Box::new(MemoryStore::new()));
//! let first = state.add_module();
//! let second = state.add_module();
//! state.move_module(&second, 0, 1, 0).unwrap();
//! assert_eq!(state.bounds().height_units, 2.0);
//! assert!(state.move_module(&first, 4, 0, 0).is_err());
//! ```

pub mod bounds;
pub mod configurator_state;
pub mod model;
pub mod presets;
pub mod scene;
pub mod serialization;
pub mod store;
pub mod validator;

pub use bounds::{compute_bounds, compute_bounds_with_spacing, Aabb3, ConfigurationBounds};
pub use configurator_state::{ConfiguratorOptions, ConfiguratorState};
pub use model::{Configuration, GridPosition, Module, ModuleRecord};
pub use presets::{find_preset, presets, Preset, PresetModule};
pub use scene::{reconcile, SceneDiff, SceneNode, SceneSync};
pub use serialization::{deserialize, serialize, ImportedConfiguration};
pub use store::{ConfigurationStore, FileStore, MemoryStore};
pub use validator::{check_invariants, validate_move, validate_removal, InvariantViolation};
