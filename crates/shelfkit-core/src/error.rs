//! Error handling for ShelfKit
//!
//! Provides the error types surfaced by the grid configurator:
//! - Placement errors (rejected moves and removals)
//! - Format errors (import text that cannot be decoded)
//! - Preset errors (unknown preset keys)
//! - Storage errors (persistence sink failures)
//!
//! All error types use `thiserror` and expose a stable `code()` string
//! that front ends can key user-visible messages on.

use thiserror::Error;

/// Placement error type
///
/// Returned by the placement validator when a proposed change would break
/// one of the grid invariants. The module involved is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Proposed vertical coordinate is below the floor
    #[error("Cannot place a module below the floor (gridY = {y})")]
    BelowFloor {
        /// The rejected vertical coordinate.
        y: i32,
    },

    /// Nothing occupies the cell directly beneath the proposed cell
    #[error("No module below ({x}, {y}, {z}) to stand on")]
    Unsupported {
        /// Proposed X coordinate.
        x: i32,
        /// Proposed Y coordinate.
        y: i32,
        /// Proposed Z coordinate.
        z: i32,
    },

    /// Another module already occupies the proposed cell
    #[error("Cell ({x}, {y}, {z}) is already occupied by module {occupant}")]
    Occupied {
        /// Proposed X coordinate.
        x: i32,
        /// Proposed Y coordinate.
        y: i32,
        /// Proposed Z coordinate.
        z: i32,
        /// Id of the module in the way.
        occupant: String,
    },

    /// The module carries another module that would be left floating
    #[error("Module {id} supports module {carried} and cannot leave its cell")]
    Supporting {
        /// Id of the module being moved or removed.
        id: String,
        /// Id of the module resting on it.
        carried: String,
    },

    /// No module with the given id exists
    #[error("Unknown module: {id}")]
    UnknownModule {
        /// The id that was looked up.
        id: String,
    },
}

impl PlacementError {
    /// Stable machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            Self::BelowFloor { .. } => "BELOW_FLOOR",
            Self::Unsupported { .. } => "UNSUPPORTED",
            Self::Occupied { .. } => "OCCUPIED",
            Self::Supporting { .. } => "SUPPORTING",
            Self::UnknownModule { .. } => "UNKNOWN_MODULE",
        }
    }
}

/// Format error type
///
/// Import text that is not JSON or does not carry a `modules` array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The text could not be decoded as a configuration
    #[error("Invalid configuration format: {reason}")]
    InvalidFormat {
        /// What was wrong with the input.
        reason: String,
    },
}

impl FormatError {
    /// Build an `InvalidFormat` error from any message
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
        }
    }
}

/// Preset lookup error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// No preset is registered under the key
    #[error("Unknown preset: {key}")]
    UnknownPreset {
        /// The requested preset key.
        key: String,
    },
}

impl PresetError {
    /// Stable machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownPreset { .. } => "UNKNOWN_PRESET",
        }
    }
}

/// Storage error type
///
/// Failures of the persistence sink. These never reach the user; the
/// configurator logs and drops them.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The sink could not be read or written
    #[error("Storage unavailable: {reason}")]
    Unavailable {
        /// Description of the failure.
        reason: String,
    },

    /// I/O error from a file-backed store
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Stored configuration is unreadable: {0}")]
    Corrupted(#[from] FormatError),
}

impl StorageError {
    /// Build an `Unavailable` error from any message
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable reason code
    pub fn code(&self) -> &'static str {
        "STORAGE_UNAVAILABLE"
    }
}
