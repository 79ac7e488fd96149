//! # Grid Placement Validator
//!
//! Decides whether a proposed change to one module's grid cell is legal given
//! every other module. The validator keeps no index; it scans the module list
//! on each call, which is fine for configurations of a few dozen modules.
//!
//! Checks run in a fixed order so the user sees the most fundamental problem
//! first: floor, support, occupancy, then whether the module is carrying
//! something that would be left floating.

use crate::model::{GridPosition, Module};
use shelfkit_core::PlacementError;

/// First module other than `exclude_id` that occupies `position`.
fn other_at<'a>(modules: &'a [Module], exclude_id: &str, position: GridPosition) -> Option<&'a Module> {
    modules
        .iter()
        .find(|m| m.id != exclude_id && m.position() == position)
}

/// The module resting on `target`, provided nothing else shares the target's
/// cell to keep holding it up.
fn carried_by<'a>(modules: &'a [Module], target: &Module) -> Option<&'a Module> {
    let current = target.position();
    let carried = other_at(modules, &target.id, current.above()?)?;
    let still_held = modules
        .iter()
        .any(|m| m.id != target.id && m.position() == current);
    (!still_held).then_some(carried)
}

fn find<'a>(modules: &'a [Module], id: &str) -> Result<&'a Module, PlacementError> {
    modules
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| PlacementError::UnknownModule { id: id.to_string() })
}

/// Validate moving `target_id` to `proposed`.
///
/// The caller applies the change only on `Ok`.
pub fn validate_move(
    target_id: &str,
    proposed: GridPosition,
    modules: &[Module],
) -> Result<(), PlacementError> {
    let target = find(modules, target_id)?;

    if proposed.y < 0 {
        return Err(PlacementError::BelowFloor { y: proposed.y });
    }

    let supported = proposed
        .below()
        .is_some_and(|below| other_at(modules, target_id, below).is_some());
    if proposed.y > 0 && !supported {
        return Err(PlacementError::Unsupported {
            x: proposed.x,
            y: proposed.y,
            z: proposed.z,
        });
    }

    if let Some(occupant) = other_at(modules, target_id, proposed) {
        return Err(PlacementError::Occupied {
            x: proposed.x,
            y: proposed.y,
            z: proposed.z,
            occupant: occupant.id.clone(),
        });
    }

    if proposed != target.position() {
        if let Some(carried) = carried_by(modules, target) {
            return Err(PlacementError::Supporting {
                id: target_id.to_string(),
                carried: carried.id.clone(),
            });
        }
    }

    Ok(())
}

/// Validate deleting `target_id`: a module carrying another may not go.
pub fn validate_removal(target_id: &str, modules: &[Module]) -> Result<(), PlacementError> {
    let target = find(modules, target_id)?;

    match carried_by(modules, target) {
        Some(carried) => Err(PlacementError::Supporting {
            id: target_id.to_string(),
            carried: carried.id.clone(),
        }),
        None => Ok(()),
    }
}

/// The first free floor cell along X in row `z = 0`, scanning from `x = 0`.
pub fn next_free_slot(modules: &[Module]) -> GridPosition {
    let mut x = 0;
    loop {
        let candidate = GridPosition::new(x, 0, 0);
        if !modules.iter().any(|m| m.position() == candidate) {
            return candidate;
        }
        x += 1;
    }
}

/// A broken grid invariant found by [`check_invariants`].
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// Two modules share one cell.
    Overlap {
        first: String,
        second: String,
        position: GridPosition,
    },
    /// An elevated module has nothing beneath it.
    Floating { id: String, position: GridPosition },
    /// A module sits below the floor.
    BelowFloor { id: String, position: GridPosition },
    /// A module has a non-positive or non-finite size.
    Degenerate { id: String },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overlap {
                first,
                second,
                position,
            } => write!(f, "modules {} and {} overlap at {}", first, second, position),
            Self::Floating { id, position } => {
                write!(f, "module {} floats unsupported at {}", id, position)
            }
            Self::BelowFloor { id, position } => {
                write!(f, "module {} is below the floor at {}", id, position)
            }
            Self::Degenerate { id } => write!(f, "module {} has a degenerate size", id),
        }
    }
}

/// Report every invariant violation in a module list without repairing it.
///
/// Imported and preset configurations bypass per-move validation, so this is
/// how callers find out whether such a configuration is sound.
pub fn check_invariants(modules: &[Module]) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (i, module) in modules.iter().enumerate() {
        let position = module.position();

        let degenerate = [module.width, module.height, module.depth]
            .iter()
            .any(|v| !v.is_finite() || *v <= 0.0);
        if degenerate {
            violations.push(InvariantViolation::Degenerate {
                id: module.id.clone(),
            });
        }

        if position.y < 0 {
            violations.push(InvariantViolation::BelowFloor {
                id: module.id.clone(),
                position,
            });
        } else if position.y > 0
            && !modules
                .iter()
                .enumerate()
                .any(|(j, m)| j != i && Some(m.position()) == position.below())
        {
            violations.push(InvariantViolation::Floating {
                id: module.id.clone(),
                position,
            });
        }

        for other in &modules[i + 1..] {
            if other.position() == position {
                violations.push(InvariantViolation::Overlap {
                    first: module.id.clone(),
                    second: other.id.clone(),
                    position,
                });
            }
        }
    }

    violations
}
