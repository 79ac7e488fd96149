//! Module editing and selection for configurator state.

use shelfkit_core::constants::DEFAULT_DIMENSION;
use shelfkit_core::PlacementError;

use super::ConfiguratorState;
use crate::model::{GridPosition, Module};
use crate::validator::{next_free_slot, validate_move, validate_removal};

impl ConfiguratorState {
    /// Adds a unit module at the next free floor slot and selects it.
    pub fn add_module(&mut self) -> String {
        let position = next_free_slot(&self.configuration.modules);
        let module = Module::new(
            DEFAULT_DIMENSION,
            DEFAULT_DIMENSION,
            DEFAULT_DIMENSION,
            self.options.default_color.clone(),
            position,
        );
        let id = module.id.clone();
        tracing::debug!("Adding module {} at {}", id, position);

        self.configuration.modules.push(module);
        self.selected_id = Some(id.clone());
        self.persist();
        id
    }

    /// Removes a module unless another module rests on it.
    ///
    /// If the removed module was selected, selection moves to the first
    /// remaining module.
    pub fn remove_module(&mut self, id: &str) -> Result<Module, PlacementError> {
        validate_removal(id, &self.configuration.modules)?;

        let index = self
            .configuration
            .modules
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| PlacementError::UnknownModule { id: id.to_string() })?;
        let removed = self.configuration.modules.remove(index);

        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = self.configuration.modules.first().map(|m| m.id.clone());
        }
        self.persist();
        Ok(removed)
    }

    /// Moves a module to another cell after validating the move.
    ///
    /// On rejection the module keeps its current cell.
    pub fn move_module(&mut self, id: &str, x: i32, y: i32, z: i32) -> Result<(), PlacementError> {
        let proposed = GridPosition::new(x, y, z);
        if let Err(e) = validate_move(id, proposed, &self.configuration.modules) {
            tracing::debug!(code = e.code(), "Rejected move of {} to {}: {}", id, proposed, e);
            return Err(e);
        }

        self.module_mut(id)?.set_position(proposed);
        self.persist();
        Ok(())
    }

    /// Resizes a module; each axis is clamped to the minimum size.
    pub fn resize_module(
        &mut self,
        id: &str,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<(), PlacementError> {
        self.module_mut(id)?.resize(width, height, depth);
        self.persist();
        Ok(())
    }

    /// Recolors a module. A blank color resets it to the default.
    pub fn set_module_color(&mut self, id: &str, color: &str) -> Result<(), PlacementError> {
        let color = match color.trim() {
            "" => self.options.default_color.clone(),
            c => c.to_string(),
        };
        self.module_mut(id)?.color = color;
        self.persist();
        Ok(())
    }

    /// Selects a module, e.g. from a renderer pick event.
    ///
    /// Returns `false` and leaves the selection alone for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        if self.configuration.module(id).is_some() {
            self.selected_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_module(&self) -> Option<&Module> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.configuration.module(id))
    }

    fn module_mut(&mut self, id: &str) -> Result<&mut Module, PlacementError> {
        self.configuration
            .module_mut(id)
            .ok_or_else(|| PlacementError::UnknownModule { id: id.to_string() })
    }
}
