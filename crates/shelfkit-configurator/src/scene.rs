//! # Scene Reconciliation
//!
//! The renderer keeps its own object graph keyed by module id. After every
//! change it needs to know which ids disappeared and the current size,
//! position and color of every module that remains.

use nalgebra::{Point3, Vector3};
use std::collections::HashSet;

use crate::bounds::{module_size, world_position};
use crate::model::Module;

/// Renderer-facing view of one module.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub size: Vector3<f64>,
    pub position: Point3<f64>,
    pub color: String,
}

impl SceneNode {
    pub fn from_module(module: &Module, unit_spacing: f64) -> Self {
        Self {
            id: module.id.clone(),
            size: module_size(module),
            position: world_position(module, unit_spacing),
            color: module.color.clone(),
        }
    }
}

pub fn scene_nodes(modules: &[Module], unit_spacing: f64) -> Vec<SceneNode> {
    modules
        .iter()
        .map(|m| SceneNode::from_module(m, unit_spacing))
        .collect()
}

/// Changes to apply to the renderer's object graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDiff {
    /// Ids the renderer must drop.
    pub removed: Vec<String>,
    /// Nodes to create or update, in module order.
    pub upserted: Vec<SceneNode>,
}

impl SceneDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.upserted.is_empty()
    }
}

/// Diff the ids the renderer knows about against the current module list.
pub fn reconcile<'a, I>(previous_ids: I, modules: &[Module], unit_spacing: f64) -> SceneDiff
where
    I: IntoIterator<Item = &'a str>,
{
    let current: HashSet<&str> = modules.iter().map(|m| m.id.as_str()).collect();
    let mut removed: Vec<String> = previous_ids
        .into_iter()
        .filter(|id| !current.contains(id))
        .map(str::to_string)
        .collect();
    removed.sort();
    removed.dedup();

    SceneDiff {
        removed,
        upserted: scene_nodes(modules, unit_spacing),
    }
}

/// Tracks the ids already handed to a renderer between updates.
#[derive(Debug, Clone, Default)]
pub struct SceneSync {
    known: HashSet<String>,
}

impl SceneSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff against the last sync and remember the new id set.
    pub fn sync(&mut self, modules: &[Module], unit_spacing: f64) -> SceneDiff {
        let diff = reconcile(self.known.iter().map(String::as_str), modules, unit_spacing);
        self.known = modules.iter().map(|m| m.id.clone()).collect();
        diff
    }

    pub fn known_ids(&self) -> &HashSet<String> {
        &self.known
    }
}
