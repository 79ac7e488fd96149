use shelfkit_configurator::{
    ConfigurationStore, ConfiguratorOptions, ConfiguratorState, GridPosition, MemoryStore,
};

/// Store that forwards into a shared `MemoryStore` so tests can inspect it.
#[derive(Clone, Default)]
struct SharedStore(std::rc::Rc<std::cell::RefCell<MemoryStore>>);

impl ConfigurationStore for SharedStore {
    fn load(
        &self,
    ) -> Result<Option<shelfkit_configurator::Configuration>, shelfkit_core::StorageError> {
        self.0.borrow().load()
    }

    fn save(
        &mut self,
        configuration: &shelfkit_configurator::Configuration,
    ) -> Result<(), shelfkit_core::StorageError> {
        self.0.borrow_mut().save(configuration)
    }
}

fn state() -> ConfiguratorState {
    ConfiguratorState::new(Box::new(MemoryStore::new()))
}

#[test]
fn test_add_module_fills_floor_row() {
    let mut state = state();
    let a = state.add_module();
    let b = state.add_module();
    let c = state.add_module();

    let positions: Vec<GridPosition> = state.modules().iter().map(|m| m.position()).collect();
    assert_eq!(
        positions,
        vec![
            GridPosition::new(0, 0, 0),
            GridPosition::new(1, 0, 0),
            GridPosition::new(2, 0, 0)
        ]
    );
    assert_eq!(state.selected_id(), Some(c.as_str()));
    assert_ne!(a, b);
    assert_eq!(state.bounds().width_units, 3.0);
}

#[test]
fn test_rejected_move_leaves_module_unchanged() {
    let mut state = state();
    let _first = state.add_module();
    let second = state.add_module();

    let err = state.move_module(&second, 0, 0, 0).unwrap_err();
    assert_eq!(err.code(), "OCCUPIED");
    assert_eq!(
        state.configuration().module(&second).unwrap().position(),
        GridPosition::new(1, 0, 0)
    );

    let err = state.move_module(&second, 5, 1, 5).unwrap_err();
    assert_eq!(err.code(), "UNSUPPORTED");

    let err = state.move_module(&second, 1, -1, 0).unwrap_err();
    assert_eq!(err.code(), "BELOW_FLOOR");

    state.move_module(&second, 0, 1, 0).unwrap();
    assert_eq!(
        state.configuration().module(&second).unwrap().position(),
        GridPosition::new(0, 1, 0)
    );
}

#[test]
fn test_remove_keeps_stack_supported() {
    let mut state = state();
    let bottom = state.add_module();
    let top = state.add_module();
    state.move_module(&top, 0, 1, 0).unwrap();

    assert_eq!(state.remove_module(&bottom).unwrap_err().code(), "SUPPORTING");
    assert_eq!(state.modules().len(), 2);

    state.select(&top);
    state.remove_module(&top).unwrap();
    assert_eq!(state.selected_id(), Some(bottom.as_str()));

    state.remove_module(&bottom).unwrap();
    assert!(state.modules().is_empty());
    assert_eq!(state.selected_id(), None);
}

#[test]
fn test_resize_and_recolor() {
    let mut state = state();
    let id = state.add_module();

    state.resize_module(&id, 1.5, 0.0, -2.0).unwrap();
    let module = state.configuration().module(&id).unwrap();
    assert_eq!(module.width, 1.5);
    assert_eq!(module.height, 0.1);
    assert_eq!(module.depth, 0.1);

    state.set_module_color(&id, "#112233").unwrap();
    assert_eq!(state.selected_module().unwrap().color, "#112233");
    state.set_module_color(&id, "  ").unwrap();
    assert_eq!(state.selected_module().unwrap().color, state.options().default_color);

    assert_eq!(
        state.resize_module("ghost", 1.0, 1.0, 1.0).unwrap_err().code(),
        "UNKNOWN_MODULE"
    );
}

#[test]
fn test_select_only_known_ids() {
    let mut state = state();
    let id = state.add_module();
    state.clear_selection();
    assert!(!state.select("ghost"));
    assert_eq!(state.selected_id(), None);
    assert!(state.select(&id));
    assert_eq!(state.selected_id(), Some(id.as_str()));
}

#[test]
fn test_import_rejects_invalid_and_keeps_current() {
    let mut state = state();
    state.add_module();
    let before = state.configuration().clone();

    let err = state.import_json(r#"{"modules": "not-an-array"}"#).unwrap_err();
    assert_eq!(err.code(), "INVALID_FORMAT");
    assert_eq!(state.configuration(), &before);

    assert!(state.import_json("definitely not json").is_err());
    assert_eq!(state.configuration(), &before);
}

#[test]
fn test_import_replaces_modules_and_resets_selection() {
    let mut state = state();
    state.add_module();
    state.rename("Living room");

    let count = state
        .import_json(r##"{"modules": [{"width": 2, "gridX": 3}, {"color": "#000000", "gridX": 4}]}"##)
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(state.configuration().name, "Living room");

    let first = &state.modules()[0];
    assert_eq!(state.selected_id(), Some(first.id.as_str()));
    assert_eq!(first.width, 2.0);
    assert_eq!(first.grid_x, 3);

    state.import_json(r#"{"name": "Empty", "modules": []}"#).unwrap();
    assert_eq!(state.selected_id(), None);
    assert_eq!(state.configuration().name, "Empty");
}

#[test]
fn test_import_allows_transient_violations() {
    let mut state = state();
    state
        .import_json(r#"{"modules": [{"id": "a"}, {"id": "b"}, {"id": "c", "gridY": 3}]}"#)
        .unwrap();
    assert_eq!(state.modules().len(), 3);
    assert_eq!(state.violations().len(), 2);
}

#[test]
fn test_load_preset() {
    let mut state = state();
    state.load_preset("sideboard").unwrap();
    assert_eq!(state.configuration().name, "Sideboard");
    assert_eq!(state.modules().len(), 4);
    assert_eq!(state.selected_id(), Some(state.modules()[0].id.as_str()));
    assert!(state.violations().is_empty());

    let before = state.configuration().clone();
    assert_eq!(state.load_preset("wardrobe").unwrap_err().code(), "UNKNOWN_PRESET");
    assert_eq!(state.configuration(), &before);
}

#[test]
fn test_every_change_writes_through() {
    let store = SharedStore::default();
    let mut state = ConfiguratorState::new(Box::new(store.clone()));

    let id = state.add_module();
    state.resize_module(&id, 2.0, 1.0, 1.0).unwrap();
    let _ = state.move_module(&id, 0, -1, 0);

    let inner = store.0.borrow();
    assert_eq!(inner.save_count(), 2);
    assert_eq!(inner.saved().unwrap().modules[0].width, 2.0);
}

#[test]
fn test_unavailable_storage_is_silent() {
    let mut state = ConfiguratorState::restore(
        Box::new(MemoryStore::unavailable()),
        ConfiguratorOptions::default(),
    );
    assert!(state.modules().is_empty());

    let id = state.add_module();
    state.move_module(&id, 3, 0, 0).unwrap();
    assert_eq!(state.modules()[0].grid_x, 3);
}

#[test]
fn test_restore_from_store() {
    let mut seeded = ConfiguratorState::new(Box::new(MemoryStore::new()));
    seeded.load_preset("nightstand").unwrap();
    let saved = seeded.configuration().clone();

    let state = ConfiguratorState::restore(
        Box::new(MemoryStore::with_saved(saved.clone())),
        ConfiguratorOptions::default(),
    );
    assert_eq!(state.configuration(), &saved);
    assert_eq!(state.selected_id(), Some(saved.modules[0].id.as_str()));
}

#[test]
fn test_scene_nodes_follow_options() {
    let options = ConfiguratorOptions {
        unit_spacing: 2.0,
        ..ConfiguratorOptions::default()
    };
    let mut state = ConfiguratorState::with_options(Box::new(MemoryStore::new()), options);
    state.add_module();
    state.add_module();

    let nodes = state.scene_nodes();
    assert_eq!(nodes[1].position.x, 2.0);
    assert_eq!(nodes[1].position.y, 0.5);
}

#[test]
fn test_store_failure_is_reported_and_cleared() {
    let shared = SharedStore::default();
    *shared.0.borrow_mut() = MemoryStore::unavailable();
    let mut state = ConfiguratorState::new(Box::new(shared.clone()));
    state.add_module();

    assert_eq!(state.modules().len(), 1);
    let err = state.persist_error().unwrap();
    assert_eq!(err.code(), "STORAGE_UNAVAILABLE");

    *shared.0.borrow_mut() = MemoryStore::new();
    state.add_module();
    assert!(state.persist_error().is_none());
    assert_eq!(shared.0.borrow().saved().unwrap().modules.len(), 2);
}

#[test]
fn test_import_with_huge_coordinate_then_remove() {
    let mut state = state();
    state
        .import_json(r#"{"modules": [{"id": "a", "gridY": 1e12}]}"#)
        .unwrap();
    assert_eq!(
        state.configuration().module("a").unwrap().position(),
        GridPosition::new(0, 0, 0)
    );

    state.remove_module("a").unwrap();
    assert!(state.modules().is_empty());
}

#[test]
fn test_import_with_repeated_ids_keeps_cells_apart() {
    let mut state = state();
    state
        .import_json(r#"{"modules": [{"id": "a", "gridX": 0}, {"id": "a", "gridX": 1}]}"#)
        .unwrap();
    assert!(state.violations().is_empty());

    let err = state.move_module("a", 1, 0, 0).unwrap_err();
    assert_eq!(err.code(), "OCCUPIED");
    assert!(state.violations().is_empty());
}
