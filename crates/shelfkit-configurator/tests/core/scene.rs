use shelfkit_configurator::{ConfiguratorState, MemoryStore, SceneSync};

#[test]
fn test_scene_sync_across_import() {
    let mut state = ConfiguratorState::new(Box::new(MemoryStore::new()));
    state.load_preset("tv-lowboard").unwrap();

    let mut sync = SceneSync::new();
    let diff = sync.sync(state.modules(), state.options().unit_spacing);
    assert!(diff.removed.is_empty());
    assert_eq!(diff.upserted.len(), 3);

    let old_ids: Vec<String> = state.modules().iter().map(|m| m.id.clone()).collect();
    state.import_json(r#"{"modules": [{"id": "kept"}]}"#).unwrap();

    let diff = sync.sync(state.modules(), state.options().unit_spacing);
    let mut expected = old_ids.clone();
    expected.sort();
    assert_eq!(diff.removed, expected);
    assert_eq!(diff.upserted.len(), 1);
    assert_eq!(diff.upserted[0].id, "kept");
}

#[test]
fn test_low_module_sits_on_floor() {
    let mut state = ConfiguratorState::new(Box::new(MemoryStore::new()));
    state.load_preset("nightstand").unwrap();
    let nodes = state.scene_nodes();
    assert_eq!(nodes[0].position.y, 0.25);
    assert_eq!(nodes[1].position.y, 1.25);
    assert_eq!(nodes[0].color, "#9caf88");
}
