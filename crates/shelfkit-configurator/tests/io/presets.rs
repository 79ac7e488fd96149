use shelfkit_configurator::{check_invariants, compute_bounds, find_preset, presets, serialize};

#[test]
fn test_preset_keys_are_unique() {
    let mut keys: Vec<&str> = presets().iter().map(|p| p.key).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), presets().len());
}

#[test]
fn test_preset_envelopes() {
    let lowboard = find_preset("tv-lowboard").unwrap().instantiate();
    let bounds = compute_bounds(&lowboard, 350.0);
    assert_eq!(bounds.width_units, 3.0);
    assert_eq!(bounds.height_units, 0.5);

    let bookshelf = find_preset("bookshelf").unwrap().instantiate();
    let bounds = compute_bounds(&bookshelf, 350.0);
    assert_eq!(bounds.width_units, 2.0);
    assert_eq!(bounds.height_units, 4.0);
    assert_eq!(bounds.depth_units, 0.75);
}

#[test]
fn test_presets_export_with_ids() {
    for preset in presets() {
        let configuration = preset.to_configuration();
        assert!(check_invariants(&configuration.modules).is_empty());
        let value: serde_json::Value = serde_json::from_str(&serialize(&configuration)).unwrap();
        let modules = value["modules"].as_array().unwrap();
        assert!(modules.iter().all(|m| m["id"].as_str().is_some_and(|id| !id.is_empty())));
    }
}
