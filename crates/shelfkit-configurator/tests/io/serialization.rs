use shelfkit_configurator::serialization::{load_from_file, save_to_file};
use shelfkit_configurator::{deserialize, find_preset, serialize, Configuration, GridPosition, Module};

#[test]
fn test_export_shape() {
    let mut module = Module::new(1.5, 0.5, 1.0, "#ff0000", GridPosition::new(2, 0, -1));
    module.id = "m-1".to_string();
    let mut configuration = Configuration::with_modules("Desk", vec![module]);
    configuration.id = "cfg".to_string();

    let value: serde_json::Value = serde_json::from_str(&serialize(&configuration)).unwrap();
    assert_eq!(value["id"], "cfg");
    assert_eq!(value["name"], "Desk");
    let m = &value["modules"][0];
    assert_eq!(m["id"], "m-1");
    assert_eq!(m["width"], 1.5);
    assert_eq!(m["height"], 0.5);
    assert_eq!(m["depth"], 1.0);
    assert_eq!(m["color"], "#ff0000");
    assert_eq!(m["gridX"], 2);
    assert_eq!(m["gridY"], 0);
    assert_eq!(m["gridZ"], -1);
}

#[test]
fn test_round_trip_preserves_fields() {
    let configuration = find_preset("bookshelf").unwrap().to_configuration();
    let restored = deserialize(&serialize(&configuration)).unwrap();
    assert_eq!(restored, configuration);
}

#[test]
fn test_missing_ids_are_generated_and_distinct() {
    let text = r##"{
        "modules": [
            {"width": 1, "height": 2, "depth": 1, "color": "#abcdef", "gridX": 0, "gridY": 0, "gridZ": 0},
            {"width": 1.5, "height": 1, "depth": 0.5, "color": "#123456", "gridX": 1, "gridY": 0, "gridZ": 0}
        ]
    }"##;
    let configuration = deserialize(text).unwrap();
    let [a, b] = configuration.modules.as_slice() else {
        panic!("expected two modules");
    };
    assert!(!a.id.is_empty());
    assert!(!b.id.is_empty());
    assert_ne!(a.id, b.id);

    assert_eq!((a.width, a.height, a.depth), (1.0, 2.0, 1.0));
    assert_eq!(a.color, "#abcdef");
    assert_eq!(a.position(), GridPosition::new(0, 0, 0));
    assert_eq!((b.width, b.height, b.depth), (1.5, 1.0, 0.5));
    assert_eq!(b.color, "#123456");
    assert_eq!(b.position(), GridPosition::new(1, 0, 0));

    // Exported output always carries the ids.
    let again = deserialize(&serialize(&configuration)).unwrap();
    assert_eq!(again.modules[0].id, a.id);
    assert_eq!(again.modules[1].id, b.id);
}

#[test]
fn test_untrusted_sizes_are_clamped() {
    let configuration =
        deserialize(r#"{"modules": [{"width": 0, "height": -4, "depth": null}]}"#).unwrap();
    let m = &configuration.modules[0];
    assert_eq!(m.width, 0.1);
    assert_eq!(m.height, 0.1);
    assert_eq!(m.depth, 1.0);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf.json");

    let configuration = find_preset("sideboard").unwrap().to_configuration();
    save_to_file(&configuration, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();
    assert_eq!(loaded, configuration);

    std::fs::write(&path, "{\"modules\": 3}").unwrap();
    assert!(load_from_file(&path).is_err());
    assert!(load_from_file(dir.path().join("missing.json")).is_err());
}

#[test]
fn test_repeated_ids_get_fresh_ones() {
    let configuration = deserialize(
        r#"{"modules": [{"id": "a", "gridX": 0}, {"id": "a", "gridX": 1}, {"id": "b", "gridX": 2}]}"#,
    )
    .unwrap();

    let ids: Vec<&str> = configuration.modules.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids[0], "a");
    assert_ne!(ids[1], "a");
    assert!(!ids[1].is_empty());
    assert_eq!(ids[2], "b");
    assert_eq!(
        configuration.modules[1].position(),
        GridPosition::new(1, 0, 0)
    );
}

#[test]
fn test_out_of_range_coordinates_fall_back_to_origin() {
    let configuration =
        deserialize(r#"{"modules": [{"id": "a", "gridY": 1e12, "gridX": -3}]}"#).unwrap();
    assert_eq!(
        configuration.modules[0].position(),
        GridPosition::new(-3, 0, 0)
    );
}
