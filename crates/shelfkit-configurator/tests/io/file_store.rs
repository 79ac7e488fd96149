use shelfkit_configurator::{
    ConfigurationStore, ConfiguratorOptions, ConfiguratorState, FileStore,
};

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("configuration.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_file_store_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("configuration.json");

    let mut state = ConfiguratorState::new(Box::new(FileStore::new(&path)));
    state.load_preset("nightstand").unwrap();
    assert!(path.exists());

    let restored =
        ConfiguratorState::restore(Box::new(FileStore::new(&path)), ConfiguratorOptions::default());
    assert_eq!(restored.configuration(), state.configuration());
}

#[test]
fn test_corrupted_file_restores_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configuration.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = FileStore::new(&path);
    let err = store.load().unwrap_err();
    assert_eq!(err.code(), "STORAGE_UNAVAILABLE");

    let state = ConfiguratorState::restore(Box::new(store), ConfiguratorOptions::default());
    assert!(state.modules().is_empty());
}
