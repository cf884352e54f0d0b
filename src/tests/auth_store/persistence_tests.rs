use super::*;

#[test]
fn file_persistence_round_trips_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStatePersistence::new(dir.path().join("nested").join("auth.json"));

    assert_eq!(store.load().expect("load"), None);
    store.save(b"{\"a\":1}").expect("save");
    assert_eq!(store.load().expect("load").as_deref(), Some(&b"{\"a\":1}"[..]));

    let leftovers: Vec<_> = fs::read_dir(dir.path().join("nested"))
        .expect("read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn clearing_a_missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStatePersistence::new(dir.path().join("auth.json"));
    store.clear().expect("clear missing");

    store.save(b"x").expect("save");
    store.clear().expect("clear");
    assert!(!store.path().exists());
}

#[test]
fn memory_persistence_is_shared_through_references() {
    let memory = MemoryStatePersistence::new();
    let by_ref = &memory;
    by_ref.save(b"state").expect("save");
    assert_eq!(memory.snapshot().as_deref(), Some(&b"state"[..]));
    by_ref.clear().expect("clear");
    assert_eq!(memory.load().expect("load"), None);
}
