use linedit_core::{LineStore, StoreError};

#[test]
fn persisted_lines_reload_in_identical_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataStore.txt");

    let mut store = LineStore::open(&path).unwrap();
    store.append_line("John Doe john@x.co").unwrap();
    store.append_line("Jane Roe Plain").unwrap();
    store.insert_at(1, "Ann Lee Tok").unwrap();
    let before = store.lines().to_vec();
    drop(store);

    let reopened = LineStore::open(&path).unwrap();
    assert_eq!(reopened.lines(), before.as_slice());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "John Doe john@x.co\nAnn Lee Tok\nJane Roe Plain\n"
    );
}

#[test]
fn every_mutation_rewrites_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataStore.txt");
    let mut store = LineStore::open(&path).unwrap();

    store.append_line("A B C").unwrap();
    store.append_line("D E F").unwrap();
    let previous = store.set_at(0, "X Y Z").unwrap();
    assert_eq!(previous, "A B C");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "X Y Z\nD E F\n");

    assert_eq!(store.remove_at(0).unwrap(), "X Y Z");
    assert_eq!(store.remove_last().unwrap(), "D E F");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn reload_discards_unsaved_view_and_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataStore.txt");
    let mut store = LineStore::open(&path).unwrap();
    store.append_line("A B C").unwrap();

    std::fs::write(&path, "Q R S\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.lines(), ["Q R S"]);
}

#[test]
fn open_on_a_directory_fails_with_create_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = LineStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Create { .. }));
    assert!(err.is_io());
}

#[test]
fn failed_rewrite_keeps_in_memory_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataStore.txt");
    let mut store = LineStore::open(&path).unwrap();

    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let err = store.append_line("A B C").unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert_eq!(store.lines(), ["A B C"]);
}

#[test]
fn out_of_range_access_reports_index_and_len() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LineStore::open(dir.path().join("dataStore.txt")).unwrap();

    let err = store.insert_at(1, "A B C").unwrap_err();
    assert!(matches!(err, StoreError::OutOfRange { index: 1, len: 0 }));
    assert_eq!(err.to_string(), "index 1 is out of bounds for 0 line(s)");
    assert!(store.get(0).is_none());
}
