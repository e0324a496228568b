use blogz::error::BlogzError;
use blogz::model::{Article, ArticleId};
use blogz::store::fs_backend::FileBackend;
use blogz::store::{ArticleStore, SnapshotBackend};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn sample() -> Vec<Article> {
    vec![
        Article::new(ArticleId::new(1_700_000_000_123), "Go basics".into(), "goroutines".into()),
        Article::new(ArticleId::new(42), "Rust intro".into(), "ownership\nand borrowing".into()),
        Article::new(ArticleId::new(7), "Ünïcödé".into(), "emoji 🦀".into()),
    ]
}

#[test]
fn test_snapshot_round_trip() {
    let (_dir, backend) = setup();
    let articles = sample();

    backend.save(&articles).unwrap();
    let loaded = backend.load().unwrap();

    assert_eq!(loaded, articles);
}

#[test]
fn test_save_overwrites_whole_snapshot() {
    let (_dir, backend) = setup();
    backend.save(&sample()).unwrap();
    backend.save(&sample()[..1]).unwrap();

    assert_eq!(backend.load().unwrap().len(), 1);
}

#[test]
fn test_no_tmp_files_left_behind() {
    let (dir, backend) = setup();
    backend.save(&sample()).unwrap();
    backend.save(&[]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_snapshot_layout_on_disk() {
    let (dir, backend) = setup();
    backend.save(&sample()[1..2]).unwrap();

    let raw = fs::read_to_string(dir.path().join("data.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value[0];

    assert_eq!(record["id"], 42);
    assert_eq!(record["header"], "Rust intro");
    assert_eq!(record["body"], "ownership\nand borrowing");
    assert!(record["date"].as_str().unwrap().contains('T'));
    // four-space indent by default
    assert!(raw.contains("\n    {\n        \"id\": 42"));
}

#[test]
fn test_missing_snapshot_is_an_error() {
    let (dir, backend) = setup();
    assert!(!backend.exists());

    match backend.load() {
        Err(BlogzError::SnapshotMissing(path)) => assert_eq!(path, dir.path().join("data.json")),
        other => panic!("expected SnapshotMissing, got {:?}", other),
    }
}

#[test]
fn test_corrupt_snapshot_is_an_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("data.json"), "[{\"id\": 1, \"header\": ").unwrap();

    assert!(matches!(backend.load(), Err(BlogzError::Serialization(_))));
    assert!(ArticleStore::open(backend).is_err());
}

#[test]
fn test_save_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("store");
    let backend = FileBackend::new(root.clone());

    backend.save(&[]).unwrap();
    assert!(root.join("data.json").exists());
}

#[test]
fn test_store_changes_are_visible_after_reopen() {
    let (dir, backend) = setup();
    backend.save(&[]).unwrap();

    let store = ArticleStore::open(backend).unwrap();
    let first = store.create("Hello".into(), "World".into()).unwrap();
    let second = store.create("Second".into(), "Post".into()).unwrap();
    store.update(first.id, "Hi".into(), "Earth".into()).unwrap();
    store.delete(second.id).unwrap();
    let in_memory = store.get_all();
    drop(store);

    let reopened = ArticleStore::open(FileBackend::new(dir.path().to_path_buf())).unwrap();
    assert_eq!(reopened.get_all(), in_memory);
    assert_eq!(reopened.get_all()[0].header, "Hi");
}

#[cfg(unix)]
#[test]
fn test_failed_write_leaves_store_unchanged() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, backend) = setup();
    backend.save(&sample()).unwrap();
    let store = ArticleStore::open(backend).unwrap();

    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();
    // Root ignores directory permissions; nothing to test then.
    let write_check = dir.path().join(".write-check");
    if fs::write(&write_check, "x").is_ok() {
        let _ = fs::remove_file(&write_check);
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = store.create("New".into(), "Body".into());
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(err.is_persistence());
    assert_eq!(store.get_all(), sample());
    assert_eq!(FileBackend::new(dir.path().to_path_buf()).load().unwrap(), sample());
}
