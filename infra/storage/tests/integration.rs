use std::path::Path;
use tempfile::TempDir;
use tessera_storage::*;

async fn fixture() -> (TempDir, Storage) {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("aurora/assets")).unwrap();
    std::fs::create_dir_all(temp.path().join("borealis")).unwrap();
    std::fs::write(temp.path().join("aurora/settings.json"), br#"{"pages":[]}"#).unwrap();
    std::fs::write(temp.path().join("notes.txt"), b"x").unwrap();

    let storage = Storage::builder().root(temp.path()).connect().await.unwrap();
    (temp, storage)
}

#[tokio::test]
async fn test_path_traversal_blocked() {
    let (_temp, storage) = fixture().await;

    assert!(storage.normalize(Path::new("../etc/passwd")).await.is_err());
    assert!(storage.normalize(Path::new("aurora/../../bar")).await.is_err());
    assert!(storage.read(Path::new("/etc/passwd")).await.is_err());
}

#[tokio::test]
async fn test_read_async_and_sync_agree() {
    let (_temp, storage) = fixture().await;

    let path = Path::new("aurora/settings.json");
    let async_data = storage.read(path).await.unwrap();
    let sync_data = storage.read_sync(path).unwrap();
    assert_eq!(async_data, sync_data);
    assert_eq!(storage.read_to_string(path).await.unwrap(), r#"{"pages":[]}"#);
}

#[tokio::test]
async fn test_exists_and_is_dir() {
    let (_temp, storage) = fixture().await;

    assert!(storage.exists(Path::new("aurora")).await.unwrap());
    assert!(storage.is_dir(Path::new("aurora")).await.unwrap());
    assert!(!storage.is_dir(Path::new("notes.txt")).await.unwrap());
    assert!(!storage.exists(Path::new("missing")).await.unwrap());
}

#[tokio::test]
async fn test_list_dir_sorted_with_kinds() {
    let (_temp, storage) = fixture().await;

    let entries = storage.list_dir(Path::new("")).await.unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["aurora", "borealis", "notes.txt"]);
    assert!(entries[0].is_dir());
    assert_eq!(entries[2].kind, EntryKind::File);

    let err = storage.list_dir(Path::new("notes.txt")).await.unwrap_err();
    assert!(matches!(err, StorageError::DirectoryNotFound { .. }));
}

#[tokio::test]
async fn test_read_missing_returns_file_not_found() {
    let (_temp, storage) = fixture().await;

    let err = storage.read(Path::new("aurora/missing.json")).await.expect_err("expected error");
    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_invalid_utf8_is_encoding_error() {
    let (temp, storage) = fixture().await;
    std::fs::write(temp.path().join("aurora/bad.json"), [0xff, 0xfe]).unwrap();

    let err = storage.read_to_string(Path::new("aurora/bad.json")).await.unwrap_err();
    assert!(matches!(err, StorageError::Encoding { .. }));
}

#[tokio::test]
async fn test_missing_root_without_create_fails() {
    let temp = TempDir::new().unwrap();
    let err = Storage::builder()
        .root(temp.path().join("nope"))
        .create(false)
        .connect()
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::DirectoryNotFound { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_metadata_failures_are_errors_not_absence() {
    let (temp, storage) = fixture().await;
    std::os::unix::fs::symlink("looped", temp.path().join("looped")).unwrap();

    let err = storage.is_dir(Path::new("looped")).await.unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }), "unexpected error: {err:?}");
    assert!(storage.exists(Path::new("looped")).await.is_err());
    assert!(!storage.is_dir(Path::new("missing")).await.unwrap());
}
