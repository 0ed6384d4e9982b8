use super::title;
use crate::domain::Page;
use crate::io::local::LocalPageStore;
use crate::io::{PageError, PageStore};
use tempfile::TempDir;

async fn setup_store() -> (TempDir, LocalPageStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalPageStore::open(dir.path().join("doc")).await.unwrap();
    (dir, store)
}

// test the store's ability to save a page and hand back the exact same bytes
#[tokio::test]
async fn test_local_save_and_load_round_trip() {
    let (_dir, store) = setup_store().await;
    let page = Page::new(title("Home"), "Hello wiki\nsecond line");

    store.save(&page).await.expect("Should save page");
    let loaded = store.load(&title("Home")).await.expect("Should load page");

    assert_eq!(loaded, page);
}

#[tokio::test]
async fn test_local_page_lives_at_title_txt() {
    let (dir, store) = setup_store().await;
    store
        .save(&Page::new(title("Home"), "Hello wiki"))
        .await
        .unwrap();

    let expected_path = dir.path().join("doc").join("Home.txt");
    assert_eq!(store.page_path(&title("Home")), expected_path);
    assert_eq!(std::fs::read(expected_path).unwrap(), b"Hello wiki");
}

#[tokio::test]
async fn test_local_load_missing_page_is_not_found() {
    let (_dir, store) = setup_store().await;

    let err = store.load(&title("Nowhere")).await.unwrap_err();
    assert!(matches!(err, PageError::NotFound { .. }));
    assert!(err.is_not_found());
}

// saving a shorter body must not leave the tail of the old one behind
#[tokio::test]
async fn test_local_save_truncates_existing_page() {
    let (_dir, store) = setup_store().await;
    store
        .save(&Page::new(title("Home"), "a much longer first draft"))
        .await
        .unwrap();
    store.save(&Page::new(title("Home"), "short")).await.unwrap();

    let loaded = store.load(&title("Home")).await.unwrap();
    assert_eq!(loaded.body, b"short");
}

#[tokio::test]
async fn test_local_bodies_are_opaque_bytes() {
    let (_dir, store) = setup_store().await;
    let body = vec![0xff, 0x00, b'<', b'b', b'>', 0xfe];
    store
        .save(&Page::new(title("Binary"), body.clone()))
        .await
        .unwrap();

    assert_eq!(store.load(&title("Binary")).await.unwrap().body, body);
}

#[cfg(unix)]
#[tokio::test]
async fn test_local_saved_page_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = setup_store().await;
    store
        .save(&Page::new(title("Secret"), "shh"))
        .await
        .unwrap();

    let mode = std::fs::metadata(store.page_path(&title("Secret")))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test]
async fn test_local_delete_removes_page() {
    let (_dir, store) = setup_store().await;
    store.save(&Page::new(title("Gone"), "bye")).await.unwrap();

    store.delete(&title("Gone")).await.expect("Should delete page");

    assert!(!store.page_path(&title("Gone")).exists());
    assert!(store.load(&title("Gone")).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_local_delete_missing_page_is_not_found() {
    let (_dir, store) = setup_store().await;

    let err = store.delete(&title("Never")).await.unwrap_err();
    assert!(err.is_not_found());
}

// a missing pages directory is an I/O failure on save, never "page not found"
#[tokio::test]
async fn test_local_save_without_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalPageStore::new(dir.path().join("missing"));

    let err = store
        .save(&Page::new(title("Home"), "Hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, PageError::Io { .. }));
    assert!(err.to_string().starts_with("page Home: "));
}

#[tokio::test]
async fn test_local_open_creates_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("a").join("b").join("doc");

    let store = LocalPageStore::open(&root).await.unwrap();

    assert!(root.is_dir());
    assert_eq!(store.root_path(), root.as_path());
}
