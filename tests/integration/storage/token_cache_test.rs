//! Token cache behavior: durable round-trips, and every failure mode
//! degrading to a cache miss rather than an error.

use anteroom::app::token_cache::{TokenCache, SESSION_TOKEN_KEY};

#[tokio::test]
async fn test_set_then_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TokenCache::with_dir(dir.path().to_path_buf());

    cache.set(SESSION_TOKEN_KEY, b"tok_abc").await;
    let value = cache.get(SESSION_TOKEN_KEY).await;
    assert_eq!(value.as_deref(), Some(b"tok_abc".as_slice()));
}

#[tokio::test]
async fn test_get_missing_key_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TokenCache::with_dir(dir.path().to_path_buf());

    assert!(cache.get("never-written").await.is_none());
}

#[tokio::test]
async fn test_get_missing_directory_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TokenCache::with_dir(dir.path().join("does-not-exist"));

    assert!(cache.get(SESSION_TOKEN_KEY).await.is_none());
}

#[tokio::test]
async fn test_clear_makes_entry_absent() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TokenCache::with_dir(dir.path().to_path_buf());

    cache.set(SESSION_TOKEN_KEY, b"tok_abc").await;
    cache.clear(SESSION_TOKEN_KEY).await;
    assert!(cache.get(SESSION_TOKEN_KEY).await.is_none());
}

#[tokio::test]
async fn test_overwrite_keeps_latest_value() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TokenCache::with_dir(dir.path().to_path_buf());

    cache.set(SESSION_TOKEN_KEY, b"tok_old").await;
    cache.set(SESSION_TOKEN_KEY, b"tok_new").await;
    assert_eq!(
        cache.get(SESSION_TOKEN_KEY).await.as_deref(),
        Some(b"tok_new".as_slice())
    );
}

#[tokio::test]
async fn test_write_failure_is_silently_ignored() {
    // Parent path is a regular file, so the directory can never be
    // created and the write must fail - without panicking or erroring.
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file, not dir").unwrap();

    let cache = TokenCache::with_dir(blocker.join("nested"));
    cache.set(SESSION_TOKEN_KEY, b"tok_abc").await;
    assert!(cache.get(SESSION_TOKEN_KEY).await.is_none());
}

#[tokio::test]
async fn test_creates_directory_on_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let cache = TokenCache::with_dir(nested);

    cache.set(SESSION_TOKEN_KEY, b"tok_abc").await;
    assert_eq!(
        cache.get(SESSION_TOKEN_KEY).await.as_deref(),
        Some(b"tok_abc".as_slice())
    );
}
