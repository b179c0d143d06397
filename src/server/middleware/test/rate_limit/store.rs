use super::*;

/// Tests that hits within one window are counted per key.
///
/// Expected: counts 1, 2, 3 for one key and 1 for another
#[tokio::test]
async fn counts_hits_per_key() -> Result<(), AppError> {
    let store = InMemoryStore::new();
    let window = Duration::from_secs(60);

    assert_eq!(store.hit("a", window).await?, 1);
    assert_eq!(store.hit("a", window).await?, 2);
    assert_eq!(store.hit("a", window).await?, 3);
    assert_eq!(store.hit("b", window).await?, 1);

    Ok(())
}

/// Tests that a new window restarts the count.
///
/// Expected: count returns to 1 after the window elapses
#[tokio::test]
async fn resets_after_window() -> Result<(), AppError> {
    let store = InMemoryStore::new();
    let window = Duration::from_millis(50);

    store.hit("a", window).await?;
    assert_eq!(store.hit("a", window).await?, 2);

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(store.hit("a", window).await?, 1);

    Ok(())
}
