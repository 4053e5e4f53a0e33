//! Integration tests for the draft/publish lifecycle through the store.

use pagecraft_content::WebsiteContent;
use pagecraft_service::{ContentService, InMemoryContentService, ServiceHandle};
use pagecraft_store::{CacheEvent, CacheSlot, ContentStore};
use std::sync::Arc;

fn store_with_backend() -> (ContentStore, Arc<InMemoryContentService>) {
    let backend = Arc::new(InMemoryContentService::new());
    let handle = ServiceHandle::from_service(backend.clone());
    (ContentStore::new(handle), backend)
}

fn edited(mut content: WebsiteContent, title: &str) -> WebsiteContent {
    content.site_title = title.to_string();
    content
}

#[tokio::test]
async fn test_save_never_mutates_live() {
    let (store, _backend) = store_with_backend();

    let original = store.live().await.unwrap();
    let draft = edited(store.draft().await.unwrap(), "Draft only");

    store.save_draft(draft.clone()).await.unwrap();

    // Draft read sees the save, Live read sees the pre-save value.
    assert_eq!(store.draft().await.unwrap(), draft);
    assert_eq!(store.live().await.unwrap(), original);
}

#[tokio::test]
async fn test_save_invalidates_only_draft_slot() {
    let (store, _backend) = store_with_backend();

    store.live().await.unwrap();
    store.draft().await.unwrap();
    let live_version = store.slot_version(CacheSlot::Live);

    let draft = edited(store.draft().await.unwrap(), "B");
    store.save_draft(draft).await.unwrap();

    // Next draft read refetches (version bumps), live stays cached.
    store.draft().await.unwrap();
    assert_eq!(store.slot_version(CacheSlot::Draft), 2);

    store.live().await.unwrap();
    assert_eq!(store.slot_version(CacheSlot::Live), live_version);
}

#[tokio::test]
async fn test_publish_updates_live_read_without_manual_refresh() {
    let (store, _backend) = store_with_backend();

    // Warm the live cache with the old content.
    let old_live = store.live().await.unwrap();

    let draft = edited(store.draft().await.unwrap(), "Published title");
    store.save_draft(draft.clone()).await.unwrap();
    assert_eq!(store.live().await.unwrap(), old_live);

    let outcome = store.publish().await.unwrap();
    assert!(outcome.live_refreshed);

    // No invalidate-then-wait: the coordinator already refetched.
    assert_eq!(store.peek(CacheSlot::Live).unwrap(), draft);
    assert_eq!(store.live().await.unwrap(), draft);
}

#[tokio::test]
async fn test_publish_notifies_live_observers() {
    let (store, _backend) = store_with_backend();
    let mut events = store.subscribe();

    let draft = edited(store.draft().await.unwrap(), "B");
    store.save_draft(draft).await.unwrap();
    store.publish().await.unwrap();

    let mut saw_live_refresh = false;
    while let Ok(event) = events.try_recv() {
        if matches!(
            event,
            CacheEvent::Refreshed {
                slot: CacheSlot::Live,
                ..
            }
        ) {
            saw_live_refresh = true;
        }
    }
    assert!(saw_live_refresh, "live observers must be told to re-read");
}

#[tokio::test]
async fn test_publish_is_idempotent_on_content_equality() {
    let (store, _backend) = store_with_backend();

    let draft = edited(store.draft().await.unwrap(), "Stable");
    store.save_draft(draft.clone()).await.unwrap();

    store.publish().await.unwrap();
    assert_eq!(store.live().await.unwrap(), draft);

    // Publishing again with no edits in between yields the same live copy.
    store.publish().await.unwrap();
    assert_eq!(store.live().await.unwrap(), draft);
    assert_eq!(store.draft().await.unwrap(), draft);
}

#[tokio::test]
async fn test_draft_then_publish_scenario() {
    let (store, backend) = store_with_backend();

    // Draft = Live = "A".
    let a = edited(WebsiteContent::default(), "A");
    store.save_draft(a.clone()).await.unwrap();
    store.publish().await.unwrap();

    // User edits to "B" and saves.
    let b = edited(a.clone(), "B");
    store.save_draft(b.clone()).await.unwrap();
    assert_eq!(store.draft().await.unwrap().site_title, "B");
    assert_eq!(store.live().await.unwrap().site_title, "A");

    // Publish flips the live copy.
    store.publish().await.unwrap();
    assert_eq!(store.live().await.unwrap().site_title, "B");
    assert_eq!(
        backend.get_live_content().await.unwrap().site_title,
        "B"
    );
}

#[tokio::test(start_paused = true)]
async fn test_load_retries_twice_then_succeeds() {
    let (store, backend) = store_with_backend();

    // Two transient failures fit inside the retry budget.
    backend.inject_read_failures(2);
    let content = store.live().await.unwrap();
    assert_eq!(content, WebsiteContent::default());
}

#[tokio::test(start_paused = true)]
async fn test_load_fails_after_retry_budget() {
    let (store, backend) = store_with_backend();

    backend.inject_read_failures(3);
    let err = store.live().await.unwrap_err();
    assert!(err.to_string().contains("Live"));

    // The injected failures are drained; an explicit retry now succeeds.
    assert!(store.live().await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_failed_live_refetch_does_not_fail_publish() {
    let (store, backend) = store_with_backend();

    let draft = edited(store.draft().await.unwrap(), "B");
    store.save_draft(draft.clone()).await.unwrap();

    // The publish write succeeds; every refetch attempt afterwards fails.
    backend.inject_read_failures(3);
    let outcome = store.publish().await.unwrap();
    assert!(!outcome.live_refreshed);
    assert!(outcome.live_version.is_none());

    // The backend still holds the published copy.
    assert_eq!(backend.get_live_content().await.unwrap(), draft);
}

#[tokio::test]
async fn test_fresh_reads_are_served_from_cache() {
    let (store, backend) = store_with_backend();

    store.live().await.unwrap();
    assert_eq!(store.slot_version(CacheSlot::Live), 1);

    // Backend failures are invisible while the slot is fresh.
    backend.inject_read_failures(1);
    assert!(store.live().await.is_ok());
    assert_eq!(store.slot_version(CacheSlot::Live), 1);
}
