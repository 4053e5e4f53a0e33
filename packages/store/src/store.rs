//! # Content Store
//!
//! Read-through access to the Draft and Live copies with bounded retry on
//! loads, plus the cache-invalidation coordinator that runs after save and
//! publish.

use crate::cache::{CacheEvent, CacheSlot, ContentCache};
use pagecraft_content::WebsiteContent;
use pagecraft_service::{ContentService, ServiceError, ServiceHandle};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::broadcast;

#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// A content load failed after exhausting the bounded retry budget
    /// (or immediately, for non-transient causes).
    #[error("failed to load {slot:?} content after {attempts} attempt(s): {source}")]
    Fetch {
        slot: CacheSlot,
        attempts: u32,
        #[source]
        source: ServiceError,
    },

    /// A save or publish failed. Never retried automatically; the caller
    /// surfaces the error and retries on explicit user action.
    #[error("{op} failed: {source}")]
    Mutation {
        op: &'static str,
        #[source]
        source: ServiceError,
    },
}

/// Bounded retry for content loads: transient failures only.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 2,
            delay: Duration::from_millis(1000),
        }
    }
}

/// Result of a publish, including whether the post-publish Live refetch
/// landed. Publish itself has already succeeded server-side either way.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub live_refreshed: bool,
    pub live_version: Option<u64>,
}

pub struct ContentStore {
    handle: ServiceHandle,
    cache: Mutex<ContentCache>,
    retry: RetryPolicy,
}

impl ContentStore {
    pub fn new(handle: ServiceHandle) -> Self {
        Self::with_retry_policy(handle, RetryPolicy::default())
    }

    pub fn with_retry_policy(handle: ServiceHandle, retry: RetryPolicy) -> Self {
        Self {
            handle,
            cache: Mutex::new(ContentCache::new()),
            retry,
        }
    }

    /// Published copy, cached. The public read path.
    pub async fn live(&self) -> Result<WebsiteContent, StoreError> {
        self.read_through(CacheSlot::Live).await
    }

    /// Working copy, cached. Editor read path.
    pub async fn draft(&self) -> Result<WebsiteContent, StoreError> {
        self.read_through(CacheSlot::Draft).await
    }

    /// Replace the remote Draft wholesale.
    ///
    /// On success the Draft slot is invalidated before this future resolves,
    /// so the next Draft read refetches. The Live slot is untouched either
    /// way.
    pub async fn save_draft(&self, content: WebsiteContent) -> Result<(), StoreError> {
        let service = self
            .handle
            .get()
            .await
            .map_err(|source| StoreError::Mutation { op: "save", source })?;

        service
            .update_draft_content(content)
            .await
            .map_err(|source| StoreError::Mutation { op: "save", source })?;

        self.cache.lock().unwrap().invalidate(CacheSlot::Draft);
        Ok(())
    }

    /// Copy Draft over Live, then make the public read path observe it.
    ///
    /// Coordinator sequence on success, in order:
    /// 1. mark Draft and Live stale,
    /// 2. eagerly refetch Live rather than waiting for the next
    ///    consumer-triggered read.
    ///
    /// A failed refetch does not fail the publish; it is logged and reported
    /// through [`PublishOutcome`].
    pub async fn publish(&self) -> Result<PublishOutcome, StoreError> {
        let service = self
            .handle
            .get()
            .await
            .map_err(|source| StoreError::Mutation { op: "publish", source })?;

        service
            .publish_draft()
            .await
            .map_err(|source| StoreError::Mutation { op: "publish", source })?;

        {
            let mut cache = self.cache.lock().unwrap();
            cache.invalidate(CacheSlot::Draft);
            cache.invalidate(CacheSlot::Live);
        }

        match self.fetch_with_retry(CacheSlot::Live).await {
            Ok(content) => {
                let version = self.cache.lock().unwrap().refresh(CacheSlot::Live, content);
                Ok(PublishOutcome {
                    live_refreshed: true,
                    live_version: Some(version),
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "post-publish live refetch failed; publish already succeeded server-side");
                Ok(PublishOutcome {
                    live_refreshed: false,
                    live_version: None,
                })
            }
        }
    }

    /// Observe cache invalidations and refreshes.
    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.cache.lock().unwrap().subscribe()
    }

    /// Cached copy of a slot, fresh or stale, without fetching.
    pub fn peek(&self, slot: CacheSlot) -> Option<WebsiteContent> {
        self.cache.lock().unwrap().slot(slot).value.clone()
    }

    pub fn slot_version(&self, slot: CacheSlot) -> u64 {
        self.cache.lock().unwrap().slot(slot).version
    }

    async fn read_through(&self, slot: CacheSlot) -> Result<WebsiteContent, StoreError> {
        {
            let cache = self.cache.lock().unwrap();
            let state = cache.slot(slot);
            if !state.stale {
                if let Some(value) = &state.value {
                    return Ok(value.clone());
                }
            }
        }

        let content = self.fetch_with_retry(slot).await?;
        self.cache.lock().unwrap().refresh(slot, content.clone());
        Ok(content)
    }

    async fn fetch_with_retry(&self, slot: CacheSlot) -> Result<WebsiteContent, StoreError> {
        let service = self.handle.get().await.map_err(|source| StoreError::Fetch {
            slot,
            attempts: 0,
            source,
        })?;

        let mut attempts = 0;
        loop {
            attempts += 1;
            let result = match slot {
                CacheSlot::Draft => service.get_draft_content().await,
                CacheSlot::Live => service.get_live_content().await,
            };

            match result {
                Ok(content) => return Ok(content),
                Err(source) if source.is_transient() && attempts <= self.retry.retries => {
                    tracing::warn!(
                        ?slot,
                        attempts,
                        error = %source,
                        "content load failed, retrying after fixed delay"
                    );
                    tokio::time::sleep(self.retry.delay).await;
                }
                Err(source) => {
                    return Err(StoreError::Fetch {
                        slot,
                        attempts,
                        source,
                    })
                }
            }
        }
    }
}
