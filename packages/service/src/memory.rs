//! # In-Memory Backend
//!
//! Reference implementation of [`ContentService`] used by tests and the CLI
//! demo flow. Holds Draft and Live copies behind a mutex; publish clones
//! Draft over Live wholesale.
//!
//! Failure injection (`inject_read_failures` / `inject_write_failures`) lets
//! callers script transient transport errors so retry and error-surfacing
//! paths are testable without a network.

use crate::{ContentService, ServiceError};
use async_trait::async_trait;
use pagecraft_content::{UserProfile, UserRole, WebsiteContent};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

struct BackendState {
    draft: WebsiteContent,
    live: WebsiteContent,
    profile: Option<UserProfile>,
    role: UserRole,
}

pub struct InMemoryContentService {
    state: Mutex<BackendState>,
    read_failures: AtomicUsize,
    write_failures: AtomicUsize,
}

impl InMemoryContentService {
    pub fn new() -> Self {
        Self::with_content(WebsiteContent::default())
    }

    /// Start with identical Draft and Live copies of `content`.
    pub fn with_content(content: WebsiteContent) -> Self {
        Self {
            state: Mutex::new(BackendState {
                draft: content.clone(),
                live: content,
                // Demo backend grants admin so every editor flow is exercisable.
                profile: None,
                role: UserRole::Admin,
            }),
            read_failures: AtomicUsize::new(0),
            write_failures: AtomicUsize::new(0),
        }
    }

    pub async fn set_role(&self, role: UserRole) {
        self.state.lock().await.role = role;
    }

    /// Fail the next `count` content reads with a transport error.
    pub fn inject_read_failures(&self, count: usize) {
        self.read_failures.store(count, Ordering::SeqCst);
    }

    /// Fail the next `count` content writes with a transport error.
    pub fn inject_write_failures(&self, count: usize) {
        self.write_failures.store(count, Ordering::SeqCst);
    }

    fn take_failure(&self, counter: &AtomicUsize) -> Result<(), ServiceError> {
        let remaining = counter.load(Ordering::SeqCst);
        if remaining > 0 {
            counter.store(remaining - 1, Ordering::SeqCst);
            return Err(ServiceError::Transport("injected failure".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryContentService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentService for InMemoryContentService {
    async fn get_live_content(&self) -> Result<WebsiteContent, ServiceError> {
        self.take_failure(&self.read_failures)?;
        Ok(self.state.lock().await.live.clone())
    }

    async fn get_draft_content(&self) -> Result<WebsiteContent, ServiceError> {
        self.take_failure(&self.read_failures)?;
        Ok(self.state.lock().await.draft.clone())
    }

    async fn update_draft_content(&self, content: WebsiteContent) -> Result<(), ServiceError> {
        self.take_failure(&self.write_failures)?;
        self.state.lock().await.draft = content;
        Ok(())
    }

    async fn publish_draft(&self) -> Result<(), ServiceError> {
        self.take_failure(&self.write_failures)?;
        let mut state = self.state.lock().await;
        state.live = state.draft.clone();
        Ok(())
    }

    async fn get_caller_user_role(&self) -> Result<UserRole, ServiceError> {
        Ok(self.state.lock().await.role)
    }

    async fn is_caller_admin(&self) -> Result<bool, ServiceError> {
        Ok(self.state.lock().await.role == UserRole::Admin)
    }

    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ServiceError> {
        Ok(self.state.lock().await.profile.clone())
    }

    async fn save_caller_user_profile(&self, profile: UserProfile) -> Result<(), ServiceError> {
        self.state.lock().await.profile = Some(profile);
        Ok(())
    }
}
