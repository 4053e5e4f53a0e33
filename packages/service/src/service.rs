//! # Content Service Boundary
//!
//! Logical operations exposed by the remote content backend.
//!
//! Draft and Live are two server-side copies of the same document. Draft
//! reads and writes require an authorized caller; `get_live_content` is the
//! public read. `publish_draft` copies Draft over Live in a single call,
//! atomic from the caller's perspective.

use crate::ServiceError;
use async_trait::async_trait;
use pagecraft_content::{UserProfile, UserRole, WebsiteContent};

#[async_trait]
pub trait ContentService: Send + Sync {
    /// Public read of the published copy.
    async fn get_live_content(&self) -> Result<WebsiteContent, ServiceError>;

    /// Editor read of the working copy.
    async fn get_draft_content(&self) -> Result<WebsiteContent, ServiceError>;

    /// Replace the working copy wholesale. Never touches Live.
    async fn update_draft_content(&self, content: WebsiteContent) -> Result<(), ServiceError>;

    /// Copy Draft over Live.
    async fn publish_draft(&self) -> Result<(), ServiceError>;

    /// Server-assigned role of the caller.
    async fn get_caller_user_role(&self) -> Result<UserRole, ServiceError>;

    /// Authorization query; the policy behind it is the backend's business.
    async fn is_caller_admin(&self) -> Result<bool, ServiceError>;

    /// Profile for the calling identity, if one was ever created.
    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ServiceError>;

    /// Create or replace the caller's profile.
    async fn save_caller_user_profile(&self, profile: UserProfile) -> Result<(), ServiceError>;
}
