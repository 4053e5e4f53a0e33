//! # Editor Access & Profile Bootstrap
//!
//! Boundary calls only. Which callers count as admins is decided entirely by
//! the backend; this module just consumes the answer.

use pagecraft_content::{UserProfile, UserRole};
use pagecraft_service::{ContentService, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted(UserRole),
    Denied(UserRole),
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted(_))
    }
}

/// Ask the backend whether the caller may open the editor.
pub async fn check_editor_access(
    service: &dyn ContentService,
) -> Result<AccessDecision, ServiceError> {
    let role = service.get_caller_user_role().await?;
    if service.is_caller_admin().await? {
        Ok(AccessDecision::Granted(role))
    } else {
        Ok(AccessDecision::Denied(role))
    }
}

/// First-visit profile bootstrap: create the caller's profile only when one
/// does not exist yet. One profile per identity.
pub async fn ensure_profile(
    service: &dyn ContentService,
    name: &str,
) -> Result<UserProfile, ServiceError> {
    if let Some(existing) = service.get_caller_user_profile().await? {
        return Ok(existing);
    }

    let profile = UserProfile {
        name: name.trim().to_string(),
    };
    service.save_caller_user_profile(profile.clone()).await?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_service::InMemoryContentService;

    #[tokio::test]
    async fn test_admin_is_granted() {
        let service = InMemoryContentService::new();
        let decision = check_editor_access(&service).await.unwrap();
        assert_eq!(decision, AccessDecision::Granted(UserRole::Admin));
        assert!(decision.is_granted());
    }

    #[tokio::test]
    async fn test_guest_is_denied() {
        let service = InMemoryContentService::new();
        service.set_role(UserRole::Guest).await;

        let decision = check_editor_access(&service).await.unwrap();
        assert_eq!(decision, AccessDecision::Denied(UserRole::Guest));
    }

    #[tokio::test]
    async fn test_ensure_profile_creates_once() {
        let service = InMemoryContentService::new();

        let created = ensure_profile(&service, "  Ada  ").await.unwrap();
        assert_eq!(created.name, "Ada");

        // Second visit keeps the existing profile.
        let kept = ensure_profile(&service, "Someone Else").await.unwrap();
        assert_eq!(kept.name, "Ada");
    }
}
