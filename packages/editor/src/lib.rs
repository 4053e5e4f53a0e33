//! # Pagecraft Editor
//!
//! Draft editor state machine for the site content.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle → Loading → Ready ⇄ Saving/Publishing → Ready
//!          ↓
//!      LoadFailed (retryable)
//! ```
//!
//! ## Core Principles
//!
//! 1. **One-time sync on arrival**: the form is populated from the fetched
//!    Draft snapshot once; later background refreshes never overwrite local
//!    edits while the editor is open.
//! 2. **Full replacement**: save submits the whole form snapshot as a
//!    complete `WebsiteContent`, never a partial merge.
//! 3. **Confirmation gate**: the remote publish call cannot fire until the
//!    user explicitly acknowledges the confirmation step; a failed publish
//!    disarms the gate.
//! 4. **One mutation in flight**: save and publish are serialized per
//!    session; the triggering controls stay disabled until the prior
//!    operation resolves.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::EditorSession;
//!
//! let mut session = EditorSession::new(store);
//! session.open().await?;
//! session.edit(|form| form.site_title = "New title".to_string())?;
//! session.save().await?;
//! session.request_publish();
//! session.confirm_publish().await?;
//! ```

mod access;
mod errors;
mod form;
mod session;

pub use access::{check_editor_access, ensure_profile, AccessDecision};
pub use errors::EditorError;
pub use form::{ContentForm, GALLERY_IMAGES};
pub use session::{EditorSession, EditorState};
