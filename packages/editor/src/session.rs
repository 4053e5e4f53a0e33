//! # Editor Session
//!
//! State machine coordinating the draft editing lifecycle against the
//! content store.
//!
//! A session owns one form. Opening fetches the Draft copy (with the store's
//! bounded retry), populates the form once, and enters `Ready`. Save and
//! publish are serialized: while either is in flight the session reports
//! `OperationInFlight`, which is the library-level shape of disabled dialog
//! controls. Publish additionally requires an armed confirmation gate.
//!
//! Closing the session abandons local form state only; an in-flight remote
//! call is not cancelled, and its resolution after close must not mutate the
//! session (guards after each await).

use crate::{ContentForm, EditorError};
use pagecraft_store::{ContentStore, PublishOutcome};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Loading,
    LoadFailed,
    Ready,
    Saving,
    Publishing,
}

pub struct EditorSession {
    store: Arc<ContentStore>,
    state: EditorState,
    form: ContentForm,
    dirty: bool,
    /// Last failure, retained alongside the still-editable form.
    error: Option<EditorError>,
    publish_armed: bool,
    closed: bool,
}

impl EditorSession {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            state: EditorState::Idle,
            form: ContentForm::default(),
            dirty: false,
            error: None,
            publish_armed: false,
            closed: false,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn form(&self) -> &ContentForm {
        &self.form
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn last_error(&self) -> Option<&EditorError> {
        self.error.as_ref()
    }

    pub fn is_publish_armed(&self) -> bool {
        self.publish_armed
    }

    /// Fetch the Draft copy and populate the form from the snapshot.
    ///
    /// Callable from `Idle` (first open) and `LoadFailed` (retry). The form
    /// is synced exactly once per successful load; it is never overwritten
    /// while the editor stays open.
    pub async fn open(&mut self) -> Result<(), EditorError> {
        self.ensure_open()?;
        match self.state {
            EditorState::Idle | EditorState::LoadFailed => {}
            EditorState::Loading => return Err(EditorError::OperationInFlight),
            _ => return Err(EditorError::NotReady),
        }

        self.state = EditorState::Loading;
        self.error = None;

        let result = self.store.draft().await;
        if self.closed {
            return Err(EditorError::Closed);
        }

        match result {
            Ok(content) => {
                self.form = ContentForm::from_content(&content);
                self.dirty = false;
                self.state = EditorState::Ready;
                tracing::debug!("editor opened with draft snapshot");
                Ok(())
            }
            Err(err) => {
                let err = EditorError::Load(err);
                self.error = Some(err.clone());
                self.state = EditorState::LoadFailed;
                Err(err)
            }
        }
    }

    /// Retry a failed load.
    pub async fn retry_load(&mut self) -> Result<(), EditorError> {
        self.open().await
    }

    /// Apply a synchronous local edit to the form.
    pub fn edit<F>(&mut self, apply: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut ContentForm),
    {
        self.ensure_open()?;
        match self.state {
            EditorState::Ready => {
                apply(&mut self.form);
                self.dirty = true;
                Ok(())
            }
            EditorState::Saving | EditorState::Publishing => Err(EditorError::OperationInFlight),
            _ => Err(EditorError::NotReady),
        }
    }

    /// Submit the current form snapshot as a full Draft replacement.
    ///
    /// On failure the error is retained and the form untouched, so the user
    /// can retry without re-entering anything.
    pub async fn save(&mut self) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.ensure_ready()?;

        let content = self.form.to_content()?;
        self.state = EditorState::Saving;

        let result = self.store.save_draft(content).await;
        if self.closed {
            return Err(EditorError::Closed);
        }
        self.state = EditorState::Ready;

        match result {
            Ok(()) => {
                self.dirty = false;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                let err = EditorError::Save(err);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Arm the publish confirmation gate.
    pub fn request_publish(&mut self) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.ensure_ready()?;
        self.publish_armed = true;
        Ok(())
    }

    /// Disarm without publishing.
    pub fn cancel_publish(&mut self) {
        self.publish_armed = false;
    }

    /// Fire the publish, if and only if the gate is armed.
    ///
    /// On success the session closes. On failure it stays open with the error
    /// displayed and the gate disarmed: retrying requires a fresh
    /// acknowledgment.
    pub async fn confirm_publish(&mut self) -> Result<PublishOutcome, EditorError> {
        self.ensure_open()?;
        self.ensure_ready()?;
        if !self.publish_armed {
            return Err(EditorError::ConfirmationRequired);
        }

        // Gate is consumed either way.
        self.publish_armed = false;
        self.state = EditorState::Publishing;

        let result = self.store.publish().await;
        if self.closed {
            return Err(EditorError::Closed);
        }

        match result {
            Ok(outcome) => {
                if !outcome.live_refreshed {
                    tracing::warn!("published, but the live copy could not be refetched yet");
                }
                self.close();
                Ok(outcome)
            }
            Err(err) => {
                self.state = EditorState::Ready;
                let err = EditorError::Publish(err);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Abandon local form state. In-flight remote calls are not cancelled;
    /// their resolution becomes a no-op against this session.
    pub fn close(&mut self) {
        self.closed = true;
        self.form = ContentForm::default();
        self.dirty = false;
        self.publish_armed = false;
        self.state = EditorState::Idle;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), EditorError> {
        if self.closed {
            Err(EditorError::Closed)
        } else {
            Ok(())
        }
    }

    fn ensure_ready(&self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Ready => Ok(()),
            EditorState::Saving | EditorState::Publishing => Err(EditorError::OperationInFlight),
            _ => Err(EditorError::NotReady),
        }
    }
}
