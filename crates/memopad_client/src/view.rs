//! View state and user-action state machine.
//!
//! # Responsibility
//! - Track edit mode and the single transient message slot.
//! - Drive submit/edit/delete/reload flows over the REST client.
//!
//! # Invariants
//! - Edit mode is an explicit `EditingTarget` value, never stashed on UI
//!   widgets.
//! - At most one status message is visible at a time; a new message replaces
//!   the previous one.
//! - Loading messages are cleared when their request settles;
//!   success/error messages are transient and cleared after display
//!   (`take_message`, a timer in a windowed UI).

use crate::api_client::{ClientError, MemoApiClient};
use memopad_core::{Memo, MemoId};

/// Edit-mode marker: a subsequent save updates this memo instead of creating
/// a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingTarget {
    None,
    Memo(MemoId),
}

/// Category of the single status message slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Success,
    Error,
}

/// Transient message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Result of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; no request was issued.
    RejectedEmptyTitle,
    /// A new memo was created.
    Created(MemoId),
    /// The memo under edit was updated.
    Updated(MemoId),
}

/// Client application driver: REST calls plus the view state they mutate.
pub struct MemoApp {
    client: MemoApiClient,
    editing: EditingTarget,
    message: Option<StatusMessage>,
}

impl MemoApp {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: MemoApiClient::new(base_url),
            editing: EditingTarget::None,
            message: None,
        }
    }

    pub fn editing(&self) -> EditingTarget {
        self.editing
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Takes the current message out of the slot for display.
    pub fn take_message(&mut self) -> Option<StatusMessage> {
        self.message.take()
    }

    /// Reloads the full memo list; the result replaces any cached view.
    pub fn load_memos(&mut self) -> Result<Vec<Memo>, ClientError> {
        self.show(MessageKind::Loading, "Loading...");
        match self.client.list_memos() {
            Ok(memos) => {
                self.settle_loading();
                Ok(memos)
            }
            Err(err) => {
                self.show_request_error(&err);
                Err(err)
            }
        }
    }

    /// Handles form submission: create, or update when in edit mode.
    ///
    /// On success the form state (edit marker) is cleared; the caller clears
    /// its input fields and reloads the list.
    pub fn submit(&mut self, title: &str, content: &str) -> Result<SubmitOutcome, ClientError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            self.show(MessageKind::Error, "Please enter a title");
            return Ok(SubmitOutcome::RejectedEmptyTitle);
        }

        self.show(MessageKind::Loading, "Saving...");
        let result = match self.editing {
            EditingTarget::Memo(id) => self
                .client
                .update_memo(id, title, content)
                .map(|()| SubmitOutcome::Updated(id)),
            EditingTarget::None => self
                .client
                .create_memo(title, content)
                .map(SubmitOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                self.editing = EditingTarget::None;
                self.show(MessageKind::Success, "Memo saved");
                Ok(outcome)
            }
            Err(err) => {
                self.show_request_error(&err);
                Err(err)
            }
        }
    }

    /// Enters edit mode for one memo and returns its prefill values.
    pub fn begin_edit(&mut self, id: MemoId) -> Result<Memo, ClientError> {
        match self.client.get_memo(id) {
            Ok(memo) => {
                self.editing = EditingTarget::Memo(memo.id);
                self.show(
                    MessageKind::Success,
                    "Edit mode: change the fields and save",
                );
                Ok(memo)
            }
            Err(err) => {
                self.show_request_error(&err);
                Err(err)
            }
        }
    }

    /// Leaves edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = EditingTarget::None;
    }

    /// Deletes one memo; the caller confirms with the user beforehand and
    /// reloads the list on success.
    pub fn delete_memo(&mut self, id: MemoId) -> Result<(), ClientError> {
        match self.client.delete_memo(id) {
            Ok(()) => {
                if self.editing == EditingTarget::Memo(id) {
                    self.editing = EditingTarget::None;
                }
                self.show(MessageKind::Success, "Memo deleted");
                Ok(())
            }
            Err(err) => {
                self.show_request_error(&err);
                Err(err)
            }
        }
    }

    /// Borrows the underlying REST client for flows with no view state.
    pub fn client(&self) -> &MemoApiClient {
        &self.client
    }

    fn show(&mut self, kind: MessageKind, text: &str) {
        self.message = Some(StatusMessage {
            kind,
            text: text.to_string(),
        });
    }

    /// Clears the message slot once a loading message's request settled.
    fn settle_loading(&mut self) {
        if matches!(
            self.message,
            Some(StatusMessage {
                kind: MessageKind::Loading,
                ..
            })
        ) {
            self.message = None;
        }
    }

    fn show_request_error(&mut self, err: &ClientError) {
        let text = match err {
            ClientError::Network(_) => "Cannot reach the server. Is it running?".to_string(),
            ClientError::Api { message, .. } => format!("Server error: {message}"),
            ClientError::InvalidResponse(_) => "Unexpected reply from the server".to_string(),
        };
        self.show(MessageKind::Error, &text);
    }
}
