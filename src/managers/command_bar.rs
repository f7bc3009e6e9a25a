//! Command Bar state machine for Aurora.
//!
//! Governs the add/edit modal: closed, open in create mode, or open in edit
//! mode over an existing bookmark. Opening always resets the form fields to
//! the new target's state, so a previous session can never leak stale
//! values. Submission validates locally and hands a [`Submission`] to the
//! caller; the network round trip belongs to the sync manager.

use crate::types::bookmark::{Bookmark, BookmarkDraft};
use crate::types::errors::SyncError;

/// Current mode of the command bar.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandBarState {
    Closed,
    OpenCreate,
    OpenEdit(Bookmark),
}

/// Validated submission handed off to the sync manager.
#[derive(Debug, Clone)]
pub enum Submission {
    Create(BookmarkDraft),
    Update { id: String, draft: BookmarkDraft },
}

pub struct CommandBar {
    state: CommandBarState,
    title: String,
    description: String,
    link: String,
}

impl CommandBar {
    pub fn new() -> Self {
        Self {
            state: CommandBarState::Closed,
            title: String::new(),
            description: String::new(),
            link: String::new(),
        }
    }

    pub fn state(&self) -> &CommandBarState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != CommandBarState::Closed
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_link(&mut self, link: &str) {
        self.link = link.to_string();
    }

    /// Opens in create mode with empty fields. Re-entrant: opening while
    /// already open discards whatever the previous session typed.
    pub fn open_create(&mut self) {
        self.title.clear();
        self.description.clear();
        self.link.clear();
        self.state = CommandBarState::OpenCreate;
    }

    /// Opens in edit mode, pre-populating the fields from the bookmark.
    pub fn open_edit(&mut self, bookmark: &Bookmark) {
        self.title = bookmark.title.clone();
        self.description = bookmark.description.clone().unwrap_or_default();
        self.link = bookmark.link.clone().unwrap_or_default();
        self.state = CommandBarState::OpenEdit(bookmark.clone());
    }

    /// Cancel path: overlay click or explicit close.
    pub fn close(&mut self) {
        self.state = CommandBarState::Closed;
    }

    /// Validates the form and yields the submission for the sync manager.
    ///
    /// An empty title blocks submission before any network involvement and
    /// leaves the bar open; a successful submission closes it.
    pub fn submit(&mut self) -> Result<Submission, SyncError> {
        if self.title.trim().is_empty() {
            return Err(SyncError::Validation("title is required".to_string()));
        }
        let draft = BookmarkDraft {
            title: self.title.clone(),
            description: non_empty(&self.description),
            link: non_empty(&self.link),
        };
        let submission = match &self.state {
            CommandBarState::Closed => {
                return Err(SyncError::Validation(
                    "command bar is not open".to_string(),
                ))
            }
            CommandBarState::OpenCreate => Submission::Create(draft),
            CommandBarState::OpenEdit(bookmark) => Submission::Update {
                id: bookmark.id.clone(),
                draft,
            },
        };
        self.state = CommandBarState::Closed;
        Ok(submission)
    }
}

impl Default for CommandBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional form fields submit as `None` when left blank.
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
