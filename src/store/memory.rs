//! In-process store for Aurora.
//!
//! Implements [`RemoteStore`] over plain vectors behind a mutex. Useful for
//! tests and the demo binary; state is discarded when the store is dropped.
//! Mirrors the remote contract: ids and timestamps are assigned here, listing
//! orders match the real backend, and every record is scoped to one owner.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::services::query_engine;
use crate::store::remote::RemoteStore;
use crate::types::bookmark::{Bookmark, Folder, BookmarkDraft, NewBookmark, NewFolder};
use crate::types::errors::StoreError;

#[derive(Default)]
struct Collections {
    bookmarks: Vec<Bookmark>,
    folders: Vec<Folder>,
}

/// Owner-scoped in-memory store.
pub struct MemoryStore {
    owner_id: String,
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new(owner_id: &str) -> Self {
        Self {
            owner_id: owner_id.to_string(),
            inner: Mutex::new(Collections::default()),
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Collections> {
        // Lock poisoning cannot occur: no panic happens while holding it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Seeds a bookmark row directly, bypassing id/timestamp assignment.
    /// Test hook for shaping exact collection contents.
    pub fn seed_bookmark(&self, bookmark: Bookmark) {
        self.guard().bookmarks.push(bookmark);
    }
}

impl RemoteStore for MemoryStore {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError> {
        let inner = self.guard();
        let mut rows: Vec<Bookmark> = inner
            .bookmarks
            .iter()
            .filter(|b| b.owner_id == self.owner_id)
            .cloned()
            .collect();
        // Newest first, insertion order on ties, same as the backend.
        rows.sort_by_key(|b| std::cmp::Reverse(query_engine::created_at_key(&b.created_at)));
        Ok(rows)
    }

    async fn insert_bookmark(&self, record: NewBookmark) -> Result<Bookmark, StoreError> {
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: record.title,
            description: record.description,
            link: record.link,
            folder_id: record.folder_id,
            owner_id: record.owner_id,
            created_at: Utc::now().to_rfc3339(),
        };
        self.guard().bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn update_bookmark(&self, id: &str, fields: BookmarkDraft) -> Result<(), StoreError> {
        let mut inner = self.guard();
        let row = inner
            .bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        row.title = fields.title;
        row.description = fields.description;
        row.link = fields.link;
        Ok(())
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.guard();
        let before = inner.bookmarks.len();
        inner.bookmarks.retain(|b| b.id != id);
        if inner.bookmarks.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn list_folders(&self) -> Result<Vec<Folder>, StoreError> {
        let inner = self.guard();
        let mut rows: Vec<Folder> = inner
            .folders
            .iter()
            .filter(|f| f.owner_id == self.owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert_folder(&self, record: NewFolder) -> Result<Folder, StoreError> {
        let folder = Folder {
            id: Uuid::new_v4().to_string(),
            name: record.name,
            owner_id: record.owner_id,
        };
        self.guard().folders.push(folder.clone());
        Ok(folder)
    }

    async fn delete_folder(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.guard();
        let before = inner.folders.len();
        inner.folders.retain(|f| f.id != id);
        if inner.folders.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
