//! Sync Manager for Aurora.
//!
//! Single source of truth for the in-memory bookmark/folder collections and
//! the only component that talks to the remote store. Every mutation is
//! optimistic in the original sense: write to the store, then re-fetch the
//! authoritative state with [`refresh`](SyncManager::refresh). The locally
//! issued write is never trusted as final state.

use std::collections::HashSet;

use crate::store::remote::RemoteStore;
use crate::types::bookmark::{
    Bookmark, BookmarkDraft, Folder, FolderSelection, NewBookmark, NewFolder,
};
use crate::types::errors::SyncError;

// Guard tokens for creates, which have no entity id yet.
const CREATE_BOOKMARK_TOKEN: &str = "bookmarks:create";
const CREATE_FOLDER_TOKEN: &str = "folders:create";

/// Owns the mirrored collections, the folder selection, and the per-entity
/// in-flight guard that rejects overlapping mutations.
pub struct SyncManager<S: RemoteStore> {
    store: S,
    bookmarks: Vec<Bookmark>,
    folders: Vec<Folder>,
    selection: FolderSelection,
    pending: HashSet<String>,
}

impl<S: RemoteStore> SyncManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            bookmarks: Vec::new(),
            folders: Vec::new(),
            selection: FolderSelection::All,
            pending: HashSet::new(),
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn selection(&self) -> &FolderSelection {
        &self.selection
    }

    pub fn select(&mut self, selection: FolderSelection) {
        self.selection = selection;
    }

    pub fn bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Whether any mutation is currently in flight. Hosts must disable the
    /// submit control while this is true to avoid double-submit races.
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Marks an entity (or create token) as having a mutation in flight.
    fn begin(&mut self, token: &str) -> Result<(), SyncError> {
        if !self.pending.insert(token.to_string()) {
            return Err(SyncError::InFlight(token.to_string()));
        }
        Ok(())
    }

    fn finish(&mut self, token: &str) {
        self.pending.remove(token);
    }

    fn validate_title(draft: &BookmarkDraft) -> Result<(), SyncError> {
        if draft.title.trim().is_empty() {
            return Err(SyncError::Validation("title is required".to_string()));
        }
        Ok(())
    }

    /// Replaces both in-memory collections from the store.
    ///
    /// Both fetches must succeed before either copy is touched, so
    /// consumers never observe a half-updated state; on failure the
    /// previous copies are retained.
    pub async fn refresh(&mut self) -> Result<(), SyncError> {
        let bookmarks = self
            .store
            .list_bookmarks()
            .await
            .map_err(|e| SyncError::Fetch(e.to_string()))?;
        let folders = self
            .store
            .list_folders()
            .await
            .map_err(|e| SyncError::Fetch(e.to_string()))?;
        self.bookmarks = bookmarks;
        self.folders = folders;
        Ok(())
    }

    /// Creates a bookmark in the target folder (`None` folder when the
    /// sentinel is active), then refreshes.
    pub async fn create_bookmark(
        &mut self,
        draft: BookmarkDraft,
        target: &FolderSelection,
        owner_id: &str,
    ) -> Result<(), SyncError> {
        Self::validate_title(&draft)?;
        self.begin(CREATE_BOOKMARK_TOKEN)?;
        let result = self.create_bookmark_inner(draft, target, owner_id).await;
        self.finish(CREATE_BOOKMARK_TOKEN);
        result
    }

    async fn create_bookmark_inner(
        &mut self,
        draft: BookmarkDraft,
        target: &FolderSelection,
        owner_id: &str,
    ) -> Result<(), SyncError> {
        let record = NewBookmark {
            title: draft.title,
            description: draft.description,
            link: draft.link,
            folder_id: target.target_folder(),
            owner_id: owner_id.to_string(),
        };
        self.store.insert_bookmark(record).await?;
        self.refresh().await
    }

    /// Updates the editable fields of an existing bookmark, then refreshes.
    /// A store-reported missing id propagates as `NotFound`.
    pub async fn update_bookmark(
        &mut self,
        id: &str,
        draft: BookmarkDraft,
    ) -> Result<(), SyncError> {
        Self::validate_title(&draft)?;
        self.begin(id)?;
        let result = self.update_bookmark_inner(id, draft).await;
        self.finish(id);
        result
    }

    async fn update_bookmark_inner(
        &mut self,
        id: &str,
        draft: BookmarkDraft,
    ) -> Result<(), SyncError> {
        self.store.update_bookmark(id, draft).await?;
        self.refresh().await
    }

    /// Deletes a bookmark, then refreshes. The caller has already obtained
    /// user confirmation.
    pub async fn delete_bookmark(&mut self, id: &str) -> Result<(), SyncError> {
        self.begin(id)?;
        let result = self.delete_bookmark_inner(id).await;
        self.finish(id);
        result
    }

    async fn delete_bookmark_inner(&mut self, id: &str) -> Result<(), SyncError> {
        self.store
            .delete_bookmark(id)
            .await
            .map_err(|e| SyncError::Delete(e.to_string()))?;
        self.refresh().await
    }

    /// Creates a folder and returns its store-assigned id so the caller can
    /// auto-select it, then refreshes.
    pub async fn create_folder(
        &mut self,
        name: &str,
        owner_id: &str,
    ) -> Result<String, SyncError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SyncError::Validation("folder name is required".to_string()));
        }
        self.begin(CREATE_FOLDER_TOKEN)?;
        let result = self.create_folder_inner(name, owner_id).await;
        self.finish(CREATE_FOLDER_TOKEN);
        result
    }

    async fn create_folder_inner(
        &mut self,
        name: &str,
        owner_id: &str,
    ) -> Result<String, SyncError> {
        let folder = self
            .store
            .insert_folder(NewFolder {
                name: name.to_string(),
                owner_id: owner_id.to_string(),
            })
            .await?;
        self.refresh().await?;
        Ok(folder.id)
    }

    /// Deletes a folder together with every bookmark filed under it.
    ///
    /// Cascade policy: the dependent bookmarks are deleted explicitly
    /// first, then the folder record; the store is not assumed to enforce
    /// referential rules. Any failure aborts with `Delete` and leaves the
    /// selection and in-memory collections unchanged. If the deleted folder
    /// was the current selection, the selection resets to the sentinel
    /// before the final refresh.
    pub async fn delete_folder(&mut self, id: &str) -> Result<(), SyncError> {
        self.begin(id)?;
        let result = self.delete_folder_inner(id).await;
        self.finish(id);
        result
    }

    async fn delete_folder_inner(&mut self, id: &str) -> Result<(), SyncError> {
        let dependents: Vec<String> = self
            .bookmarks
            .iter()
            .filter(|b| b.folder_id.as_deref() == Some(id))
            .map(|b| b.id.clone())
            .collect();

        for bookmark_id in &dependents {
            self.store
                .delete_bookmark(bookmark_id)
                .await
                .map_err(|e| SyncError::Delete(e.to_string()))?;
        }
        self.store
            .delete_folder(id)
            .await
            .map_err(|e| SyncError::Delete(e.to_string()))?;

        if self.selection == FolderSelection::Folder(id.to_string()) {
            self.selection = FolderSelection::All;
        }
        self.refresh().await
    }
}
