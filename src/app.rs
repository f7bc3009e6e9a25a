//! App core for Aurora.
//!
//! Central struct wiring the sync manager, command bar, shortcut table,
//! auth session, and login rate limiter together with the view state the
//! dashboard keeps (search query, sort order). UI events land here; the
//! derived view is recomputed by the query engine on demand.

use crate::managers::command_bar::{CommandBar, Submission};
use crate::managers::shortcut_manager::{ShortcutManager, OPEN_COMMAND_BAR};
use crate::managers::sync_manager::SyncManager;
use crate::services::auth::AuthService;
use crate::services::query_engine::{self, QueryResult, SortOrder};
use crate::services::rate_limiter::RateLimiter;
use crate::store::remote::RemoteStore;
use crate::types::bookmark::FolderSelection;
use crate::types::errors::{AuthError, SyncError};
use crate::types::session::Session;

pub struct App<S: RemoteStore> {
    pub sync: SyncManager<S>,
    pub command_bar: CommandBar,
    pub shortcuts: ShortcutManager,
    pub auth: AuthService,
    pub limiter: RateLimiter,
    search_query: String,
    sort_order: SortOrder,
}

impl<S: RemoteStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            sync: SyncManager::new(store),
            command_bar: CommandBar::new(),
            shortcuts: ShortcutManager::new(),
            auth: AuthService::new(),
            limiter: RateLimiter::default(),
            search_query: String::new(),
            sort_order: SortOrder::Newest,
        }
    }

    /// Rate-limited login gate. The limiter rejection is terminal for the
    /// request and distinct from any backend failure; the actual credential
    /// check happened upstream.
    pub fn login(
        &mut self,
        identity: &str,
        user_id: &str,
        email: &str,
    ) -> Result<&Session, AuthError> {
        if !self.limiter.allow(identity) {
            return Err(AuthError::RateLimited);
        }
        Ok(self.auth.sign_in(user_id, email))
    }

    pub fn logout(&mut self) {
        self.auth.sign_out();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Updates the search query. A non-empty search always scopes across
    /// all folders, so the folder selection resets to the sentinel.
    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        if !query.trim().is_empty() {
            self.sync.select(FolderSelection::All);
        }
    }

    /// Selects a folder (or the sentinel), clearing any active search.
    pub fn select_folder(&mut self, selection: FolderSelection) {
        self.search_query.clear();
        self.sync.select(selection);
    }

    /// Derived projection of the current state for rendering.
    pub fn visible(&self) -> QueryResult {
        query_engine::evaluate(
            self.sync.bookmarks(),
            self.sync.folders(),
            &self.search_query,
            self.sync.selection(),
            self.sort_order,
        )
    }

    pub fn open_command_bar(&mut self) {
        self.command_bar.open_create();
    }

    /// Opens the command bar in edit mode over an existing bookmark.
    pub fn open_edit(&mut self, bookmark_id: &str) -> Result<(), SyncError> {
        let bookmark = self
            .sync
            .bookmark(bookmark_id)
            .cloned()
            .ok_or_else(|| SyncError::NotFound(bookmark_id.to_string()))?;
        self.command_bar.open_edit(&bookmark);
        Ok(())
    }

    /// Routes a key combination through the shortcut table. Returns whether
    /// the key was consumed.
    pub fn handle_key(&mut self, keys: &str) -> bool {
        match self.shortcuts.action_for(keys) {
            Some(action) if action == OPEN_COMMAND_BAR => {
                self.command_bar.open_create();
                true
            }
            _ => false,
        }
    }

    /// Validates and submits the command bar form, routing the result to
    /// the sync manager. Creates file under the currently selected folder.
    pub async fn submit_command_bar(&mut self) -> Result<(), SyncError> {
        let owner_id = self
            .auth
            .current_user()
            .map(|s| s.user_id.clone())
            .ok_or_else(|| SyncError::Validation("no signed-in user".to_string()))?;

        match self.command_bar.submit()? {
            Submission::Create(draft) => {
                let target = self.sync.selection().clone();
                self.sync.create_bookmark(draft, &target, &owner_id).await
            }
            Submission::Update { id, draft } => self.sync.update_bookmark(&id, draft).await,
        }
    }

    /// Creates a folder and auto-selects it, mirroring the add-folder flow.
    pub async fn add_folder(&mut self, name: &str) -> Result<String, SyncError> {
        let owner_id = self
            .auth
            .current_user()
            .map(|s| s.user_id.clone())
            .ok_or_else(|| SyncError::Validation("no signed-in user".to_string()))?;

        let id = self.sync.create_folder(name, &owner_id).await?;
        self.search_query.clear();
        self.sync.select(FolderSelection::Folder(id.clone()));
        Ok(id)
    }

    /// Deletes a bookmark. The UI has already confirmed with the user.
    pub async fn delete_bookmark(&mut self, id: &str) -> Result<(), SyncError> {
        self.sync.delete_bookmark(id).await
    }

    /// Deletes a folder and its bookmarks. The UI has already confirmed.
    pub async fn delete_folder(&mut self, id: &str) -> Result<(), SyncError> {
        self.sync.delete_folder(id).await
    }
}
