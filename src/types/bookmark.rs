use serde::{Deserialize, Serialize};

/// Represents a saved bookmark as stored in the remote `bookmarks` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub folder_id: Option<String>,
    pub owner_id: String,
    /// RFC 3339 timestamp assigned by the store at creation. Immutable.
    pub created_at: String,
}

/// Represents a folder for organizing bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub owner_id: String,
}

/// Editable bookmark fields as collected by the command bar.
///
/// Used both as the create payload (before the owner/folder are attached)
/// and as the update payload for an existing bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Insert payload for the `bookmarks` collection. The store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub folder_id: Option<String>,
    pub owner_id: String,
}

/// Insert payload for the `folders` collection.
#[derive(Debug, Clone, Serialize)]
pub struct NewFolder {
    pub name: String,
    pub owner_id: String,
}

/// Folder scope for the bookmark view: either the "all bookmarks" sentinel
/// or a concrete folder id.
///
/// Folder ids are always compared as `String`s through this enum; there is
/// no loose cross-type id comparison anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderSelection {
    All,
    Folder(String),
}

impl FolderSelection {
    /// Whether a bookmark with the given `folder_id` falls inside this scope.
    pub fn matches(&self, folder_id: Option<&str>) -> bool {
        match self {
            FolderSelection::All => true,
            FolderSelection::Folder(id) => folder_id == Some(id.as_str()),
        }
    }

    /// The folder id to attach to a newly created bookmark, or `None` when
    /// the sentinel is active (the bookmark stays unfiled).
    pub fn target_folder(&self) -> Option<String> {
        match self {
            FolderSelection::All => None,
            FolderSelection::Folder(id) => Some(id.clone()),
        }
    }
}

impl Default for FolderSelection {
    fn default() -> Self {
        FolderSelection::All
    }
}
