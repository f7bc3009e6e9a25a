//! Query Engine for Aurora.
//!
//! Pure projection from the full bookmark/folder collections plus view
//! inputs (search query, folder selection, sort order) to the visible
//! folder and bookmark lists. No I/O, no errors; recomputed synchronously
//! whenever any input changes.

use chrono::DateTime;

use crate::types::bookmark::{Bookmark, Folder, FolderSelection};

/// Sort order for the visible bookmark list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
}

/// The derived view: what the UI renders.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub visible_folders: Vec<Folder>,
    pub visible_bookmarks: Vec<Bookmark>,
}

/// Sortable key for a stored `created_at` value.
///
/// Unparseable timestamps fail closed as oldest rather than producing an
/// undefined ordering.
pub fn created_at_key(created_at: &str) -> i64 {
    DateTime::parse_from_rfc3339(created_at)
        .map(|ts| ts.timestamp_micros())
        .unwrap_or(i64::MIN)
}

/// Whether a bookmark matches the (already lowercased) search query.
/// A missing description simply does not match.
fn matches_query(bookmark: &Bookmark, query: &str) -> bool {
    bookmark.title.to_lowercase().contains(query)
        || bookmark
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
}

/// Computes the visible folders and bookmarks.
///
/// Bookmarks pass the search predicate (case-insensitive substring on title
/// or description; empty query matches everything) and the folder-selection
/// predicate, then sort stably by `created_at`. Folders are unrestricted
/// while the query is empty; during a search, a folder stays visible when
/// its name matches the query or it contains a search-matched bookmark.
/// Containment is judged against the search matches before the folder
/// filter, so matches in other folders still surface their folder.
pub fn evaluate(
    bookmarks: &[Bookmark],
    folders: &[Folder],
    query: &str,
    selection: &FolderSelection,
    sort: SortOrder,
) -> QueryResult {
    let query = query.trim().to_lowercase();

    let search_matched: Vec<&Bookmark> = if query.is_empty() {
        bookmarks.iter().collect()
    } else {
        bookmarks.iter().filter(|b| matches_query(b, &query)).collect()
    };

    let mut visible_bookmarks: Vec<Bookmark> = search_matched
        .iter()
        .filter(|b| selection.matches(b.folder_id.as_deref()))
        .map(|b| (*b).clone())
        .collect();

    // Stable sort: equal timestamps keep their relative input order.
    match sort {
        SortOrder::Newest => {
            visible_bookmarks
                .sort_by_key(|b| std::cmp::Reverse(created_at_key(&b.created_at)));
        }
        SortOrder::Oldest => {
            visible_bookmarks.sort_by_key(|b| created_at_key(&b.created_at));
        }
    }

    let visible_folders: Vec<Folder> = if query.is_empty() {
        folders.to_vec()
    } else {
        let referenced: std::collections::HashSet<&str> = search_matched
            .iter()
            .filter_map(|b| b.folder_id.as_deref())
            .collect();
        folders
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&query) || referenced.contains(f.id.as_str()))
            .cloned()
            .collect()
    };

    QueryResult {
        visible_folders,
        visible_bookmarks,
    }
}
