//! Property-based tests for the Query Engine.
//!
//! For arbitrary collections and view inputs, the visible bookmark list is
//! exactly the predicate-filtered input, ordered stably by `created_at`.

use aurora::services::query_engine::{created_at_key, evaluate, SortOrder};
use aurora::types::bookmark::{Bookmark, Folder, FolderSelection};
use proptest::prelude::*;

const FOLDER_IDS: [&str; 3] = ["f1", "f2", "f3"];

// Small timestamp pool so ties actually happen.
const TIMESTAMPS: [&str; 4] = [
    "2024-01-01T00:00:00Z",
    "2024-01-02T00:00:00Z",
    "2024-01-02T00:00:00Z",
    "garbage",
];

fn arb_bookmarks() -> impl Strategy<Value = Vec<Bookmark>> {
    prop::collection::vec(
        (
            "[a-z]{0,8}",
            proptest::option::of("[a-z]{0,8}"),
            proptest::option::of(0usize..FOLDER_IDS.len()),
            0usize..TIMESTAMPS.len(),
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, description, folder, ts))| Bookmark {
                id: format!("b{}", i),
                title,
                description,
                link: None,
                folder_id: folder.map(|f| FOLDER_IDS[f].to_string()),
                owner_id: "u1".to_string(),
                created_at: TIMESTAMPS[ts].to_string(),
            })
            .collect()
    })
}

fn arb_selection() -> impl Strategy<Value = FolderSelection> {
    prop_oneof![
        Just(FolderSelection::All),
        (0usize..FOLDER_IDS.len()).prop_map(|f| FolderSelection::Folder(FOLDER_IDS[f].to_string())),
    ]
}

fn arb_sort() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Newest), Just(SortOrder::Oldest)]
}

/// Reference predicate, stated independently of the engine internals.
fn matches(bookmark: &Bookmark, query: &str, selection: &FolderSelection) -> bool {
    let query = query.trim().to_lowercase();
    let search_ok = query.is_empty()
        || bookmark.title.to_lowercase().contains(&query)
        || bookmark
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(&query))
            .unwrap_or(false);
    search_ok && selection.matches(bookmark.folder_id.as_deref())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The visible set is exactly the predicate-filtered input.
    #[test]
    fn visible_bookmarks_equal_the_predicate_filtered_set(
        bookmarks in arb_bookmarks(),
        query in "[a-z]{0,3}",
        selection in arb_selection(),
        sort in arb_sort(),
    ) {
        let view = evaluate(&bookmarks, &[], &query, &selection, sort);

        let mut expected: Vec<&str> = bookmarks
            .iter()
            .filter(|b| matches(b, &query, &selection))
            .map(|b| b.id.as_str())
            .collect();
        let mut got: Vec<&str> = view.visible_bookmarks.iter().map(|b| b.id.as_str()).collect();
        expected.sort_unstable();
        got.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    /// Keys are monotone in the requested direction, and equal keys keep
    /// their relative input order (stability).
    #[test]
    fn visible_bookmarks_are_stably_ordered(
        bookmarks in arb_bookmarks(),
        query in "[a-z]{0,3}",
        selection in arb_selection(),
        sort in arb_sort(),
    ) {
        let view = evaluate(&bookmarks, &[], &query, &selection, sort);

        let input_index = |id: &str| bookmarks.iter().position(|b| b.id == id).unwrap();
        for pair in view.visible_bookmarks.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (ka, kb) = (created_at_key(&a.created_at), created_at_key(&b.created_at));
            match sort {
                SortOrder::Newest => prop_assert!(ka >= kb),
                SortOrder::Oldest => prop_assert!(ka <= kb),
            }
            if ka == kb {
                prop_assert!(input_index(&a.id) < input_index(&b.id));
            }
        }
    }

    /// The sentinel with an empty query hides nothing.
    #[test]
    fn sentinel_all_with_empty_query_returns_everything(
        bookmarks in arb_bookmarks(),
        sort in arb_sort(),
    ) {
        let folders: Vec<Folder> = FOLDER_IDS
            .iter()
            .map(|id| Folder {
                id: id.to_string(),
                name: format!("Folder {}", id),
                owner_id: "u1".to_string(),
            })
            .collect();

        let view = evaluate(&bookmarks, &folders, "", &FolderSelection::All, sort);
        prop_assert_eq!(view.visible_bookmarks.len(), bookmarks.len());
        prop_assert_eq!(view.visible_folders.len(), folders.len());
    }
}
