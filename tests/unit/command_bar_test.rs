//! Unit tests for the Command Bar state machine.

use aurora::managers::command_bar::{CommandBar, CommandBarState, Submission};
use aurora::types::bookmark::Bookmark;
use aurora::types::errors::SyncError;

fn bookmark(id: &str, title: &str, description: Option<&str>, link: Option<&str>) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(|d| d.to_string()),
        link: link.map(|l| l.to_string()),
        folder_id: None,
        owner_id: "u1".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

#[test]
fn starts_closed_with_empty_fields() {
    let bar = CommandBar::new();
    assert_eq!(*bar.state(), CommandBarState::Closed);
    assert!(!bar.is_open());
    assert_eq!(bar.title(), "");
    assert_eq!(bar.description(), "");
    assert_eq!(bar.link(), "");
}

#[test]
fn open_create_resets_fields() {
    let mut bar = CommandBar::new();
    bar.open_create();
    bar.set_title("typed then abandoned");
    bar.close();

    bar.open_create();
    assert_eq!(*bar.state(), CommandBarState::OpenCreate);
    assert_eq!(bar.title(), "");
}

#[test]
fn open_edit_prepopulates_from_bookmark() {
    let mut bar = CommandBar::new();
    let bm = bookmark("b1", "Spec", Some("the design"), Some("https://x.test"));
    bar.open_edit(&bm);

    assert!(bar.is_open());
    assert_eq!(bar.title(), "Spec");
    assert_eq!(bar.description(), "the design");
    assert_eq!(bar.link(), "https://x.test");
}

#[test]
fn open_edit_with_missing_optionals_yields_empty_fields() {
    let mut bar = CommandBar::new();
    bar.open_edit(&bookmark("b1", "Bare", None, None));
    assert_eq!(bar.description(), "");
    assert_eq!(bar.link(), "");
}

/// Opening while already open must fully reset to the new target; stale
/// values from the previous session never leak.
#[test]
fn reopening_resets_stale_fields() {
    let mut bar = CommandBar::new();
    bar.open_create();
    bar.set_title("half-typed");
    bar.set_link("https://stale.test");

    bar.open_edit(&bookmark("b1", "Edited", None, None));
    assert_eq!(bar.title(), "Edited");
    assert_eq!(bar.link(), "");

    bar.open_create();
    assert_eq!(bar.title(), "");
}

#[test]
fn submit_in_create_mode_yields_create_submission_and_closes() {
    let mut bar = CommandBar::new();
    bar.open_create();
    bar.set_title("New one");
    bar.set_description("   ");
    bar.set_link("https://x.test");

    let submission = bar.submit().unwrap();
    match submission {
        Submission::Create(draft) => {
            assert_eq!(draft.title, "New one");
            // Blank optional fields submit as None.
            assert_eq!(draft.description, None);
            assert_eq!(draft.link.as_deref(), Some("https://x.test"));
        }
        other => panic!("expected Create submission, got {:?}", other),
    }
    assert!(!bar.is_open());
}

#[test]
fn submit_in_edit_mode_yields_update_submission_with_the_target_id() {
    let mut bar = CommandBar::new();
    bar.open_edit(&bookmark("b42", "Old", None, None));
    bar.set_title("Renamed");

    match bar.submit().unwrap() {
        Submission::Update { id, draft } => {
            assert_eq!(id, "b42");
            assert_eq!(draft.title, "Renamed");
        }
        other => panic!("expected Update submission, got {:?}", other),
    }
    assert_eq!(*bar.state(), CommandBarState::Closed);
}

#[test]
fn empty_title_blocks_submission_and_keeps_the_bar_open() {
    let mut bar = CommandBar::new();
    bar.open_create();
    bar.set_title("   ");

    let err = bar.submit().unwrap_err();
    assert!(matches!(err, SyncError::Validation(_)));
    assert!(bar.is_open());
}

#[test]
fn submit_while_closed_is_rejected() {
    let mut bar = CommandBar::new();
    bar.set_title("orphan");
    assert!(matches!(bar.submit(), Err(SyncError::Validation(_))));
}

#[test]
fn close_discards_the_session() {
    let mut bar = CommandBar::new();
    bar.open_edit(&bookmark("b1", "Spec", None, None));
    bar.close();
    assert_eq!(*bar.state(), CommandBarState::Closed);
}
