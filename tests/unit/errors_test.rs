use aurora::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::NotFound("bm-1".to_string()).to_string(),
        "Record not found: bm-1"
    );
    assert_eq!(
        StoreError::Network("connection refused".to_string()).to_string(),
        "Store network error: connection refused"
    );
    assert_eq!(
        StoreError::Backend("500: oops".to_string()).to_string(),
        "Store backend error: 500: oops"
    );
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === SyncError Tests ===

#[test]
fn sync_error_display_variants() {
    assert_eq!(
        SyncError::Validation("title is required".to_string()).to_string(),
        "Validation failed: title is required"
    );
    assert_eq!(
        SyncError::Fetch("timeout".to_string()).to_string(),
        "Refresh failed: timeout"
    );
    assert_eq!(
        SyncError::NotFound("bm-2".to_string()).to_string(),
        "Bookmark not found: bm-2"
    );
    assert_eq!(
        SyncError::Delete("backend refused".to_string()).to_string(),
        "Delete failed: backend refused"
    );
    assert_eq!(
        SyncError::Store("boom".to_string()).to_string(),
        "Store error: boom"
    );
    assert_eq!(
        SyncError::InFlight("bm-3".to_string()).to_string(),
        "Operation already in flight: bm-3"
    );
}

#[test]
fn store_not_found_converts_to_sync_not_found() {
    let err: SyncError = StoreError::NotFound("bm-9".to_string()).into();
    assert!(matches!(err, SyncError::NotFound(id) if id == "bm-9"));
}

#[test]
fn other_store_errors_convert_to_sync_store() {
    let err: SyncError = StoreError::Network("down".to_string()).into();
    assert!(matches!(err, SyncError::Store(_)));
}

// === ShortcutError Tests ===

#[test]
fn shortcut_error_display_variants() {
    assert_eq!(
        ShortcutError::Conflict("'Ctrl+K' is taken".to_string()).to_string(),
        "Shortcut conflict: 'Ctrl+K' is taken"
    );
    assert_eq!(
        ShortcutError::InvalidKeys("keys cannot be empty".to_string()).to_string(),
        "Invalid shortcut keys: keys cannot be empty"
    );
}

// === AuthError Tests ===

#[test]
fn auth_error_display_variants() {
    // The limiter rejection is a flat "too many requests" with no
    // retry-after, distinguishable from a backend failure.
    assert_eq!(AuthError::RateLimited.to_string(), "Too many requests");
    assert_eq!(
        AuthError::Backend("invalid credentials".to_string()).to_string(),
        "Authentication error: invalid credentials"
    );
}
