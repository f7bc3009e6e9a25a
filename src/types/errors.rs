use std::fmt;

// === StoreError ===

/// Errors reported by the remote store client.
#[derive(Debug)]
pub enum StoreError {
    /// No record with the given id exists in the collection.
    NotFound(String),
    /// The request never produced a usable response (transport failure).
    Network(String),
    /// The store answered with an error status or malformed body.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Record not found: {}", id),
            StoreError::Network(msg) => write!(f, "Store network error: {}", msg),
            StoreError::Backend(msg) => write!(f, "Store backend error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === SyncError ===

/// Errors surfaced by the sync manager while mutating or refreshing the
/// bookmark and folder collections.
#[derive(Debug)]
pub enum SyncError {
    /// Client-side validation failed; no network call was made.
    Validation(String),
    /// A full refresh failed; the previous in-memory copies are retained.
    Fetch(String),
    /// The targeted record does not exist in the store.
    NotFound(String),
    /// A delete (bookmark, or folder with its cascade) failed; selection
    /// and in-memory collections are unchanged.
    Delete(String),
    /// Any other store failure during a mutation.
    Store(String),
    /// A mutation for the same entity is already in flight.
    InFlight(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            SyncError::Fetch(msg) => write!(f, "Refresh failed: {}", msg),
            SyncError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            SyncError::Delete(msg) => write!(f, "Delete failed: {}", msg),
            SyncError::Store(msg) => write!(f, "Store error: {}", msg),
            SyncError::InFlight(id) => write!(f, "Operation already in flight: {}", id),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<StoreError> for SyncError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => SyncError::NotFound(id),
            other => SyncError::Store(other.to_string()),
        }
    }
}

// === ShortcutError ===

/// Errors related to keyboard shortcut bindings.
#[derive(Debug)]
pub enum ShortcutError {
    /// The shortcut keys conflict with an existing binding.
    Conflict(String),
    /// The provided key combination is invalid.
    InvalidKeys(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::Conflict(msg) => write!(f, "Shortcut conflict: {}", msg),
            ShortcutError::InvalidKeys(keys) => write!(f, "Invalid shortcut keys: {}", keys),
        }
    }
}

impl std::error::Error for ShortcutError {}

// === AuthError ===

/// Errors on the login path.
#[derive(Debug)]
pub enum AuthError {
    /// The rate limiter rejected the request. Terminal for this request;
    /// distinct from a backend failure and carries no retry-after.
    RateLimited,
    /// The authentication backend reported a failure.
    Backend(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::RateLimited => write!(f, "Too many requests"),
            AuthError::Backend(msg) => write!(f, "Authentication error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}
