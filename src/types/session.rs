use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, as reported by the authentication
/// collaborator. Token issuance and cookie handling stay upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}
