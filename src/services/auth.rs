//! Session holder for Aurora.
//!
//! Tracks the identity the authentication collaborator reported for this
//! client. Credential checking, token issuance, and the route guard that
//! redirects unauthenticated requests all live upstream; this service only
//! answers "who is signed in" and forgets it on sign-out.

use crate::types::session::Session;

#[derive(Default)]
pub struct AuthService {
    session: Option<Session>,
}

impl AuthService {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Records the identity of a successfully authenticated user.
    pub fn sign_in(&mut self, user_id: &str, email: &str) -> &Session {
        self.session.insert(Session {
            user_id: user_id.to_string(),
            email: email.to_string(),
        })
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }

    pub fn current_user(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
