use super::user_profile::UserKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated identity as reported by the auth backend. Distinct from
/// [`super::UserProfile`]: that one is the app-level row in `usuarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    /// `tipo` user metadata, when present.
    pub kind: Option<UserKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthUser,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}

/// Shared auth state published to every consumer. `loading` stays true from
/// cold start until the first restoration attempt resolves, so the shell can
/// hold rendering instead of flashing the wrong screen.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub loading: bool,
    pub session: Option<Session>,
}

impl SessionState {
    pub fn restoring() -> Self {
        Self {
            loading: true,
            session: None,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
