use super::client::SupabaseClient;
use crate::application::ports::{AuthGateway, SignUpOutcome};
use crate::domain::entities::{AuthUser, Session, UserKind};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// GoTrue REST adapter. Token-grant flows go through
/// `/auth/v1/token?grant_type=...`; everything else has its own endpoint.
pub struct GoTrueGateway {
    client: Arc<SupabaseClient>,
}

impl GoTrueGateway {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    async fn token_grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<Session, AppError> {
        let payload: SessionPayload = self
            .client
            .auth_post("token", &[("grant_type", grant_type)], &body)
            .await
            .map_err(auth_error)?;
        payload.into_session()
    }
}

fn auth_error(err: super::error::RemoteError) -> AppError {
    match AppError::from(err) {
        // token endpoints answer 400 for bad credentials / stale tokens
        AppError::InvalidInput(message) => AppError::Auth(message),
        AppError::Unauthorized(_) => AppError::Auth("invalid credentials".to_string()),
        other => other,
    }
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

impl UserPayload {
    fn into_auth_user(self) -> AuthUser {
        let kind = self
            .user_metadata
            .get("tipo")
            .and_then(|v| v.as_str())
            .and_then(UserKind::parse);
        AuthUser {
            id: self.id,
            email: self.email,
            kind,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionPayload {
    access_token: String,
    refresh_token: String,
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: UserPayload,
}

impl SessionPayload {
    fn expiry(&self) -> Option<DateTime<Utc>> {
        if let Some(at) = self.expires_at {
            return Utc.timestamp_opt(at, 0).single();
        }
        self.expires_in
            .map(|secs| Utc::now() + chrono::Duration::seconds(secs))
    }

    fn into_session(self) -> Result<Session, AppError> {
        let expires_at = self.expiry();
        Ok(Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user.into_auth_user(),
        })
    }
}

/// Sign-up answers with a session when e-mail confirmation is disabled, or
/// with only the user record when a confirmation e-mail went out.
#[derive(Debug, Deserialize)]
struct SignUpPayload {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: Option<UserPayload>,
}

#[async_trait]
impl AuthGateway for GoTrueGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        self.token_grant(
            "password",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        kind: UserKind,
    ) -> Result<SignUpOutcome, AppError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "tipo": kind.as_wire() },
        });
        let payload: SignUpPayload = self
            .client
            .auth_post("signup", &[], &body)
            .await
            .map_err(auth_error)?;
        match (payload.access_token, payload.refresh_token, payload.user) {
            (Some(access_token), Some(refresh_token), Some(user)) => {
                let session = SessionPayload {
                    access_token,
                    refresh_token,
                    expires_at: payload.expires_at,
                    expires_in: payload.expires_in,
                    user,
                }
                .into_session()?;
                Ok(SignUpOutcome::Session(session))
            }
            _ => Ok(SignUpOutcome::ConfirmationPending),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AppError> {
        self.token_grant(
            "refresh_token",
            json!({ "refresh_token": refresh_token }),
        )
        .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        self.client
            .auth_logout(access_token)
            .await
            .map_err(auth_error)
    }

    async fn send_magic_link(&self, email: &str, redirect_to: &str) -> Result<(), AppError> {
        let body = json!({ "email": email, "options": { "email_redirect_to": redirect_to } });
        self.client
            .auth_post_empty("otp", &body)
            .await
            .map_err(auth_error)
    }

    async fn exchange_code(&self, code: &str, verifier: &str) -> Result<Session, AppError> {
        self.token_grant(
            "pkce",
            json!({ "auth_code": code, "code_verifier": verifier }),
        )
        .await
    }

    async fn verify_token_hash(&self, token_hash: &str, kind: &str) -> Result<Session, AppError> {
        let body = json!({ "token_hash": token_hash, "type": kind });
        let payload: SessionPayload = self
            .client
            .auth_post("verify", &[], &body)
            .await
            .map_err(auth_error)?;
        payload.into_session()
    }

    async fn send_recovery(&self, email: &str, redirect_to: &str) -> Result<(), AppError> {
        let body = json!({ "email": email, "options": { "email_redirect_to": redirect_to } });
        self.client
            .auth_post_empty("recover", &body)
            .await
            .map_err(auth_error)
    }

    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        self.client
            .auth_put_user(access_token, &json!({ "password": new_password }))
            .await
            .map_err(auth_error)
    }

    async fn update_user_kind(&self, access_token: &str, kind: UserKind) -> Result<(), AppError> {
        self.client
            .auth_put_user(access_token, &json!({ "data": { "tipo": kind.as_wire() } }))
            .await
            .map_err(auth_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_payload_reads_tipo_metadata() {
        let payload: SessionPayload = serde_json::from_str(
            r#"{
                "access_token": "at", "refresh_token": "rt",
                "expires_at": 1767225600,
                "user": {"id": "auth-1", "email": "ana@example.com",
                         "user_metadata": {"tipo": "CLIENTE"}}
            }"#,
        )
        .unwrap();
        let session = payload.into_session().unwrap();
        assert_eq!(session.user.kind, Some(UserKind::Client));
        assert!(session.expires_at.is_some());
    }

    #[test]
    fn unknown_tipo_metadata_degrades_to_none() {
        let payload: UserPayload = serde_json::from_str(
            r#"{"id": "auth-1", "email": null, "user_metadata": {"tipo": "ADMIN"}}"#,
        )
        .unwrap();
        assert_eq!(payload.into_auth_user().kind, None);
    }
}
