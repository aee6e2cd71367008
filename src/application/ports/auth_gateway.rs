use crate::domain::entities::{Session, UserKind};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Outcome of a sign-up: a session when confirmation is disabled, or a
/// pending marker when the user still has to click the e-mail link.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    Session(Session),
    ConfirmationPending,
}

/// Remote identity provider (GoTrue-style token endpoints).
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError>;
    /// Creates the auth user with the account kind stored as user metadata.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        kind: UserKind,
    ) -> Result<SignUpOutcome, AppError>;
    async fn refresh(&self, refresh_token: &str) -> Result<Session, AppError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;
    /// Sends a magic-link e-mail pointing back at the app callback.
    async fn send_magic_link(&self, email: &str, redirect_to: &str) -> Result<(), AppError>;
    /// Exchanges a PKCE authorization code for a session.
    async fn exchange_code(&self, code: &str, verifier: &str) -> Result<Session, AppError>;
    /// Verifies an e-mail OTP token hash (signup confirmation, magic link,
    /// recovery) and returns the resulting session.
    async fn verify_token_hash(&self, token_hash: &str, kind: &str) -> Result<Session, AppError>;
    async fn send_recovery(&self, email: &str, redirect_to: &str) -> Result<(), AppError>;
    async fn update_password(&self, access_token: &str, new_password: &str)
        -> Result<(), AppError>;
    /// Writes the account kind into the auth user's metadata.
    async fn update_user_kind(&self, access_token: &str, kind: UserKind) -> Result<(), AppError>;
}
