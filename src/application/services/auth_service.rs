use crate::application::ports::{AuthGateway, SecureStore, SignUpOutcome};
use crate::domain::entities::{Session, SessionState, UserKind};
use crate::domain::value_objects::PkcePair;
use crate::shared::error::AppError;
use crate::shared::validation::{
    validate_email, validate_password, validate_password_confirmation,
};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

const REFRESH_TOKEN_KEY: &str = "viu:refresh_token";

/// Owns session truth. Every auth flow ends by publishing the new
/// [`SessionState`] through the watch channel; everything that gates on
/// authentication subscribes here.
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    secure_store: Arc<dyn SecureStore>,
    redirect_url: String,
    state_tx: watch::Sender<SessionState>,
    pending_verifier: Mutex<Option<String>>,
}

impl AuthService {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        secure_store: Arc<dyn SecureStore>,
        redirect_url: String,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::restoring());
        Self {
            gateway,
            secure_store,
            redirect_url,
            state_tx,
            pending_verifier: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn current_state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Cold-start restoration: tries the stored refresh token. The channel
    /// stays in the loading state until this resolves one way or the other.
    pub async fn init(&self) {
        let stored = match self.secure_store.get(REFRESH_TOKEN_KEY).await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "refresh token read failed");
                None
            }
        };
        match stored {
            Some(refresh_token) => match self.gateway.refresh(&refresh_token).await {
                Ok(session) => self.publish_session(session).await,
                Err(err) => {
                    debug!(error = %err, "stored session restore failed");
                    if let Err(err) = self.secure_store.remove(REFRESH_TOKEN_KEY).await {
                        warn!(error = %err, "refresh token cleanup failed");
                    }
                    let _ = self.state_tx.send(SessionState::default());
                }
            },
            None => {
                let _ = self.state_tx.send(SessionState::default());
            }
        }
    }

    /// Drops session state without touching the remote. Used on teardown.
    pub fn teardown(&self) {
        let _ = self.state_tx.send(SessionState::default());
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        validate_email(email).map_err(AppError::ValidationError)?;
        validate_password(password).map_err(AppError::ValidationError)?;
        let session = self.gateway.sign_in(email, password).await?;
        self.publish_session(session.clone()).await;
        Ok(session)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        confirmation: &str,
        kind: UserKind,
    ) -> Result<SignUpOutcome, AppError> {
        validate_email(email).map_err(AppError::ValidationError)?;
        validate_password(password).map_err(AppError::ValidationError)?;
        validate_password_confirmation(password, confirmation)
            .map_err(AppError::ValidationError)?;
        let outcome = self.gateway.sign_up(email, password, kind).await?;
        if let SignUpOutcome::Session(session) = &outcome {
            self.publish_session(session.clone()).await;
        }
        Ok(outcome)
    }

    pub async fn send_magic_link(&self, email: &str) -> Result<(), AppError> {
        validate_email(email).map_err(AppError::ValidationError)?;
        self.gateway
            .send_magic_link(email, &self.redirect_url)
            .await
    }

    pub async fn send_recovery(&self, email: &str) -> Result<(), AppError> {
        validate_email(email).map_err(AppError::ValidationError)?;
        self.gateway.send_recovery(email, &self.redirect_url).await
    }

    pub async fn update_password(
        &self,
        new_password: &str,
        confirmation: &str,
    ) -> Result<(), AppError> {
        validate_password(new_password).map_err(AppError::ValidationError)?;
        validate_password_confirmation(new_password, confirmation)
            .map_err(AppError::ValidationError)?;
        let access_token = self.require_access_token()?;
        self.gateway
            .update_password(&access_token, new_password)
            .await
    }

    /// Writes the account kind into auth metadata. Best-effort callers log
    /// and move on when this fails.
    pub async fn persist_user_kind(&self, kind: UserKind) -> Result<(), AppError> {
        let access_token = self.require_access_token()?;
        self.gateway.update_user_kind(&access_token, kind).await
    }

    /// Starts a PKCE authorization and returns the S256 challenge the shell
    /// puts in the authorize URL. The verifier is kept for the callback.
    pub async fn start_pkce(&self) -> String {
        let pair = PkcePair::generate();
        let challenge = pair.challenge.clone();
        *self.pending_verifier.lock().await = Some(pair.verifier);
        challenge
    }

    /// Completes the PKCE flow with the code delivered via deep link.
    pub async fn exchange_code(&self, code: &str) -> Result<Session, AppError> {
        let verifier = self
            .pending_verifier
            .lock()
            .await
            .take()
            .ok_or_else(|| AppError::Auth("No authorization in progress".to_string()))?;
        let session = self.gateway.exchange_code(code, &verifier).await?;
        self.publish_session(session.clone()).await;
        Ok(session)
    }

    /// Verifies an e-mail OTP token hash (confirmation, magic link, recovery).
    pub async fn verify_token_hash(
        &self,
        token_hash: &str,
        kind: &str,
    ) -> Result<Session, AppError> {
        let session = self.gateway.verify_token_hash(token_hash, kind).await?;
        self.publish_session(session.clone()).await;
        Ok(session)
    }

    pub async fn refresh_session(&self) -> Result<Session, AppError> {
        let refresh_token = self
            .current_state()
            .session
            .map(|s| s.refresh_token)
            .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))?;
        let session = self.gateway.refresh(&refresh_token).await?;
        self.publish_session(session.clone()).await;
        Ok(session)
    }

    pub async fn sign_out(&self) -> Result<(), AppError> {
        if let Some(session) = self.current_state().session {
            if let Err(err) = self.gateway.sign_out(&session.access_token).await {
                debug!(error = %err, "remote sign-out failed");
            }
        }
        if let Err(err) = self.secure_store.remove(REFRESH_TOKEN_KEY).await {
            warn!(error = %err, "refresh token removal failed");
        }
        let _ = self.state_tx.send(SessionState::default());
        Ok(())
    }

    fn require_access_token(&self) -> Result<String, AppError> {
        self.current_state()
            .session
            .map(|s| s.access_token)
            .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))
    }

    async fn publish_session(&self, session: Session) {
        if let Err(err) = self
            .secure_store
            .set(REFRESH_TOKEN_KEY, &session.refresh_token)
            .await
        {
            warn!(error = %err, "refresh token persist failed");
        }
        let _ = self.state_tx.send(SessionState {
            loading: false,
            session: Some(session),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuthUser;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub Gateway {}

        #[async_trait]
        impl AuthGateway for Gateway {
            async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError>;
            async fn sign_up(
                &self,
                email: &str,
                password: &str,
                kind: UserKind,
            ) -> Result<SignUpOutcome, AppError>;
            async fn refresh(&self, refresh_token: &str) -> Result<Session, AppError>;
            async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;
            async fn send_magic_link(&self, email: &str, redirect_to: &str) -> Result<(), AppError>;
            async fn exchange_code(&self, code: &str, verifier: &str) -> Result<Session, AppError>;
            async fn verify_token_hash(
                &self,
                token_hash: &str,
                kind: &str,
            ) -> Result<Session, AppError>;
            async fn send_recovery(&self, email: &str, redirect_to: &str) -> Result<(), AppError>;
            async fn update_password(
                &self,
                access_token: &str,
                new_password: &str,
            ) -> Result<(), AppError>;
            async fn update_user_kind(
                &self,
                access_token: &str,
                kind: UserKind,
            ) -> Result<(), AppError>;
        }
    }

    mock! {
        pub Secure {}

        #[async_trait]
        impl SecureStore for Secure {
            async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
            async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
            async fn remove(&self, key: &str) -> Result<(), AppError>;
        }
    }

    fn session(access: &str, refresh: &str) -> Session {
        Session {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            expires_at: None,
            user: AuthUser {
                id: "auth-1".to_string(),
                email: Some("ana@example.com".to_string()),
                kind: Some(UserKind::Designer),
            },
        }
    }

    fn service(gateway: MockGateway, secure: MockSecure) -> AuthService {
        AuthService::new(
            Arc::new(gateway),
            Arc::new(secure),
            "com.viu.app://auth/callback".to_string(),
        )
    }

    #[tokio::test]
    async fn sign_in_publishes_session_and_persists_refresh_token() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_sign_in()
            .with(eq("ana@example.com"), eq("secret-password"))
            .times(1)
            .returning(|_, _| Ok(session("at-1", "rt-1")));
        let mut secure = MockSecure::new();
        secure
            .expect_set()
            .with(eq(REFRESH_TOKEN_KEY), eq("rt-1"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(gateway, secure);
        let mut rx = service.subscribe();
        assert!(rx.borrow().loading);

        service
            .sign_in("ana@example.com", "secret-password")
            .await
            .unwrap();

        rx.changed().await.unwrap();
        let state = rx.borrow().clone();
        assert!(!state.loading);
        assert!(state.is_authenticated());
    }

    #[tokio::test]
    async fn sign_in_rejects_bad_email_without_remote_call() {
        let service = service(MockGateway::new(), MockSecure::new());
        let result = service.sign_in("not-an-email", "secret-password").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn init_without_stored_token_resolves_signed_out() {
        let mut secure = MockSecure::new();
        secure.expect_get().times(1).returning(|_| Ok(None));

        let service = service(MockGateway::new(), secure);
        service.init().await;
        let state = service.current_state();
        assert!(!state.loading);
        assert!(state.session.is_none());
    }

    #[tokio::test]
    async fn init_clears_stored_token_when_refresh_is_rejected() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_refresh()
            .with(eq("stale-token"))
            .times(1)
            .returning(|_| Err(AppError::Auth("invalid grant".to_string())));
        let mut secure = MockSecure::new();
        secure
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some("stale-token".to_string())));
        secure
            .expect_remove()
            .with(eq(REFRESH_TOKEN_KEY))
            .times(1)
            .returning(|_| Ok(()));

        let service = service(gateway, secure);
        service.init().await;
        assert!(!service.current_state().is_authenticated());
    }

    #[tokio::test]
    async fn exchange_code_requires_a_pending_verifier() {
        let service = service(MockGateway::new(), MockSecure::new());
        let result = service.exchange_code("code-1").await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn exchange_code_uses_the_stored_verifier_once() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_exchange_code()
            .withf(|code, verifier| code == "code-1" && !verifier.is_empty())
            .times(1)
            .returning(|_, _| Ok(session("at-2", "rt-2")));
        let mut secure = MockSecure::new();
        secure.expect_set().returning(|_, _| Ok(()));

        let service = service(gateway, secure);
        service.start_pkce().await;
        service.exchange_code("code-1").await.unwrap();
        assert!(service.exchange_code("code-1").await.is_err());
    }

    #[tokio::test]
    async fn sign_out_clears_state_even_when_remote_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_sign_in()
            .returning(|_, _| Ok(session("at-3", "rt-3")));
        gateway
            .expect_sign_out()
            .times(1)
            .returning(|_| Err(AppError::Network("offline".to_string())));
        let mut secure = MockSecure::new();
        secure.expect_set().returning(|_, _| Ok(()));
        secure.expect_remove().times(1).returning(|_| Ok(()));

        let service = service(gateway, secure);
        service
            .sign_in("ana@example.com", "secret-password")
            .await
            .unwrap();
        service.sign_out().await.unwrap();
        assert!(!service.current_state().is_authenticated());
    }
}
