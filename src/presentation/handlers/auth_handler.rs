use crate::{
    application::{ports::SignUpOutcome, AuthService},
    presentation::dto::{
        auth_dto::{
            EmailRequest, SessionResponse, SessionStateResponse, SignInRequest, SignUpRequest,
            UpdatePasswordRequest,
        },
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct AuthHandler {
    auth_service: Arc<AuthService>,
}

impl AuthHandler {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    pub fn session_state(&self) -> SessionStateResponse {
        SessionStateResponse::from(&self.auth_service.current_state())
    }

    pub async fn sign_in(&self, request: SignInRequest) -> Result<SessionResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let session = self
            .auth_service
            .sign_in(&request.email, &request.password)
            .await?;
        Ok(SessionResponse::from(&session))
    }

    /// Returns the new session, or `None` when the backend requires the user
    /// to confirm their e-mail first.
    pub async fn sign_up(
        &self,
        request: SignUpRequest,
    ) -> Result<Option<SessionResponse>, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let kind = request
            .kind()
            .ok_or_else(|| AppError::InvalidInput(format!("unknown account tipo: {}", request.tipo)))?;

        let outcome = self
            .auth_service
            .sign_up(
                &request.email,
                &request.password,
                &request.password_confirmation,
                kind,
            )
            .await?;
        Ok(match outcome {
            SignUpOutcome::Session(session) => Some(SessionResponse::from(&session)),
            SignUpOutcome::ConfirmationPending => None,
        })
    }

    pub async fn send_magic_link(&self, request: EmailRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.auth_service.send_magic_link(&request.email).await
    }

    pub async fn send_recovery(&self, request: EmailRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.auth_service.send_recovery(&request.email).await
    }

    pub async fn update_password(&self, request: UpdatePasswordRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.auth_service
            .update_password(&request.password, &request.password_confirmation)
            .await
    }

    pub async fn sign_out(&self) -> Result<(), AppError> {
        self.auth_service.sign_out().await
    }
}
