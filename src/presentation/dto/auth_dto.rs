use super::Validate;
use crate::domain::entities::{Session, SessionState, UserKind};
use crate::shared::validation::{
    validate_email, validate_password, validate_password_confirmation,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl Validate for SignInRequest {
    fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    /// `DESIGNER` or `CLIENTE`.
    pub tipo: String,
}

impl SignUpRequest {
    pub fn kind(&self) -> Option<UserKind> {
        UserKind::parse(&self.tipo)
    }
}

impl Validate for SignUpRequest {
    fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        validate_password_confirmation(&self.password, &self.password_confirmation)?;
        if self.kind().is_none() {
            return Err(format!("unknown account tipo: {}", self.tipo));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

impl Validate for EmailRequest {
    fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
    pub password_confirmation: String,
}

impl Validate for UpdatePasswordRequest {
    fn validate(&self) -> Result<(), String> {
        validate_password(&self.password)?;
        validate_password_confirmation(&self.password, &self.password_confirmation)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub email: Option<String>,
    pub tipo: Option<String>,
    pub expires_at: Option<String>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user.id.clone(),
            email: session.user.email.clone(),
            tipo: session.user.kind.map(|k| k.as_wire().to_string()),
            expires_at: session.expires_at.map(|at| at.to_rfc3339()),
        }
    }
}

/// What the shell renders its auth gate from.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStateResponse {
    pub loading: bool,
    pub authenticated: bool,
    pub session: Option<SessionResponse>,
}

impl From<&SessionState> for SessionStateResponse {
    fn from(state: &SessionState) -> Self {
        Self {
            loading: state.loading,
            authenticated: state.is_authenticated(),
            session: state.session.as_ref().map(SessionResponse::from),
        }
    }
}
