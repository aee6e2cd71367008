use serde::{Deserialize, Serialize};

use crate::domain::entities::{ProfileChanges, UserProfile};
use crate::presentation::dto::Validate;
use crate::shared::validation::require_non_empty;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub nome: Option<String>,
    pub telefone: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub ativo: Option<bool>,
}

impl UpdateProfileRequest {
    pub fn into_changes(self) -> ProfileChanges {
        ProfileChanges {
            name: self.nome,
            phone: self.telefone,
            avatar: self.avatar,
            active: self.ativo,
        }
    }
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.nome {
            require_non_empty("nome", name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub avatar: Option<String>,
    pub ativo: bool,
    pub tipo: String,
}

impl From<&UserProfile> for UserResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            nome: profile.name.clone(),
            email: profile.email.clone(),
            telefone: profile.phone.clone(),
            avatar: profile.avatar.clone(),
            ativo: profile.active,
            tipo: profile.kind.as_wire().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientStatsResponse {
    pub total: usize,
    pub ativos: usize,
    pub inativos: usize,
}

impl From<crate::application::ClientStats> for ClientStatsResponse {
    fn from(stats: crate::application::ClientStats) -> Self {
        Self {
            total: stats.total,
            ativos: stats.active,
            inativos: stats.inactive,
        }
    }
}
