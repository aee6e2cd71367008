use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{LinkKind, SharedLink, SharedLinkDraft};
use crate::presentation::dto::Validate;
use crate::shared::validation::require_non_empty;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    pub tipo: String,
    pub alvo_id: String,
    pub expira_em: Option<DateTime<Utc>>,
    #[serde(default)]
    pub somente_leitura: bool,
    #[serde(default = "default_true")]
    pub pode_comentar: bool,
    #[serde(default)]
    pub pode_baixar: bool,
}

fn default_true() -> bool {
    true
}

impl CreateLinkRequest {
    pub fn kind(&self) -> Option<LinkKind> {
        LinkKind::parse(&self.tipo)
    }

    pub fn into_draft(self) -> Option<SharedLinkDraft> {
        let kind = LinkKind::parse(&self.tipo)?;
        Some(SharedLinkDraft {
            kind,
            target_id: self.alvo_id,
            expires_at: self.expira_em,
            read_only: self.somente_leitura,
            can_comment: self.pode_comentar,
            can_download: self.pode_baixar,
        })
    }
}

impl Validate for CreateLinkRequest {
    fn validate(&self) -> Result<(), String> {
        if self.kind().is_none() {
            return Err(format!("tipo de link desconhecido: {}", self.tipo));
        }
        require_non_empty("alvo_id", &self.alvo_id)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetLinkExpiryRequest {
    pub link_id: String,
    pub expira_em: Option<DateTime<Utc>>,
}

impl Validate for SetLinkExpiryRequest {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("link_id", &self.link_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub token: String,
    pub tipo: String,
    pub alvo_id: Option<String>,
    pub url: String,
    pub expira_em: Option<DateTime<Utc>>,
    pub expira_em_label: String,
    pub expirado: bool,
    pub somente_leitura: bool,
    pub pode_comentar: bool,
    pub pode_baixar: bool,
    pub criado_em: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: &SharedLink, url: String, now: DateTime<Utc>) -> Self {
        Self {
            id: link.id.clone(),
            token: link.token.clone(),
            tipo: link.kind.as_wire().to_string(),
            alvo_id: link.target_id().map(str::to_string),
            url,
            expira_em: link.expires_at,
            expira_em_label: link.expiry_label(),
            expirado: link.is_expired(now),
            somente_leitura: link.read_only,
            pode_comentar: link.can_comment,
            pode_baixar: link.can_download,
            criado_em: link.created_at,
        }
    }
}
