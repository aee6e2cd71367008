use super::Validate;
use crate::domain::entities::{Feedback, FeedbackReply, FeedbackStatus};
use crate::shared::validation::require_non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTextFeedbackRequest {
    pub arte_id: String,
    pub conteudo: String,
}

impl Validate for CreateTextFeedbackRequest {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("arte_id", &self.arte_id)?;
        require_non_empty("conteudo", &self.conteudo)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetFeedbackStatusRequest {
    pub feedback_id: String,
    pub status: String,
}

impl SetFeedbackStatusRequest {
    pub fn status(&self) -> Option<FeedbackStatus> {
        FeedbackStatus::parse(&self.status)
    }
}

impl Validate for SetFeedbackStatusRequest {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("feedback_id", &self.feedback_id)?;
        if self.status().is_none() {
            return Err(format!("unknown feedback status: {}", self.status));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub conteudo: String,
    pub tipo: String,
    pub arquivo: Option<String>,
    pub status: String,
    pub autor_id: Option<String>,
    pub criado_em: String,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id.clone(),
            conteudo: feedback.content.clone(),
            tipo: feedback.kind.as_wire().to_string(),
            arquivo: feedback.file.clone(),
            status: feedback.status.as_wire().to_string(),
            autor_id: feedback.author_id.clone(),
            criado_em: feedback.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackReplyResponse {
    pub id: String,
    pub conteudo: String,
    pub autor_id: Option<String>,
    pub criado_em: String,
}

impl From<&FeedbackReply> for FeedbackReplyResponse {
    fn from(reply: &FeedbackReply) -> Self {
        Self {
            id: reply.id.clone(),
            conteudo: reply.content.clone(),
            autor_id: reply.author_id.clone(),
            criado_em: reply.created_at.to_rfc3339(),
        }
    }
}
