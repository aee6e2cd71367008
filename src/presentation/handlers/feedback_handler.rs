use crate::{
    application::{apply_feedback_view, AudioFlow, FeedbackFilter, FeedbackService, FeedbackSort},
    presentation::dto::{
        feedback_dto::{
            CreateTextFeedbackRequest, FeedbackReplyResponse, FeedbackResponse,
            SetFeedbackStatusRequest,
        },
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;
use tracing::warn;

pub struct FeedbackHandler {
    feedback_service: Arc<FeedbackService>,
}

impl FeedbackHandler {
    pub fn new(feedback_service: Arc<FeedbackService>) -> Self {
        Self { feedback_service }
    }

    pub async fn open_art(&self, art_id: &str) -> Result<(), AppError> {
        self.feedback_service.open_art(art_id).await
    }

    pub async fn list(
        &self,
        filter: &FeedbackFilter,
        sort: FeedbackSort,
    ) -> Vec<FeedbackResponse> {
        let view = self.feedback_service.view().await;
        apply_feedback_view(&view.items, filter, sort)
            .iter()
            .map(FeedbackResponse::from)
            .collect()
    }

    pub async fn create_text(
        &self,
        request: CreateTextFeedbackRequest,
        author_id: Option<&str>,
    ) -> Result<FeedbackResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let feedback = self
            .feedback_service
            .create_text(&request.arte_id, &request.conteudo, author_id)
            .await?;
        Ok(FeedbackResponse::from(&feedback))
    }

    pub async fn audio_flow(&self) -> AudioFlow {
        self.feedback_service.audio_flow().await
    }

    pub async fn begin_recording(&self) {
        self.feedback_service.begin_recording().await;
    }

    pub async fn cancel_recording(&self) {
        self.feedback_service.cancel_recording().await;
    }

    pub async fn submit_audio(
        &self,
        art_id: &str,
        bytes: Vec<u8>,
        author_id: Option<&str>,
    ) -> Result<FeedbackResponse, AppError> {
        let feedback = self
            .feedback_service
            .submit_audio(art_id, bytes, author_id)
            .await?;
        Ok(FeedbackResponse::from(&feedback))
    }

    pub async fn set_status(&self, request: SetFeedbackStatusRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let status = request
            .status()
            .ok_or_else(|| AppError::InvalidInput(format!("unknown feedback status: {}", request.status)))?;

        self.feedback_service
            .set_status(&request.feedback_id, status, |error| {
                warn!("feedback status change reverted: {error}");
            })
            .await
    }

    pub async fn list_replies(
        &self,
        feedback_id: &str,
    ) -> Result<Vec<FeedbackReplyResponse>, AppError> {
        let replies = self.feedback_service.list_replies(feedback_id).await?;
        Ok(replies.iter().map(FeedbackReplyResponse::from).collect())
    }

    pub async fn create_reply(
        &self,
        feedback_id: &str,
        content: &str,
        author_id: Option<&str>,
    ) -> Result<FeedbackReplyResponse, AppError> {
        let reply = self
            .feedback_service
            .create_reply(feedback_id, content, author_id)
            .await?;
        Ok(FeedbackReplyResponse::from(&reply))
    }
}
