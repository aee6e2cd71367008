use crate::application::ports::{BlobStorage, FeedbackDraft, FeedbackRepository};
use crate::application::shared::{optimistic_mutate, CollectionStore, ViewState};
use crate::domain::constants::BUCKET_AUDIOS;
use crate::domain::entities::{Feedback, FeedbackKind, FeedbackReply, FeedbackStatus};
use crate::shared::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Where the audio-feedback flow currently stands. Recording itself happens
/// in the shell; this tracks the handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFlow {
    Idle,
    Recording,
    Uploading,
    Linked,
}

/// Client-side view filter over the loaded feedback list.
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub status: Option<FeedbackStatus>,
    pub kind: Option<FeedbackKind>,
    /// When set, only feedbacks authored by this user are shown.
    pub author_id: Option<String>,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSort {
    Newest,
    Oldest,
}

pub struct FeedbackService {
    repository: Arc<dyn FeedbackRepository>,
    blobs: Arc<dyn BlobStorage>,
    store: Arc<CollectionStore<Feedback>>,
    current_art: RwLock<Option<String>>,
    audio_flow: RwLock<AudioFlow>,
}

impl FeedbackService {
    pub fn new(repository: Arc<dyn FeedbackRepository>, blobs: Arc<dyn BlobStorage>) -> Self {
        Self {
            repository,
            blobs,
            store: Arc::new(CollectionStore::new()),
            current_art: RwLock::new(None),
            audio_flow: RwLock::new(AudioFlow::Idle),
        }
    }

    pub async fn view(&self) -> ViewState<Feedback> {
        self.store.snapshot().await
    }

    pub async fn audio_flow(&self) -> AudioFlow {
        *self.audio_flow.read().await
    }

    /// Loads the feedback list of one art, replacing whatever was shown.
    pub async fn open_art(&self, art_id: &str) -> Result<(), AppError> {
        *self.current_art.write().await = Some(art_id.to_string());
        self.refresh().await
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let Some(art_id) = self.current_art.read().await.clone() else {
            return Ok(());
        };
        let gen = self.store.begin_fetch().await;
        match self.repository.list_by_art(&art_id).await {
            Ok(feedbacks) => {
                self.store.apply_refresh(gen, feedbacks).await;
                Ok(())
            }
            Err(err) => {
                self.store.apply_error(gen, err.user_message()).await;
                Err(err)
            }
        }
    }

    pub async fn create_text(
        &self,
        art_id: &str,
        content: &str,
        author_id: Option<&str>,
    ) -> Result<Feedback, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::ValidationError(
                "feedback content is required".to_string(),
            ));
        }
        let feedback = self
            .repository
            .create(FeedbackDraft {
                art_id: art_id.to_string(),
                kind: FeedbackKind::Text,
                content: content.to_string(),
                file: None,
                author_id: author_id.map(str::to_string),
            })
            .await?;
        self.refresh().await?;
        Ok(feedback)
    }

    /// Marks that the shell started capturing audio for the current art.
    pub async fn begin_recording(&self) {
        *self.audio_flow.write().await = AudioFlow::Recording;
    }

    pub async fn cancel_recording(&self) {
        *self.audio_flow.write().await = AudioFlow::Idle;
    }

    /// Uploads the captured audio and links it as an AUDIO feedback row.
    /// On upload or insert failure no row is created; an already-uploaded
    /// blob is left in place.
    pub async fn submit_audio(
        &self,
        art_id: &str,
        bytes: Vec<u8>,
        author_id: Option<&str>,
    ) -> Result<Feedback, AppError> {
        *self.audio_flow.write().await = AudioFlow::Uploading;
        let result = self.upload_and_link(art_id, bytes, author_id).await;
        match &result {
            Ok(_) => *self.audio_flow.write().await = AudioFlow::Linked,
            Err(err) => {
                warn!(art_id = %art_id, error = %err, "audio feedback failed");
                *self.audio_flow.write().await = AudioFlow::Idle;
            }
        }
        result
    }

    async fn upload_and_link(
        &self,
        art_id: &str,
        bytes: Vec<u8>,
        author_id: Option<&str>,
    ) -> Result<Feedback, AppError> {
        let path = format!("feedbacks/{art_id}/{}.m4a", Utc::now().timestamp_millis());
        let url = self
            .blobs
            .upload(BUCKET_AUDIOS, &path, "audio/m4a", bytes)
            .await?;
        let feedback = self
            .repository
            .create(FeedbackDraft {
                art_id: art_id.to_string(),
                kind: FeedbackKind::Audio,
                content: String::new(),
                file: Some(url),
                author_id: author_id.map(str::to_string),
            })
            .await?;
        self.refresh().await?;
        Ok(feedback)
    }

    /// Flips the status locally first, then confirms remotely; the remote
    /// failure restores the list and reports through `on_failure`.
    pub async fn set_status(
        &self,
        id: &str,
        status: FeedbackStatus,
        on_failure: impl FnOnce(&AppError),
    ) -> Result<(), AppError> {
        let target = id.to_string();
        optimistic_mutate(
            &self.store,
            move |items| {
                if let Some(item) = items.iter_mut().find(|f| f.id == target) {
                    item.status = status;
                }
            },
            self.repository.set_status(id, status),
            on_failure,
        )
        .await
    }

    pub async fn list_replies(&self, feedback_id: &str) -> Result<Vec<FeedbackReply>, AppError> {
        self.repository.list_replies(feedback_id).await
    }

    pub async fn create_reply(
        &self,
        feedback_id: &str,
        content: &str,
        author_id: Option<&str>,
    ) -> Result<FeedbackReply, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::ValidationError(
                "reply content is required".to_string(),
            ));
        }
        self.repository
            .create_reply(feedback_id, content, author_id)
            .await
    }
}

/// Filters and sorts the loaded feedbacks for display. Ties break on id so
/// equal timestamps render in a stable order.
pub fn apply_feedback_view(
    feedbacks: &[Feedback],
    filter: &FeedbackFilter,
    sort: FeedbackSort,
) -> Vec<Feedback> {
    let query = filter.query.trim().to_lowercase();
    let mut view: Vec<Feedback> = feedbacks
        .iter()
        .filter(|f| filter.status.map_or(true, |s| f.status == s))
        .filter(|f| filter.kind.map_or(true, |k| f.kind == k))
        .filter(|f| {
            filter
                .author_id
                .as_deref()
                .map_or(true, |author| f.author_id.as_deref() == Some(author))
        })
        .filter(|f| query.is_empty() || f.content.to_lowercase().contains(&query))
        .cloned()
        .collect();
    view.sort_by(|a, b| {
        let ordering = match sort {
            FeedbackSort::Newest => b.created_at.cmp(&a.created_at),
            FeedbackSort::Oldest => a.created_at.cmp(&b.created_at),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    });
    view
}
