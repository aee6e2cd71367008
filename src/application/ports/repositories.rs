use crate::domain::entities::{
    Art, ArtFile, Feedback, FeedbackReply, FeedbackStatus, Notification, ProfileChanges,
    ProfileDraft, Project, ProjectChanges, ProjectDraft, SharedLink, SharedLinkDraft, Task,
    UserProfile,
};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Window of rows requested from a paginated listing (inclusive bounds, the
/// PostgREST `range` convention).
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub from: u32,
    pub to: u32,
}

impl PageWindow {
    pub fn for_page(page: u32, page_size: u32) -> Self {
        let from = page * page_size;
        Self {
            from,
            to: from + page_size - 1,
        }
    }
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, newest first.
    async fn list(&self) -> Result<Vec<Project>, AppError>;
    async fn get(&self, id: &str) -> Result<Option<Project>, AppError>;
    async fn create(&self, draft: ProjectDraft) -> Result<Project, AppError>;
    async fn update(&self, id: &str, changes: ProjectChanges) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ArtRepository: Send + Sync {
    /// Arts of one project, highest version first.
    async fn list_by_project(&self, project_id: &str) -> Result<Vec<Art>, AppError>;
    async fn get(&self, id: &str) -> Result<Option<Art>, AppError>;
    /// Newest PREVIEW file row for the art, if any.
    async fn current_preview(&self, art_id: &str) -> Result<Option<ArtFile>, AppError>;
    async fn list_files(&self, art_id: &str) -> Result<Vec<ArtFile>, AppError>;
}

/// Fields of a new feedback row; the id and timestamps are assigned remotely.
#[derive(Debug, Clone)]
pub struct FeedbackDraft {
    pub art_id: String,
    pub kind: crate::domain::entities::FeedbackKind,
    pub content: String,
    pub file: Option<String>,
    pub author_id: Option<String>,
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Feedbacks of one art, newest first.
    async fn list_by_art(&self, art_id: &str) -> Result<Vec<Feedback>, AppError>;
    async fn create(&self, draft: FeedbackDraft) -> Result<Feedback, AppError>;
    async fn set_status(&self, id: &str, status: FeedbackStatus) -> Result<(), AppError>;
    async fn list_replies(&self, feedback_id: &str) -> Result<Vec<FeedbackReply>, AppError>;
    async fn create_reply(
        &self,
        feedback_id: &str,
        content: &str,
        author_id: Option<&str>,
    ) -> Result<FeedbackReply, AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks with embedded project/client/responsible names, newest first.
    async fn list(&self) -> Result<Vec<Task>, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Profiles with `tipo = CLIENTE`.
    async fn list_clients(&self) -> Result<Vec<UserProfile>, AppError>;
    async fn get(&self, id: &str) -> Result<Option<UserProfile>, AppError>;
    /// Resolves the app profile linked to an auth user id, if any.
    async fn find_by_auth_user(&self, auth_user_id: &str) -> Result<Option<UserProfile>, AppError>;
    async fn create_profile(&self, draft: ProfileDraft) -> Result<UserProfile, AppError>;
    async fn link_auth_user(&self, usuario_id: &str, auth_user_id: &str) -> Result<(), AppError>;
    async fn update_profile(&self, id: &str, changes: ProfileChanges) -> Result<(), AppError>;
}

#[async_trait]
pub trait SharedLinkRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<SharedLink>, AppError>;
    async fn create(&self, token: &str, draft: SharedLinkDraft) -> Result<SharedLink, AppError>;
    async fn set_flag(&self, id: &str, column: &str, value: bool) -> Result<(), AppError>;
    async fn set_expiry(&self, id: &str, expires_at: Option<DateTime<Utc>>)
        -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// One page of notifications, newest first, optionally unread only.
    async fn list_page(
        &self,
        window: PageWindow,
        only_unread: bool,
    ) -> Result<Vec<Notification>, AppError>;
    async fn set_read(&self, id: &str, read: bool) -> Result<(), AppError>;
    /// Marks every unread notification as read in one remote call.
    async fn mark_all_read(&self) -> Result<(), AppError>;
}

/// Count-only queries behind the dashboard badges.
#[async_trait]
pub trait CounterQueries: Send + Sync {
    async fn pending_tasks(&self) -> Result<u64, AppError>;
    async fn feedbacks_since(&self, since: DateTime<Utc>) -> Result<u64, AppError>;
    async fn unread_notifications(&self) -> Result<u64, AppError>;
    async fn projects_due_by(&self, until: DateTime<Utc>) -> Result<u64, AppError>;
}
