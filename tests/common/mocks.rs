use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use viu_lib::application::ports::{
    AuthGateway, BlobStorage, FeedbackDraft, FeedbackRepository, NotificationRepository,
    PageWindow, SharedLinkRepository, SignUpOutcome,
};
use viu_lib::domain::entities::{
    Feedback, FeedbackReply, FeedbackStatus, LinkKind, Notification, Session, SharedLink,
    SharedLinkDraft, UserKind,
};
use viu_lib::shared::error::AppError;

use super::fixtures;

/// Notification backlog backed by a plain vector; `fail_writes` makes every
/// mutation return a network error so optimistic rollbacks can be observed.
pub struct MemoryNotificationRepo {
    pub rows: Mutex<Vec<Notification>>,
    pub fail_writes: AtomicBool,
    pub list_calls: AtomicUsize,
}

impl MemoryNotificationRepo {
    pub fn with_rows(rows: Vec<Notification>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_writes: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
        }
    }

    fn write_guard(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(AppError::Network("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotificationRepo {
    async fn list_page(
        &self,
        window: PageWindow,
        only_unread: bool,
    ) -> Result<Vec<Notification>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|n| !only_unread || !n.read)
            .skip(window.from as usize)
            .take((window.to - window.from + 1) as usize)
            .cloned()
            .collect())
    }

    async fn set_read(&self, id: &str, read: bool) -> Result<(), AppError> {
        self.write_guard()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|n| n.id == id) {
            row.read = read;
        }
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), AppError> {
        self.write_guard()?;
        for row in self.rows.lock().unwrap().iter_mut() {
            row.read = true;
        }
        Ok(())
    }
}

pub struct MemoryFeedbackRepo {
    pub rows: Mutex<Vec<Feedback>>,
    next_id: AtomicUsize,
}

impl MemoryFeedbackRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackRepo {
    async fn list_by_art(&self, art_id: &str) -> Result<Vec<Feedback>, AppError> {
        let rows = self.rows.lock().unwrap();
        let mut result: Vec<Feedback> =
            rows.iter().filter(|f| f.art_id == art_id).cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn create(&self, draft: FeedbackDraft) -> Result<Feedback, AppError> {
        let id = format!("fb-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let feedback = Feedback {
            id,
            content: draft.content,
            kind: draft.kind,
            file: draft.file,
            position_x: None,
            position_y: None,
            art_id: draft.art_id,
            author_id: draft.author_id,
            status: FeedbackStatus::Open,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(feedback.clone());
        Ok(feedback)
    }

    async fn set_status(&self, id: &str, status: FeedbackStatus) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|f| f.id == id) {
            row.status = status;
        }
        Ok(())
    }

    async fn list_replies(&self, _feedback_id: &str) -> Result<Vec<FeedbackReply>, AppError> {
        Ok(Vec::new())
    }

    async fn create_reply(
        &self,
        feedback_id: &str,
        content: &str,
        author_id: Option<&str>,
    ) -> Result<FeedbackReply, AppError> {
        Ok(FeedbackReply {
            id: format!("rp-{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
            content: content.to_string(),
            kind: viu_lib::domain::entities::FeedbackKind::Text,
            file: None,
            author_id: author_id.map(str::to_string),
            feedback_id: feedback_id.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Blob store that records uploads; flipping `fail_uploads` simulates a
/// storage outage.
pub struct MemoryBlobs {
    pub uploads: Mutex<Vec<String>>,
    pub fail_uploads: AtomicBool,
}

impl MemoryBlobs {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail_uploads: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobs {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(AppError::Storage("bucket unavailable".to_string()));
        }
        self.uploads.lock().unwrap().push(path.to_string());
        Ok(self.public_url(bucket, path))
    }

    async fn delete(&self, _bucket: &str, _path: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("https://blobs.test/{bucket}/{path}")
    }
}

pub struct MemoryLinkRepo {
    pub rows: Mutex<Vec<SharedLink>>,
    pub fail_writes: AtomicBool,
    next_id: AtomicUsize,
}

impl MemoryLinkRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            next_id: AtomicUsize::new(1),
        }
    }

    fn write_guard(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(AppError::Network("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SharedLinkRepository for MemoryLinkRepo {
    async fn list(&self) -> Result<Vec<SharedLink>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, token: &str, draft: SharedLinkDraft) -> Result<SharedLink, AppError> {
        self.write_guard()?;
        let link = SharedLink {
            id: format!("lk-{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
            token: token.to_string(),
            kind: draft.kind,
            art_id: (draft.kind == LinkKind::Art).then(|| draft.target_id.clone()),
            project_id: (draft.kind == LinkKind::Project).then(|| draft.target_id.clone()),
            expires_at: draft.expires_at,
            read_only: draft.read_only,
            can_comment: draft.can_comment,
            can_download: draft.can_download,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(link.clone());
        Ok(link)
    }

    async fn set_flag(&self, id: &str, column: &str, value: bool) -> Result<(), AppError> {
        self.write_guard()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(link) = rows.iter_mut().find(|l| l.id == id) {
            match column {
                "somente_leitura" => link.read_only = value,
                "can_comment" => link.can_comment = value,
                "can_download" => link.can_download = value,
                _ => {}
            }
        }
        Ok(())
    }

    async fn set_expiry(
        &self,
        id: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        self.write_guard()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(link) = rows.iter_mut().find(|l| l.id == id) {
            link.expires_at = expires_at;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.write_guard()?;
        self.rows.lock().unwrap().retain(|l| l.id != id);
        Ok(())
    }
}

/// Identity provider with canned answers: the code `good-code` and the token
/// hash `good-hash` yield a session, anything else is rejected.
pub struct FakeAuthGateway {
    pub user_kind: Option<UserKind>,
    pub refresh_accepted: AtomicBool,
    pub kind_updates: Mutex<Vec<UserKind>>,
}

impl FakeAuthGateway {
    pub fn new(user_kind: Option<UserKind>) -> Self {
        Self {
            user_kind,
            refresh_accepted: AtomicBool::new(true),
            kind_updates: Mutex::new(Vec::new()),
        }
    }

    fn session(&self) -> Session {
        fixtures::session("user-1", self.user_kind)
    }
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, AppError> {
        Ok(self.session())
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _kind: UserKind,
    ) -> Result<SignUpOutcome, AppError> {
        Ok(SignUpOutcome::ConfirmationPending)
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<Session, AppError> {
        if self.refresh_accepted.load(Ordering::SeqCst) {
            Ok(self.session())
        } else {
            Err(AppError::Auth("refresh token revoked".to_string()))
        }
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn send_magic_link(&self, _email: &str, _redirect_to: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn exchange_code(&self, code: &str, _verifier: &str) -> Result<Session, AppError> {
        if code == "good-code" {
            Ok(self.session())
        } else {
            Err(AppError::Auth("invalid authorization code".to_string()))
        }
    }

    async fn verify_token_hash(&self, token_hash: &str, _kind: &str) -> Result<Session, AppError> {
        if token_hash == "good-hash" {
            Ok(self.session())
        } else {
            Err(AppError::Auth("token hash expired".to_string()))
        }
    }

    async fn send_recovery(&self, _email: &str, _redirect_to: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn update_password(
        &self,
        _access_token: &str,
        _new_password: &str,
    ) -> Result<(), AppError> {
        Ok(())
    }

    async fn update_user_kind(&self, _access_token: &str, kind: UserKind) -> Result<(), AppError> {
        self.kind_updates.lock().unwrap().push(kind);
        Ok(())
    }
}
