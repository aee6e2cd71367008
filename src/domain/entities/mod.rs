#![allow(unused_imports)]

pub mod art;
pub mod feedback;
pub mod notification;
pub mod preferences;
pub mod project;
pub mod session;
pub mod shared_link;
pub mod task;
pub mod user_profile;

pub use art::{Art, ArtFile, ArtFileKind};
pub use feedback::{Feedback, FeedbackKind, FeedbackReply, FeedbackStatus};
pub use notification::Notification;
pub use preferences::Preferences;
pub use project::{Project, ProjectChanges, ProjectDraft, ProjectStatus};
pub use session::{AuthUser, Session, SessionState};
pub use shared_link::{LinkFlag, LinkKind, SharedLink, SharedLinkDraft};
pub use task::{Task, TaskPriority, TaskProjectRef, TaskStatus, TaskUserRef};
pub use user_profile::{ProfileChanges, ProfileDraft, UserKind, UserProfile};
