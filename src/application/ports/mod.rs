#![allow(unused_imports)]

pub mod auth_gateway;
pub mod blob_storage;
pub mod preference_store;
pub mod repositories;
pub mod secure_store;

pub use auth_gateway::{AuthGateway, SignUpOutcome};
pub use blob_storage::BlobStorage;
pub use preference_store::PreferenceStore;
pub use repositories::{
    ArtRepository, CounterQueries, FeedbackDraft, FeedbackRepository, NotificationRepository,
    PageWindow, ProjectRepository, SharedLinkRepository, TaskRepository, UserRepository,
};
pub use secure_store::SecureStore;
