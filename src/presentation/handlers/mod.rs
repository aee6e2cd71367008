pub mod art_handler;
pub mod auth_handler;
pub mod client_handler;
pub mod feedback_handler;
pub mod link_handler;
pub mod notification_handler;
pub mod project_handler;
pub mod settings_handler;
pub mod task_handler;

pub use art_handler::ArtHandler;
pub use auth_handler::AuthHandler;
pub use client_handler::ClientHandler;
pub use feedback_handler::FeedbackHandler;
pub use link_handler::LinkHandler;
pub use notification_handler::NotificationHandler;
pub use project_handler::ProjectHandler;
pub use settings_handler::SettingsHandler;
pub use task_handler::TaskHandler;
