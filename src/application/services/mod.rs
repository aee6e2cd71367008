#![allow(unused_imports)]

pub mod art_service;
pub mod auth_service;
pub mod client_service;
pub mod counters_service;
pub mod feedback_service;
pub mod notification_service;
pub mod preferences_service;
pub mod profile_service;
pub mod project_service;
pub mod shared_link_service;
pub mod task_service;

pub use art_service::ArtService;
pub use auth_service::AuthService;
pub use client_service::{filter_clients, ClientFilter, ClientService, ClientStats};
pub use counters_service::{Counters, CountersService};
pub use feedback_service::{
    apply_feedback_view, AudioFlow, FeedbackFilter, FeedbackService, FeedbackSort,
};
pub use notification_service::NotificationService;
pub use preferences_service::PreferencesService;
pub use profile_service::ProfileService;
pub use project_service::{
    filter_projects, project_stats, ProjectFilter, ProjectService, ProjectStats,
};
pub use shared_link_service::{sort_links, LinkSort, SharedLinkService};
pub use task_service::{
    filter_tasks, sort_tasks, task_stats, TaskFilter, TaskService, TaskSort, TaskStats,
};
