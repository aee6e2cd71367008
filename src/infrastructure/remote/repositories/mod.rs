#![allow(unused_imports)]

pub mod arts;
pub mod counters;
pub mod feedbacks;
pub mod links;
pub mod notifications;
pub mod projects;
pub mod tasks;
pub mod users;

pub use arts::RemoteArtRepository;
pub use counters::RemoteCounterQueries;
pub use feedbacks::RemoteFeedbackRepository;
pub use links::RemoteSharedLinkRepository;
pub use notifications::RemoteNotificationRepository;
pub use projects::RemoteProjectRepository;
pub use tasks::RemoteTaskRepository;
pub use users::RemoteUserRepository;
